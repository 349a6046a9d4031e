mod common;

use api::app::build_router;
use api::config::{AllowedOrigins, ServerConfig};
use api::gql::build_schema;
use api::AppState;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use common::*;
use infra::Db;
use serde_json::json;
use tower::ServiceExt;

fn router_for(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    build_router(state, schema)
}

fn graphql_post(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = router_for(setup_state());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn test_graphql_post_executes_query() {
    let app = router_for(setup_state());

    let body = json!({ "query": "query { game(id: 9) { name dev { name } } }" }).to_string();
    let response = app.oneshot(graphql_post(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "data": {
                "game": { "name": "God of War: Ragnarok", "dev": { "name": "Santa Monica" } }
            }
        })
    );
}

#[tokio::test]
async fn test_graphql_post_mutation_is_visible_to_next_request() {
    let app = router_for(setup_state());

    let add = json!({
        "query": "mutation AddDev($name: String!) { addDev(name: $name) { id } }",
        "variables": { "name": "FromSoftware" }
    })
    .to_string();
    let response = app.clone().oneshot(graphql_post(add)).await.unwrap();
    assert_eq!(
        body_json(response).await,
        json!({ "data": { "addDev": { "id": 11 } } })
    );

    let read = json!({ "query": "query { dev(id: 11) { name } }" }).to_string();
    let response = app.oneshot(graphql_post(read)).await.unwrap();
    assert_eq!(
        body_json(response).await,
        json!({ "data": { "dev": { "name": "FromSoftware" } } })
    );
}

#[tokio::test]
async fn test_graphql_post_malformed_body_is_bad_request() {
    let app = router_for(setup_state());

    let response = app.oneshot(graphql_post("not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(
        body["error"].as_str().unwrap().starts_with("bad request"),
        "unexpected error body: {body}"
    );
}

#[tokio::test]
async fn test_graphql_syntax_error_is_reported_in_response() {
    let app = router_for(setup_state());

    let body = json!({ "query": "query { games { id " }).to_string();
    let response = app.oneshot(graphql_post(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin_by_default() {
    let app = router_for(setup_state());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/graphql")
        .header(header::ORIGIN, "http://somewhere.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_cors_allow_list_only_echoes_listed_origins() {
    let config = ServerConfig {
        allowed_origins: AllowedOrigins::List(vec!["http://localhost:3000".to_string()]),
        ..ServerConfig::default()
    };
    let app = router_for(AppState::new(Db::seeded(), config));

    let request = |origin: &str| {
        Request::get("/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    };

    let allowed = app
        .clone()
        .oneshot(request("http://localhost:3000"))
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );

    let denied = app.oneshot(request("http://evil.example")).await.unwrap();
    assert!(denied
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

fn browser_get(uri: &str) -> Request<Body> {
    Request::get(uri)
        .header(header::ACCEPT, "text/html,application/xhtml+xml")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_graphql_get_executes_query_string() {
    let app = router_for(setup_state());

    let response = app
        .oneshot(
            Request::get("/graphql?query=%7Bgame(id%3A1)%7Bname%7D%7D")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "data": { "game": { "name": "Tekken 7" } } })
    );
}

#[tokio::test]
async fn test_graphql_get_with_query_runs_even_for_browsers() {
    let app = router_for(setup_state());

    let response = app
        .oneshot(browser_get(
            "/graphql?query=query%20Dev(%24id%3A%20Int)%20%7Bdev(id%3A%20%24id)%20%7Bname%7D%7D&variables=%7B%22id%22%3A7%7D",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "data": { "dev": { "name": "Capcom" } } })
    );
}

#[tokio::test]
async fn test_graphql_get_rejects_mutations() {
    let app = router_for(setup_state());

    let response = app
        .clone()
        .oneshot(
            Request::get("/graphql?query=mutation%7BaddDev(name%3A%22Y%22)%7Bid%7D%7D")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let read = json!({ "query": "query { devs { id } }" }).to_string();
    let response = app.oneshot(graphql_post(read)).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["devs"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_graphql_get_without_query_is_bad_request_for_non_browsers() {
    let app = router_for(setup_state());

    let response = app
        .oneshot(
            Request::get("/graphql")
                .header(header::ACCEPT, "application/json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_graphiql_served_to_browsers() {
    let app = router_for(setup_state());

    let response = app.oneshot(browser_get("/graphql")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_graphiql_disabled_is_bad_request() {
    let config = ServerConfig {
        graphiql: false,
        ..ServerConfig::default()
    };
    let app = router_for(AppState::new(Db::seeded(), config));

    let response = app.oneshot(browser_get("/graphql")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
