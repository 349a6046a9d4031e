use std::time::Duration;

use async_graphql::http::{parse_query_string, GraphiQLSource};
use async_graphql::parser::{parse_query, types::DocumentOperations, types::OperationType};
use async_graphql::{ObjectType, Schema, SubscriptionType};
use async_graphql_axum::GraphQLResponse;
use axum::{
    extract::{Request, State},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderMap, HeaderValue, Method, StatusCode, Uri,
    },
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AllowedOrigins;
use crate::error::AppError;
use crate::state::AppState;

const GRAPHQL_PATH: &str = "/graphql";
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Build the Axum router with health endpoint and GraphQL
/// Generic over the schema roots so tests can mount any schema.
pub fn build_router<Q, M, S>(state: AppState, schema: Schema<Q, M, S>) -> Router
where
    Q: ObjectType + Send + Sync + 'static,
    M: ObjectType + Send + Sync + 'static,
    S: SubscriptionType + Send + Sync + 'static,
{
    let timeout = Duration::from_secs(state.config().request_timeout_secs);
    let cors = cors_layer(&state.config().allowed_origins);

    Router::new()
        .route("/health", get(health))
        .route(
            GRAPHQL_PATH,
            post({
                let schema = schema.clone();
                move |req| graphql_handler(req, schema)
            })
            .get(move |state, headers, uri| {
                graphql_get_handler(state, headers, uri, schema)
            }),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout))
        .layer(cors)
}

fn cors_layer(allowed: &AllowedOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    match allowed {
        AllowedOrigins::Any => layer.allow_origin(Any),
        AllowedOrigins::List(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|o| match o.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %o, "Ignoring unparsable CORS origin");
                        None
                    }
                })
                .collect();
            layer.allow_origin(origins)
        }
    }
}

async fn graphql_handler<Q, M, S>(
    req: Request,
    schema: Schema<Q, M, S>,
) -> Result<Response, AppError>
where
    Q: ObjectType + Send + Sync + 'static,
    M: ObjectType + Send + Sync + 'static,
    S: SubscriptionType + Send + Sync + 'static,
{
    let (_parts, body) = req.into_parts();
    let body_bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to read request body: {}", e)))?;

    let gql_request: async_graphql::Request = serde_json::from_slice(&body_bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid GraphQL request: {}", e)))?;

    let gql_response = schema.execute(gql_request).await;

    Ok(GraphQLResponse::from(gql_response).into_response())
}

/// Runs `?query=...` operations; a browser asking for HTML with no query gets
/// GraphiQL instead. Mutations are only accepted over POST.
async fn graphql_get_handler<Q, M, S>(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    schema: Schema<Q, M, S>,
) -> Result<Response, AppError>
where
    Q: ObjectType + Send + Sync + 'static,
    M: ObjectType + Send + Sync + 'static,
    S: SubscriptionType + Send + Sync + 'static,
{
    let query_string = uri.query().filter(|q| !q.is_empty());

    let Some(query_string) = query_string else {
        if state.config().graphiql && accepts_html(&headers) {
            let page = GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish();
            return Ok(Html(page).into_response());
        }
        return Err(AppError::BadRequest("Must provide query string".to_string()));
    };

    let gql_request = parse_query_string(query_string)
        .map_err(|e| AppError::BadRequest(format!("Invalid GraphQL request: {}", e)))?;

    if is_mutation(&gql_request.query, gql_request.operation_name.as_deref()) {
        return Err(AppError::MethodNotAllowed(
            "Can only perform a mutation operation from a POST request".to_string(),
        ));
    }

    let gql_response = schema.execute(gql_request).await;

    Ok(GraphQLResponse::from(gql_response).into_response())
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Documents that fail to parse are left to `execute` to report.
fn is_mutation(query: &str, operation_name: Option<&str>) -> bool {
    let Ok(document) = parse_query(query) else {
        return false;
    };

    let ty = match &document.operations {
        DocumentOperations::Single(operation) => Some(operation.node.ty),
        DocumentOperations::Multiple(operations) => operation_name.and_then(|wanted| {
            operations
                .iter()
                .find(|(name, _)| name.as_str() == wanted)
                .map(|(_, operation)| operation.node.ty)
        }),
    };

    matches!(ty, Some(OperationType::Mutation))
}

async fn health() -> &'static str {
    "ok"
}
