use api::config::ServerConfig;
use api::gql::AppSchema;
use api::AppState;
use async_graphql::{Request, Variables};
use infra::Db;

/// State over the seeded catalogue. Each call gets its own store.
pub fn setup_state() -> AppState {
    AppState::new(Db::seeded(), ServerConfig::default())
}

#[allow(dead_code)]
pub fn setup_empty_state() -> AppState {
    AppState::new(Db::new(), ServerConfig::default())
}

/// Helper function to execute GraphQL queries and mutations
#[allow(dead_code)]
pub async fn execute_graphql(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}

/// Run a request that must succeed and return its `data` as JSON.
#[allow(dead_code)]
pub async fn execute_ok(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
) -> serde_json::Value {
    let response = execute_graphql(schema, query, variables).await;
    assert!(
        response.errors.is_empty(),
        "Request should succeed: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}
