use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::config::ServerConfig;
use api::gql::build_schema;
use api::state::AppState;
use infra::repos::{games, studios};
use infra::Db;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Volatile: everything added at runtime is gone on restart
    let db = Db::seeded();
    tracing::info!(
        devs = studios::list(&db).len(),
        games = games::list(&db).len(),
        "In-memory store seeded"
    );

    let port = config.port;
    let state = AppState::new(db, config);

    let schema = build_schema(state.clone());
    let app = build_router(state, schema);

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
