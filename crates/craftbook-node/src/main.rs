//! # Craftbook Node
//!
//! HTTP tool host exposing the craft query engine to agents.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod api;
mod config;
mod state;

use config::NodeConfig;
use state::AppState;

/// Run the Craftbook node server.
pub async fn run_server(config: NodeConfig) -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Craftbook node starting...");

    let catalog = config.load_catalog()?;
    let state = AppState::new(Arc::new(catalog));

    let app = create_router(state);

    info!("Listening on http://{}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the API router.
fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::health::health_check))
        .route("/api/v1/tools", get(api::tools::list_tools))
        .route("/api/v1/crafts", get(api::crafts::list_crafts))
        .route("/api/v1/crafts/random", get(api::crafts::random_craft))
        .route("/api/v1/crafts/materials", post(api::crafts::by_materials))
        .route("/api/v1/crafts/category/:category", get(api::crafts::by_category))
        .route("/api/v1/crafts/difficulty/:difficulty", get(api::crafts::by_difficulty))
        .route("/api/v1/crafts/:id", get(api::crafts::get_craft))
        .route("/api/v1/estimate", post(api::crafts::estimate))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = NodeConfig::from_env()?;
    run_server(config).await
}
