// File: chainwatch/src/web/server.rs
use crate::config::Config;
use crate::services::HealthService;
use crate::web::{handlers, AppState};
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub async fn start_web_server(config: Arc<Config>, health_service: Arc<HealthService>) -> Result<()> {
    let state = AppState::new(config, health_service);
    let app = create_router(state.clone());
    let addr = format!("{}:{}", state.config.host, state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        // === HEALTH MONITORING ROUTES ===
        .route("/health", get(handlers::get_health_status))
        .route("/health/dashboard", get(handlers::get_health_dashboard))
        .route(
            "/health/chains/{chain_id}",
            get(handlers::get_chain_health).delete(handlers::unregister_chain),
        )
        .route(
            "/health/chains/{chain_id}/heartbeat",
            post(handlers::record_heartbeat),
        )
        // Add middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
