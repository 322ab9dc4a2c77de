// Health monitoring endpoints

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Serialize;
use tracing::{debug, info};

use super::common::{not_found, ApiResponse, ApiResult};
use crate::constants::api;
use crate::health::{ChainHealthReport, Dashboard, ServiceStatus};
use crate::web::AppState;

#[derive(Debug, Serialize)]
pub struct HeartbeatAck {
    pub chain_id: String,
    pub last_seen: Option<String>,
}

/// Service banner
pub async fn root() -> ApiResult<String> {
    Ok(Json(ApiResponse::success(api::SERVICE_BANNER.to_string())))
}

/// Liveness of the API itself
pub async fn get_health_status(State(state): State<AppState>) -> ApiResult<ServiceStatus> {
    Ok(Json(ApiResponse::success(
        state.health_service.get_overall_status(),
    )))
}

/// Health status and metrics for one chain, creating its monitor on first use
pub async fn get_chain_health(
    Path(chain_id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<ChainHealthReport> {
    let report = state.health_service.get_chain_health(&chain_id).await;
    debug!("Chain '{}' health: {}", chain_id, report.status);
    Ok(Json(ApiResponse::success(report)))
}

/// Overview of every monitored chain
pub async fn get_health_dashboard(State(state): State<AppState>) -> ApiResult<Dashboard> {
    let dashboard = state.health_service.get_dashboard().await;
    Ok(Json(ApiResponse::success(dashboard)))
}

/// Inbound heartbeat from a chain
pub async fn record_heartbeat(
    Path(chain_id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<HeartbeatAck> {
    if !state.health_service.record_heartbeat(&chain_id).await {
        return Err(not_found(format!("Chain {} not registered", chain_id)));
    }

    let last_seen = state
        .health_service
        .heartbeats()
        .last_seen(&chain_id)
        .await
        .map(|ts| ts.to_rfc3339());

    Ok(Json(ApiResponse::success(HeartbeatAck {
        chain_id,
        last_seen,
    })))
}

/// Stop monitoring a chain
pub async fn unregister_chain(
    Path(chain_id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<String> {
    if !state.health_service.unregister_chain(&chain_id).await {
        return Err(not_found(format!("Chain {} not found", chain_id)));
    }
    info!("Chain {} unregistered via API", chain_id);
    Ok(Json(ApiResponse::success(format!(
        "Chain {} unregistered",
        chain_id
    ))))
}
