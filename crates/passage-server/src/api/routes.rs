//! REST API routes.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;
use passage_core::{planner, Place, RouteRequest};

const SERVICE_NAME: &str = "Passage Planning API";

/// Create the API router.
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/plan", post(plan_route))
        .route("/health", get(health))
        .route("/ports", get(list_ports))
}

// === Response types ===

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct PortsResponse {
    ports: Vec<Place>,
    count: usize,
}

// === Handlers ===

async fn plan_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteRequest>,
) -> impl IntoResponse {
    match planner::plan(state.catalog(), &request) {
        Ok(plan) => {
            tracing::info!(
                from = %plan.route.from,
                to = %plan.route.to,
                distance_nm = %plan.route.total_distance_nm,
                "Generated route plan"
            );
            (StatusCode::OK, Json(serde_json::json!(plan)))
        }
        Err(err) if err.is_client_error() => {
            tracing::warn!("Rejected plan request: {}", err);
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": err.to_string() })),
            )
        }
        Err(err) => {
            tracing::error!("Route planning error: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": "Internal server error during route planning",
                    "message": err.to_string(),
                })),
            )
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn list_ports(State(state): State<Arc<AppState>>) -> Json<PortsResponse> {
    let ports = state.catalog().gazetteer.places();
    let count = ports.len();
    Json(PortsResponse { ports, count })
}
