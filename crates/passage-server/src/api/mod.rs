//! API routes for the passage planning server.

mod routes;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    routes::create_router()
}
