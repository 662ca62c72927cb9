use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use tracing::error;

use crate::server::{app_state::AppState, error::ServerError};

pub static RUNNING_MESSAGE: &str = "Application is running!";

pub fn health_routes(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(health)).with_state(state)
}

async fn health(State(state): State<Arc<AppState>>) -> Result<&'static str, ServerError> {
    if let Err(e) = state.get_probe().probe().await {
        error!(kind = %e.kind(), "Database connection error: {}", e);
        return Err(ServerError::DatabaseUnavailable(e));
    }

    Ok(RUNNING_MESSAGE)
}
