use std::sync::Arc;

use axum::{Router, middleware::from_fn};

use crate::{
    health::handlers::health_routes, mw::request_mw::request_mw, server::app_state::AppState,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes(state))
        .layer(from_fn(request_mw))
}
