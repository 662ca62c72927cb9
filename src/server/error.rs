use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{config::config::ConfigError, health::models::ProbeError};

pub static DATABASE_FAILED_MESSAGE: &str = "Database connection failed";

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(#[from] ProbeError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::DatabaseUnavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, DATABASE_FAILED_MESSAGE).into_response()
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
