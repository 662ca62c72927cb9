use ::config::Environment;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::config::AppConfig,
    health::db::connect_lazy,
    server::{
        app_state::AppState, error::StartupError, router::build_router, shutdown::shutdown_signal,
    },
};

/// Loads configuration, builds the pool and serves until shutdown.
/// Configuration is validated before anything is bound.
pub async fn run(source: Environment) -> Result<(), StartupError> {
    let config = AppConfig::from_source(source)?;

    let pool = connect_lazy(&config.database);
    let app = build_router(AppState::new(pool.clone()));

    let listener = TcpListener::bind(config.server.bind_address())
        .await
        .map_err(StartupError::Bind)?;

    info!("Server running on port {}", config.server.port);
    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    pool.close().await;
    info!("Database pool closed");

    result.map_err(StartupError::Serve)
}
