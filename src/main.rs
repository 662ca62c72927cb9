use std::process::ExitCode;

use ::config::Environment;
use dotenv::dotenv;
use tracing::{error, level_filters::LevelFilter};
use tracing_subscriber::FmtSubscriber;

use crate::{config::config::ENV_PREFIX, server::startup::run};

mod config;
mod health;
mod mw;
mod server;

#[cfg(test)]
mod tests;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize .env
    dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::INFO)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global tracing: {}", e);
        return ExitCode::FAILURE;
    }

    match run(Environment::with_prefix(ENV_PREFIX)).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
