use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::{
    MySql, Pool,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
};

use crate::{config::config::DatabaseConfig, health::models::ProbeError};

/// Something that can tell whether the database answers.
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    async fn probe(&self) -> Result<(), ProbeError>;
}

#[async_trait]
impl DatabaseProbe for Pool<MySql> {
    async fn probe(&self) -> Result<(), ProbeError> {
        health_check(self).await?;
        Ok(())
    }
}

/// Builds the pool without opening a connection. Connections are opened on
/// first checkout and never exceed `max_connections`.
pub fn connect_lazy(config: &DatabaseConfig) -> Pool<MySql> {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(config.password.expose_secret())
        .database(&config.name);

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(options)
}

pub async fn health_check(pool: &Pool<MySql>) -> Result<(), sqlx::Error> {
    let _ = sqlx::query("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
