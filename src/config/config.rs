use ::config::{Config, Environment};
use secrecy::SecretString;
use serde::Deserialize;

pub const ENV_PREFIX: &str = "DB";
static PLACEHOLDERS: [&str; 3] = ["changeme", "change-me", "placeholder"];

pub const SERVER_ADDRESS: &str = "0.0.0.0";
pub const SERVER_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    Missing(&'static str),

    #[error("{0} environment variable holds a placeholder value")]
    Placeholder(&'static str),

    #[error("{0} {1}")]
    Invalid(&'static str, &'static str),

    #[error("Failed to read configuration: {0}")]
    Source(#[from] ::config::ConfigError),
}

#[derive(Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: SERVER_ADDRESS.into(),
            port: SERVER_PORT,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

#[derive(Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: SecretString,
    pub name: String,
    pub max_connections: u32,
}

// Keys as they come out of the `DB_` prefixed environment, lowercased
#[derive(Debug, Deserialize)]
struct RawDatabaseConfig {
    private_ip: Option<String>,
    port: u16,
    user: String,
    password: Option<String>,
    name: String,
    max_connections: u32,
}

impl AppConfig {
    /// Builds the configuration from an environment source, applying defaults
    /// and refusing incomplete or placeholder values.
    pub fn from_source(source: Environment) -> Result<Self, ConfigError> {
        let raw = Config::builder()
            .set_default("port", 3306_i64)?
            .set_default("user", "app_user")?
            .set_default("name", "app_db")?
            .set_default("max_connections", 10_i64)?
            .add_source(source)
            .build()?
            .try_deserialize::<RawDatabaseConfig>()?;

        let host = required("DB_PRIVATE_IP", raw.private_ip)?;
        let password = required("DB_PASSWORD", raw.password)?;
        let user = required("DB_USER", Some(raw.user))?;
        let name = required("DB_NAME", Some(raw.name))?;

        if raw.max_connections == 0 {
            return Err(ConfigError::Invalid("DB_MAX_CONNECTIONS", "must be at least 1"));
        }

        let database = DatabaseConfig {
            host,
            port: raw.port,
            user,
            password: SecretString::from(password),
            name,
            max_connections: raw.max_connections,
        };

        Ok(Self {
            server: ServerConfig::default(),
            database,
        })
    }
}

// Checks run on the trimmed value, the value itself is returned untouched
fn required(key: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    let value = value.unwrap_or_default();
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::Missing(key));
    }

    if is_placeholder(trimmed) {
        return Err(ConfigError::Placeholder(key));
    }

    Ok(value)
}

fn is_placeholder(value: &str) -> bool {
    let lowered = value.to_lowercase();
    if PLACEHOLDERS.contains(&lowered.as_str()) {
        return true;
    }

    lowered.starts_with('<') && lowered.ends_with('>')
}
