use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LOG_LEVEL: &str = "info";

pub struct Config {
    pub database_url: String,

    /// Default tracing filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}
