use crate::catalog::Catalog;
use crate::database::DatabaseService;
use serde::Deserialize;
use std::fs;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File read error")]
    FileError,

    #[error("Deserialization error:{0}")]
    DeserializationError(String),

    #[error("Database setup error:{0}")]
    DatabaseError(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub proposal: ProposalConfig,
    pub webhook: WebhookConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProposalConfig {
    /// Generated documents land here, one subdirectory per client.
    pub output_dir: String,
    pub signature_name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WebhookConfig {
    pub url: Option<String>,
    #[serde(default = "default_webhook_timeout")]
    pub timeout_secs: u64,
}

fn default_webhook_timeout() -> u64 {
    10
}

impl Config {
    pub fn new(config_file: &str) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(config_file).map_err(|_| ConfigError::FileError)?;
        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;
        Ok(config)
    }
}

/// Shared process context handed to every service.
#[derive(Clone)]
pub struct Context {
    pub config: Config,
    pub database: Arc<DatabaseService>,
    pub catalog: Arc<Catalog>,
}

impl Context {
    pub fn new(config_file: &str) -> Result<Self, ConfigError> {
        let config = Config::new(config_file)?;
        let database = DatabaseService::new()
            .map_err(|e| ConfigError::DatabaseError(e.to_string()))?;
        Ok(Self {
            config,
            database: Arc::new(database),
            catalog: Arc::new(Catalog::new()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_with_defaults() {
        let raw = r#"{
            "server": { "port": 3030 },
            "proposal": { "output_dir": "output", "signature_name": "Christopher Helm" },
            "webhook": { "url": null }
        }"#;
        let config: Config = serde_json::from_str(raw).unwrap();
        assert_eq!(config.server.port, 3030);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.webhook.timeout_secs, 10);
        assert!(config.webhook.url.is_none());
    }

    #[test]
    fn missing_config_file_is_a_file_error() {
        let result = Config::new("does-not-exist.json");
        assert!(matches!(result, Err(ConfigError::FileError)));
    }
}
