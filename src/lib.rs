pub mod catalog;
pub mod configuration;
pub mod core;
pub mod database;
pub mod document;
pub mod notification;
pub mod offer;
pub mod pdf;
pub mod pricing;
pub mod quote;
pub mod server;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config Error:{0}")]
    ConfigError(String),

    #[error("Service error")]
    ServiceError,
}
