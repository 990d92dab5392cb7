use dotenvy::dotenv;
use proposal_server::configuration::Context;
use proposal_server::core::ServiceManager;
use proposal_server::server::ProposalService;
use proposal_server::AppError;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();
    let context =
        Context::new("config.json").map_err(|e| AppError::ConfigError(e.to_string()))?;

    let log_level = Level::from_str(&context.config.log_level).unwrap_or(Level::INFO);
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(log_level.to_string()))
        .init();
    tracing::info!("Starting Proposal Server");

    let mut service_manager = ServiceManager::new(context);
    service_manager.spawn::<ProposalService>();

    service_manager
        .wait()
        .await
        .map_err(|_| AppError::ServiceError)
}
