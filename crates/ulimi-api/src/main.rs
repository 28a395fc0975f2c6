//! ulimi-api server entry point

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ulimi_api::ApiError;
use ulimi_api::api::AppState;
use ulimi_api::api::run_server;
use ulimi_api::config::Config;
use ulimi_api::service::UlimiApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Load configuration
  let config = Config::from_env()?;

  // Initialize logging (RUST_LOG overrides the configured level)
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter()));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  info!(
    bind_addr = %config.bind_addr,
    phrases_path = ?config.phrases_path,
    synonyms_path = ?config.synonyms_path,
    "Loaded configuration"
  );

  // Initialize the service; a broken reference table stops the server before binding
  let service = match UlimiApiServiceFull::new(&config) {
    Ok(service) => Arc::new(service),
    Err(err) => {
      error!(error = %err, "Failed to initialize the analysis service");
      return Err(err);
    }
  };
  info!("Initialized the analysis service");

  // Create application state
  let state = AppState::new(config, service);

  // Start the server
  run_server(state).await
}
