//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::UlimiApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Sentence Analysis Service
  ///
  /// - Production: `Arc::new(UlimiApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubUlimiApiService)`
  pub service: Arc<dyn UlimiApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn UlimiApiService>) -> Self {
    Self { config, service }
  }
}
