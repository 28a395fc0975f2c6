//! Service module

mod ulimi_api_service;

pub use ulimi_api_service::{UlimiApiService, UlimiApiServiceFull};
