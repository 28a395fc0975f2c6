//! ulimi-api crate
//!
//! Web server exposing the ulimi sentence analysis engine as an HTTP API.
//!
//! ## Endpoints
//! - `POST /analyze` - Sentence analysis for a language pairing
//! - `POST /analyze/full` - Complete engine result
//! - `GET /synonyms?language=zul&word=usizo` - Synonym lookup
//! - `GET /languages` - Languages and local-analysis capability
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5530/analyze \
//!   -H "Content-Type: application/json" \
//!   -d '{"sentence": "Umuntu ngumuntu ngabantu", "sourceLanguage": "zul", "targetLanguage": "eng"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalyzeRequest, AnalyzeResponse, SynonymQuery, SynonymsResponse};
pub use service::UlimiApiServiceFull;
