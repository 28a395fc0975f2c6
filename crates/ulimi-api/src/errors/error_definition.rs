//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use ulimi::Language;
use ulimi::errors::UlimiError;

/// Error kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Invalid input
  InvalidInput,
  /// Text is too long
  TextTooLong,
  /// Language not accepted by this server
  UnsupportedLanguage,
  /// Reference table failed to load
  ReferenceTable,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::TextTooLong => "text_too_long",
      Self::UnsupportedLanguage => "unsupported_language",
      Self::ReferenceTable => "reference_table_error",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput | Self::TextTooLong | Self::UnsupportedLanguage => StatusCode::BAD_REQUEST,
      Self::ReferenceTable | Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// Invalid input
  #[error("invalid input: {0}")]
  InvalidInput(String),

  /// Text is too long
  #[error("text too long: {0} bytes (max: {1} bytes)")]
  TextTooLong(usize, usize),

  /// Language not accepted by this server
  #[error("unsupported language: {} ({})", .0, .0.display_name())]
  UnsupportedLanguage(Language),

  /// Reference table failed to load
  #[error("reference table error: {0}")]
  ReferenceTable(String),

  /// Internal error
  #[error("internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// Returns the error kind
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::UnsupportedLanguage(_) => ApiErrorKind::UnsupportedLanguage,
      Self::ReferenceTable(_) => ApiErrorKind::ReferenceTable,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Creates an invalid input error
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// Creates a text-too-long error
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// Creates an unsupported-language error
  #[must_use]
  pub fn unsupported_language(language: Language) -> Self {
    Self::UnsupportedLanguage(language)
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// JSON body of an error response
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        message: self.to_string(),
      },
    };

    (status, Json(body)).into_response()
  }
}

/// Conversion from UlimiError
///
/// Maps engine errors to API errors.
impl From<UlimiError> for ApiError {
  fn from(err: UlimiError) -> Self {
    match err {
      UlimiError::UnsupportedLanguage { language } => ApiError::unsupported_language(language),
      UlimiError::ReferenceTable(err) => ApiError::ReferenceTable(err.to_string()),
      UlimiError::Config(err) => ApiError::config(err.to_string()),
      // UlimiError is #[non_exhaustive]
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
