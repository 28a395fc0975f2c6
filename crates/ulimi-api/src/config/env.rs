//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use ulimi::config::{AnalysisConfig, LogLevel, LoggingConfig, TablesConfig};
use ulimi::{Language, UlimiConfig};

use super::constants::{
  DEFAULT_BIND_ADDR, ENV_BIND_ADDR, ENV_DEFAULT_LANGUAGE, ENV_LOCAL_LANGUAGES, ENV_LOG_LEVEL,
  ENV_PHRASES_PATH, ENV_SYNONYMS_PATH,
};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5530")
  pub bind_addr: String,
  /// Known-phrase table file (`None` = embedded table)
  pub phrases_path: Option<PathBuf>,
  /// Synonym table file (`None` = embedded table)
  pub synonyms_path: Option<PathBuf>,
  /// Default analysis language (`None` = engine default)
  pub default_language: Option<Language>,
  /// Languages with local analysis (`None` = engine default)
  pub local_languages: Option<Vec<Language>>,
  /// Log level, overridden by `RUST_LOG` when set
  pub log_level: LogLevel,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: DEFAULT_BIND_ADDR.to_string(),
      phrases_path: None,
      synonyms_path: None,
      default_language: None,
      local_languages: None,
      log_level: LogLevel::default(),
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through `lookup`.
  ///
  /// Blank values count as unset.
  ///
  /// # Errors
  /// Returns an error if a language code or the log level is invalid
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::errors::Result<Self> {
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let bind_addr = get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let phrases_path = get(ENV_PHRASES_PATH).map(PathBuf::from);
    let synonyms_path = get(ENV_SYNONYMS_PATH).map(PathBuf::from);

    let default_language = get(ENV_DEFAULT_LANGUAGE)
      .map(|code| Language::from_str(&code))
      .transpose()
      .map_err(ApiError::config)?;

    let local_languages =
      get(ENV_LOCAL_LANGUAGES).map(|codes| parse_language_list(&codes)).transpose()?;

    let log_level = get(ENV_LOG_LEVEL)
      .map(|level| LogLevel::from_str(&level))
      .transpose()
      .map_err(ApiError::config)?
      .unwrap_or_default();

    Ok(Self {
      bind_addr,
      phrases_path,
      synonyms_path,
      default_language,
      local_languages,
      log_level,
    })
  }

  /// Builds the engine configuration
  #[must_use]
  pub fn engine_config(&self) -> UlimiConfig {
    let defaults = AnalysisConfig::default();

    UlimiConfig {
      tables: TablesConfig {
        phrases_path: self.phrases_path.clone(),
        synonyms_path: self.synonyms_path.clone(),
      },
      analysis: AnalysisConfig {
        languages: defaults.languages,
        default_language: self.default_language.unwrap_or(defaults.default_language),
        local_languages: self.local_languages.clone().unwrap_or(defaults.local_languages),
      },
      logging: LoggingConfig {
        level: self.log_level,
      },
    }
  }
}

/// Parses comma-separated language codes (`"zul, eng"`). Empty items are skipped.
fn parse_language_list(codes: &str) -> crate::errors::Result<Vec<Language>> {
  codes
    .split(',')
    .map(str::trim)
    .filter(|code| !code.is_empty())
    .map(|code| Language::from_str(code).map_err(ApiError::config))
    .collect()
}
