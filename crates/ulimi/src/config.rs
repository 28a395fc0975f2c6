// crates/ulimi/src/config.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Supported language tags.
///
/// Serialized as lowercase ISO 639-3 codes. All languages share one engine;
/// the tag selects the synonym table and the local-analysis capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  /// English
  Eng,
  /// isiZulu
  Zul,
  /// isiXhosa
  Xho,
  /// Afrikaans
  Afr,
  /// Setswana
  Tsn,
}

impl Language {
  /// Every language known to the engine, in display order.
  pub const ALL: [Language; 5] =
    [Language::Eng, Language::Zul, Language::Xho, Language::Afr, Language::Tsn];

  /// Returns the language code.
  ///
  /// # Examples
  /// - `Language::Zul` → `"zul"`
  /// - `Language::Eng` → `"eng"`
  pub fn code(&self) -> &'static str {
    match self {
      Language::Eng => "eng",
      Language::Zul => "zul",
      Language::Xho => "xho",
      Language::Afr => "afr",
      Language::Tsn => "tsn",
    }
  }

  /// Returns the human-readable name of the language.
  pub fn display_name(&self) -> &'static str {
    match self {
      Language::Eng => "English",
      Language::Zul => "isiZulu",
      Language::Xho => "isiXhosa",
      Language::Afr => "Afrikaans",
      Language::Tsn => "Setswana",
    }
  }
}

impl std::fmt::Display for Language {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.code())
  }
}

impl FromStr for Language {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let code = s.trim().to_lowercase();
    Language::ALL.into_iter().find(|lang| lang.code() == code).ok_or_else(|| {
      format!(
        "Unknown language: {}. Valid values: eng, zul, xho, afr, tsn",
        s
      )
    })
  }
}

/// Top-level configuration for ulimi.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UlimiConfig {
  /// [tables] section
  #[serde(default)]
  pub tables: TablesConfig,
  /// [analysis] section
  #[serde(default)]
  pub analysis: AnalysisConfig,
  /// [logging] section
  #[serde(default)]
  pub logging: LoggingConfig,
}

/// [tables] section configuration.
///
/// Each path is optional. When omitted, the table embedded in the crate is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TablesConfig {
  /// Known-phrase dictionary JSON file
  #[serde(default)]
  pub phrases_path: Option<PathBuf>,
  /// Synonym table JSON file
  #[serde(default)]
  pub synonyms_path: Option<PathBuf>,
}

/// [analysis] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
  /// Languages the service accepts (e.g., ["zul", "eng"])
  #[serde(default = "default_languages")]
  pub languages: Vec<Language>,
  /// Default language (must be included in `languages`)
  #[serde(default = "default_language")]
  pub default_language: Language,
  /// Languages for which local heuristic analysis is offered.
  ///
  /// A source/target pairing gets local analysis only when both sides are listed.
  #[serde(default = "default_local_languages")]
  pub local_languages: Vec<Language>,
}

impl Default for AnalysisConfig {
  fn default() -> Self {
    Self {
      languages: default_languages(),
      default_language: default_language(),
      local_languages: default_local_languages(),
    }
  }
}

/// Default language list (all languages)
fn default_languages() -> Vec<Language> {
  Language::ALL.to_vec()
}

/// Default language (isiZulu)
fn default_language() -> Language {
  Language::Zul
}

/// Default local-analysis languages (everything except isiXhosa)
fn default_local_languages() -> Vec<Language> {
  Language::ALL.into_iter().filter(|lang| *lang != Language::Xho).collect()
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  #[serde(default)]
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  /// error
  Error,
}

impl LogLevel {
  /// Returns the directive string understood by `tracing_subscriber::EnvFilter`.
  pub fn as_filter(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

impl FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "trace" => Ok(Self::Trace),
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warn" => Ok(Self::Warn),
      "error" => Ok(Self::Error),
      _ => Err(format!(
        "Unknown log level: {}. Valid values: trace, debug, info, warn, error",
        s
      )),
    }
  }
}

// ===== Accessor Methods =====

impl UlimiConfig {
  /// Returns the configured known-phrase table path.
  ///
  /// `None` means the embedded table is used.
  pub fn phrases_path(&self) -> Option<&Path> {
    self.tables.phrases_path.as_deref()
  }

  /// Returns the configured synonym table path.
  ///
  /// `None` means the embedded table is used.
  pub fn synonyms_path(&self) -> Option<&Path> {
    self.tables.synonyms_path.as_deref()
  }

  /// Returns the list of supported languages.
  pub fn supported_languages(&self) -> &[Language] {
    &self.analysis.languages
  }

  /// Returns the default language.
  pub fn default_language(&self) -> Language {
    self.analysis.default_language
  }

  /// Returns the languages that get local heuristic analysis.
  pub fn local_languages(&self) -> &[Language] {
    &self.analysis.local_languages
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `languages` is not empty
  /// - `default_language` is included in `languages`
  /// - every `local_languages` entry is included in `languages`
  /// - `tables.phrases_path` / `tables.synonyms_path` point to existing files
  ///
  /// An empty `local_languages` is valid: it turns local analysis off for every pairing.
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.analysis.languages.is_empty() {
      return Err(ConfigError::EmptyLanguages);
    }

    if !self.analysis.languages.contains(&self.analysis.default_language) {
      return Err(ConfigError::DefaultLanguageNotInLanguages {
        default_language: self.analysis.default_language,
      });
    }

    if let Some(&language) =
      self.analysis.local_languages.iter().find(|lang| !self.analysis.languages.contains(lang))
    {
      return Err(ConfigError::LocalLanguageNotInLanguages { language });
    }

    for path in [&self.tables.phrases_path, &self.tables.synonyms_path].into_iter().flatten() {
      if !path.is_file() {
        return Err(ConfigError::InvalidTablePath { path: path.clone() });
      }
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
