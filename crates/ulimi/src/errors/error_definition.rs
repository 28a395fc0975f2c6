//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::config::Language;

/// Errors related to the configuration (UlimiConfig)
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// analysis.languages is empty
  #[error("analysis.languages must contain at least one language")]
  EmptyLanguages,

  /// analysis.default_language is not included in analysis.languages
  #[error("default_language ({default_language}) must be included in languages")]
  DefaultLanguageNotInLanguages {
    /// The specified default_language
    default_language: Language,
  },

  /// An analysis.local_languages entry is not included in analysis.languages
  #[error("local_languages entry ({language}) must be included in languages")]
  LocalLanguageNotInLanguages {
    /// The offending language
    language: Language,
  },

  /// A tables.* path is not an existing file
  #[error("reference table path is not a file: path={path:?}")]
  InvalidTablePath {
    /// The invalid path
    path: PathBuf,
  },
}

/// Reference table (known phrases, synonyms) errors.
///
/// Every variant is a startup-time defect in curated data.
/// None of them can occur while analysing a request.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ReferenceTableError {
  /// Reading the table file failed
  #[error("failed to read {table} table: path={path:?}, error={source}")]
  Read {
    /// Table name
    table: &'static str,
    /// Path that was read
    path: PathBuf,
    /// The underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// The table is not valid JSON for its schema
  #[error("failed to parse {table} table: {source}")]
  Parse {
    /// Table name
    table: &'static str,
    /// The underlying JSON error
    #[source]
    source: Arc<serde_json::Error>,
  },

  /// A phrase key is empty after normalization
  #[error("known phrase #{index} has an empty key")]
  EmptyPhraseKey {
    /// Position of the entry in the table
    index: usize,
  },

  /// A phrase key is not in normalized form
  #[error("known phrase key is not normalized: key={key:?}, normalized={normalized:?}")]
  UnnormalizedPhraseKey {
    /// Key as written in the table
    key: String,
    /// The normalized form the key should have
    normalized: String,
  },

  /// The same phrase key appears twice
  #[error("duplicate known phrase: {key:?}")]
  DuplicatePhrase {
    /// The duplicated key
    key: String,
  },

  /// A phrase entry has an empty translation
  #[error("known phrase has an empty translation: {key:?}")]
  EmptyTranslation {
    /// Key of the entry
    key: String,
  },

  /// A morphology piece or its gloss is empty
  #[error("known phrase {key:?} has an empty morphology piece at position {position}")]
  EmptyMorphologyPiece {
    /// Key of the entry
    key: String,
    /// Position of the piece in the breakdown
    position: usize,
  },

  /// A synonym entry has an empty or non-normalized headword
  #[error("synonym headword is empty or not a lowercase token: language={language}, word={word:?}")]
  InvalidSynonymWord {
    /// Table language
    language: Language,
    /// The headword as written
    word: String,
  },

  /// The same headword appears twice for one language
  #[error("duplicate synonym headword: language={language}, word={word:?}")]
  DuplicateSynonymWord {
    /// Table language
    language: Language,
    /// The duplicated headword
    word: String,
  },

  /// A synonym list contains an empty string
  #[error("empty synonym for headword: language={language}, word={word:?}")]
  EmptySynonym {
    /// Table language
    language: Language,
    /// The headword
    word: String,
  },
}

/// Unified error
///
/// APIs exposed outside of this crate return this error.
/// Used as `UlimiResult<T>` = `Result<T, UlimiError>`.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum UlimiError {
  /// Reference table errors
  #[error(transparent)]
  ReferenceTable(#[from] ReferenceTableError),

  /// Unsupported language
  #[error("unsupported language: {language}")]
  UnsupportedLanguage {
    /// The specified language
    language: Language,
  },

  /// Configuration errors
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// Standard Result type alias for the ulimi crate
pub type UlimiResult<T> = Result<T, UlimiError>;
