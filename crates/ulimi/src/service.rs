// crates/ulimi/src/service.rs

//! UlimiService: the facade of the ulimi crate.
//!
//! - Reference tables (ReferenceTables): known phrases and synonyms
//! - Text pipeline: normalize → tokenize → vocabulary / bigrams / frequency
//! - Heuristics (HeuristicGenerator): usage and synonyms per vocabulary word
//!
//! Callers such as the HTTP API only need to know this struct.

use std::sync::Arc;

use tracing::debug;

use crate::analysis::{bigrams, dedupe, frequency};
use crate::config::{Language, UlimiConfig};
use crate::dictionary::ReferenceTables;
use crate::errors::{UlimiError, UlimiResult};
use crate::heuristics::HeuristicGenerator;
use crate::models::{AnalysisResult, KnownPhraseEntry, WordInsight};
use crate::tokenizer::{normalize, tokenize};

/// Facade of the ulimi crate.
///
/// Holds only immutable shared state, so one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct UlimiService {
  /// Default analysis language
  default_language: Language,

  /// Languages accepted by this service
  languages: Vec<Language>,

  /// Languages with local analysis
  local_languages: Vec<Language>,

  /// Known phrases and synonym tables
  tables: Arc<ReferenceTables>,
}

impl UlimiService {
  /// Initializes from configuration (validation + table loading).
  ///
  /// # Errors
  /// - The configuration is invalid (empty `languages`, default language not listed, ...)
  /// - A configured table file cannot be read
  /// - A reference table is malformed
  pub fn init(config: &UlimiConfig) -> UlimiResult<Self> {
    // ConfigError / ReferenceTableError convert into UlimiError via #[from]
    config.validate()?;

    let tables = ReferenceTables::load(config)?;

    Ok(Self {
      default_language: config.default_language(),
      languages: config.supported_languages().to_vec(),
      local_languages: config.local_languages().to_vec(),
      tables,
    })
  }

  /// Builds a service over already loaded tables.
  ///
  /// Every language is accepted; `local_languages` sets the capability flag.
  pub fn from_tables(
    tables: Arc<ReferenceTables>,
    default_language: Language,
    local_languages: Vec<Language>,
  ) -> Self {
    Self {
      default_language,
      languages: Language::ALL.to_vec(),
      local_languages,
      tables,
    }
  }

  /// Analyses `raw` as the default language.
  pub fn analyze(&self, raw: &str) -> AnalysisResult {
    self.analyze_with_language(self.default_language, raw)
  }

  /// Analyses `raw` as `language`.
  ///
  /// Never fails: input without letters yields empty collections and no match.
  /// Only a known phrase written in `language` is matched.
  pub fn analyze_with_language(&self, language: Language, raw: &str) -> AnalysisResult {
    let normalized = normalize(raw);
    let tokens = tokenize(raw).to_vec();
    let vocabulary = dedupe(&tokens);
    let bigrams = bigrams(&tokens);
    let frequency = frequency(&tokens);
    let matched_phrase = self
      .tables
      .phrases()
      .lookup(&normalized)
      .filter(|entry| entry.source_language == language)
      .cloned();

    let generator = HeuristicGenerator::new(language, self.tables.synonyms());
    let insights: Vec<WordInsight> = vocabulary.iter().map(|word| generator.insight(word)).collect();

    debug!(
      language = %language,
      tokens = tokens.len(),
      vocabulary = vocabulary.len(),
      bigrams = bigrams.len(),
      matched = matched_phrase.is_some(),
      "Analysed text"
    );

    AnalysisResult {
      language,
      normalized,
      tokens,
      vocabulary,
      bigrams,
      frequency,
      matched_phrase,
      insights,
    }
  }

  /// Returns `true` if both sides of the pairing have local analysis.
  pub fn supports_local_analysis(&self, source: Language, target: Language) -> bool {
    self.local_languages.contains(&source) && self.local_languages.contains(&target)
  }

  /// Standalone synonym query.
  ///
  /// `word` is trimmed and lower-cased before the lookup.
  pub fn synonyms(&self, language: Language, word: &str) -> Vec<String> {
    let key = word.trim().to_lowercase();
    HeuristicGenerator::new(language, self.tables.synonyms()).synonyms(&key)
  }

  /// Looks up the known phrase for `raw` after normalization, in any language.
  pub fn lookup_phrase(&self, raw: &str) -> Option<&KnownPhraseEntry> {
    self.tables.phrases().lookup(&normalize(raw))
  }

  /// Checks that `language` is accepted by this service.
  ///
  /// # Errors
  /// `UnsupportedLanguage` if the language is not configured.
  pub fn ensure_supported(&self, language: Language) -> UlimiResult<()> {
    if self.is_language_supported(language) {
      Ok(())
    } else {
      Err(UlimiError::UnsupportedLanguage { language })
    }
  }

  // ===== Accessors =====

  /// Returns the default language.
  pub fn default_language(&self) -> Language {
    self.default_language
  }

  /// Returns the accepted languages.
  pub fn supported_languages(&self) -> &[Language] {
    &self.languages
  }

  /// Checks whether `language` is accepted.
  pub fn is_language_supported(&self, language: Language) -> bool {
    self.languages.contains(&language)
  }

  /// Returns the languages with local analysis.
  pub fn local_analysis_languages(&self) -> &[Language] {
    &self.local_languages
  }

  /// Returns the shared reference tables.
  pub fn tables(&self) -> &Arc<ReferenceTables> {
    &self.tables
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
