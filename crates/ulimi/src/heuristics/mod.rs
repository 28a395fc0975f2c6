//! heuristics module
//!
//! Rule-based usage and synonym generation for tokens that have no curated data.
pub mod classification;
pub mod synonyms;
pub mod usage;

/// Re-export
pub use classification::{WordClass, classify, infinitive_stem};
pub use synonyms::gen_synonyms;
pub use usage::gen_usage;

use crate::config::Language;
use crate::dictionary::{SynonymTable, SynonymTables};
use crate::models::WordInsight;

/// Generators bound to one analysis language
#[derive(Debug, Clone, Copy)]
pub struct HeuristicGenerator<'a> {
  language: Language,
  synonyms: Option<&'a SynonymTable>,
}

impl<'a> HeuristicGenerator<'a> {
  /// Binds the synonym table of `language` from `tables`
  pub fn new(language: Language, tables: &'a SynonymTables) -> Self {
    Self {
      language,
      synonyms: tables.table(language),
    }
  }

  /// Analysis language
  pub fn language(&self) -> Language {
    self.language
  }

  /// See [`gen_usage`]
  pub fn usage(&self, word: &str) -> Vec<String> {
    gen_usage(word)
  }

  /// See [`gen_synonyms`]
  pub fn synonyms(&self, word: &str) -> Vec<String> {
    gen_synonyms(word, self.synonyms)
  }

  /// Usage and synonyms of one token
  pub fn insight(&self, word: &str) -> WordInsight {
    WordInsight {
      word: word.to_string(),
      usage: self.usage(word),
      synonyms: self.synonyms(word),
    }
  }
}
