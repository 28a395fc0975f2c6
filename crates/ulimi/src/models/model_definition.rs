//! Data Model Definition
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Language;

/// Fallback text shown when a sentence has no entry in the known-phrase dictionary.
///
/// Presentation layers must show this instead of guessing a translation.
pub const NO_LOCAL_TRANSLATION: &str = "No translation on file for this exact sentence yet.";

/// Ordered pair of directly adjacent tokens.
///
/// Pairs are not deduplicated: a repeated adjacency yields a repeated pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BigramPair {
  /// Left token
  pub left: String,
  /// Right token
  pub right: String,
}

impl BigramPair {
  /// Constructor for BigramPair
  pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
    Self {
      left: left.into(),
      right: right.into(),
    }
  }
}

/// Renders as `"left → right"`, the form used by the common-pairs listing.
impl fmt::Display for BigramPair {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} → {}", self.left, self.right)
  }
}

/// Occurrence count of one vocabulary word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRow {
  /// Token
  pub word: String,
  /// Number of occurrences (always >= 1)
  pub count: usize,
}

impl FrequencyRow {
  /// Constructor for FrequencyRow
  pub fn new(word: impl Into<String>, count: usize) -> Self {
    Self {
      word: word.into(),
      count,
    }
  }
}

/// One step of a morphology breakdown, e.g. `umu-` → "noun class 1 prefix"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphemeGloss {
  /// Morpheme as written
  pub piece: String,
  /// Its gloss
  pub gloss: String,
}

/// Usage example pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageExample {
  /// Sentence in the source language
  pub source: String,
  /// Its translation
  pub target: String,
}

/// Term related to a known phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedTerm {
  /// Related term
  pub term: String,
  /// Short note on how it relates
  pub note: String,
}

/// Curated entry of the known-phrase dictionary.
///
/// Keyed by the normalized sentence (`phrase`). Loaded once and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnownPhraseEntry {
  /// Normalized sentence this entry is keyed by
  pub phrase: String,

  /// Translation into `target_language`
  pub translation: String,

  /// Word-for-word gloss
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub literal: Option<String>,

  /// Part-of-speech label (e.g. "proverb", "greeting")
  pub part_of_speech: String,

  /// Language the phrase is written in
  pub source_language: Language,

  /// Language `translation` is written in
  #[serde(default = "default_target_language")]
  pub target_language: Language,

  /// Cultural note
  #[serde(default)]
  pub cultural_note: String,

  /// Morphology breakdown in surface order
  #[serde(default)]
  pub morphology: Vec<MorphemeGloss>,

  /// Usage examples in curated order
  #[serde(default)]
  pub examples: Vec<UsageExample>,

  /// Related terms
  #[serde(default)]
  pub related: Vec<RelatedTerm>,

  /// Tags
  #[serde(default)]
  pub tags: Vec<String>,
}

/// Curated translations are English unless the entry says otherwise
fn default_target_language() -> Language {
  Language::Eng
}

/// Generated usage sentences and synonym candidates of one vocabulary word.
///
/// Both lists are always present. An empty `synonyms` means "no synonyms known".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordInsight {
  /// Vocabulary word
  pub word: String,
  /// Example usage sentences (never empty)
  pub usage: Vec<String>,
  /// Synonym candidates (possibly empty)
  pub synonyms: Vec<String>,
}

/// Result of analysing one input text
///
/// Every collection is empty for input without letters; `matched_phrase` is then `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
  /// Language the text was analysed as
  pub language: Language,

  /// Normalized text used as the dictionary key
  pub normalized: String,

  /// Tokens in input order
  pub tokens: Vec<String>,

  /// Distinct tokens in first-occurrence order
  pub vocabulary: Vec<String>,

  /// Adjacent token pairs, `tokens.len() - 1` of them
  pub bigrams: Vec<BigramPair>,

  /// Counts sorted by count desc, then word asc
  pub frequency: Vec<FrequencyRow>,

  /// Exact known-phrase match
  pub matched_phrase: Option<KnownPhraseEntry>,

  /// One insight per vocabulary word, in vocabulary order
  pub insights: Vec<WordInsight>,
}

impl AnalysisResult {
  /// Returns the matched translation into `target`, or [`NO_LOCAL_TRANSLATION`].
  ///
  /// The entry must be written in the analysed language and translated into `target`.
  pub fn translation_for(&self, target: Language) -> &str {
    self
      .matched_phrase
      .as_ref()
      .filter(|entry| entry.source_language == self.language && entry.target_language == target)
      .map_or(NO_LOCAL_TRANSLATION, |entry| entry.translation.as_str())
  }

  /// Looks up the insight of a vocabulary word.
  pub fn insight(&self, word: &str) -> Option<&WordInsight> {
    self.insights.iter().find(|insight| insight.word == word)
  }

  /// `true` if the input contained no tokens.
  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }
}
