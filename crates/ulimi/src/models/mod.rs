//! models module
pub mod model_definition;

/// Re-export
pub use model_definition::{
  AnalysisResult, BigramPair, FrequencyRow, KnownPhraseEntry, MorphemeGloss, NO_LOCAL_TRANSLATION,
  RelatedTerm, UsageExample, WordInsight,
};
