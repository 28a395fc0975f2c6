//! analysis module
//!
//! Pure passes over a token sequence: vocabulary, bigrams, frequency.
pub mod bigram;
pub mod frequency;
pub mod vocabulary;

/// Re-export
pub use bigram::bigrams;
pub use frequency::frequency;
pub use vocabulary::dedupe;
