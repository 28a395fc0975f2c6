//! tokenizer module
pub mod letter_tokenizer;
pub mod normalizer;

/// Re-export
pub use letter_tokenizer::{TokenSequence, Tokens, tokenize};
pub use normalizer::normalize;
