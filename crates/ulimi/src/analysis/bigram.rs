//! Bigram extractor

use crate::models::BigramPair;

/// Extracts every pair of adjacent tokens.
///
/// Emits `(tokens[i], tokens[i + 1])` for `i` in `0..n - 1`, without deduplication.
/// Empty or single-token input yields an empty list.
pub fn bigrams<S: AsRef<str>>(tokens: &[S]) -> Vec<BigramPair> {
  tokens
    .windows(2)
    .map(|pair| BigramPair::new(pair[0].as_ref(), pair[1].as_ref()))
    .collect()
}
