//! Vocabulary builder

use std::collections::HashSet;

/// Deduplicates tokens, keeping the first occurrence of each.
///
/// # Processing
/// - Single left-to-right pass
/// - `HashSet` membership test suppresses later repeats
/// - Output order is the order of first appearance (not sorted)
pub fn dedupe<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
  let mut seen = HashSet::with_capacity(tokens.len());
  let mut vocabulary = Vec::new();

  for token in tokens {
    let token = token.as_ref();

    // Skip repeats (first occurrence wins)
    if !seen.insert(token) {
      continue;
    }

    vocabulary.push(token.to_string());
  }

  vocabulary
}
