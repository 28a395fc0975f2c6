//! Frequency counter

use std::collections::HashMap;

use crate::models::FrequencyRow;

/// Counts token occurrences.
///
/// Sort order: count descending, ties broken by ascending lexicographic order of the word.
/// Returns exactly one row per distinct token; the counts sum to `tokens.len()`.
pub fn frequency<S: AsRef<str>>(tokens: &[S]) -> Vec<FrequencyRow> {
  let mut counts: HashMap<&str, usize> = HashMap::new();
  for token in tokens {
    *counts.entry(token.as_ref()).or_insert(0) += 1;
  }

  let mut rows: Vec<FrequencyRow> =
    counts.into_iter().map(|(word, count)| FrequencyRow::new(word, count)).collect();

  rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

  rows
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn frequency_ties_are_alphabetical() {
    assert_eq!(frequency(&["a", "a", "b", "b"]), vec![
      FrequencyRow::new("a", 2),
      FrequencyRow::new("b", 2)
    ]);
    assert_eq!(frequency(&["b", "b", "a", "a"]), vec![
      FrequencyRow::new("a", 2),
      FrequencyRow::new("b", 2)
    ]);
  }

  #[test]
  fn frequency_sorts_by_count_first() {
    let rows = frequency(&["zulu", "alpha", "zulu", "mike", "zulu", "mike"]);

    assert_eq!(rows, vec![
      FrequencyRow::new("zulu", 3),
      FrequencyRow::new("mike", 2),
      FrequencyRow::new("alpha", 1),
    ]);
  }

  #[test]
  fn frequency_counts_sum_to_token_count() {
    let tokens = ["na", "uku", "na", "nga", "na", "uku"];
    let rows = frequency(&tokens);

    let total: usize = rows.iter().map(|row| row.count).sum();
    assert_eq!(total, tokens.len());
    assert_eq!(rows.len(), 3);
  }

  #[test]
  fn frequency_of_empty_input() {
    let empty: [&str; 0] = [];
    assert!(frequency(&empty).is_empty());
  }
}
