//! crates/ulimi/tests/integration_test.rs
//!
//! End-to-end integration test.
//! Verifies the entire flow: Load reference tables -> Build service -> Analyse ->
//! Verify vocabulary, frequency, bigrams, phrase match and insights.

use std::collections::HashSet;
use std::fs;

use tempfile::TempDir;

use ulimi::config::{Language, UlimiConfig};
use ulimi::heuristics::{gen_synonyms, gen_usage};
use ulimi::tokenizer::{normalize, tokenize};
use ulimi::{NO_LOCAL_TRANSLATION, UlimiError, UlimiService};

fn service() -> UlimiService {
  UlimiService::init(&UlimiConfig::default()).expect("service initialization failed")
}

/// Sample inputs covering punctuation, repetition, digits and mixed case.
fn sample_inputs() -> Vec<&'static str> {
  vec![
    "",
    "   ",
    "Sawubona, 2024!",
    "Umuntu ngumuntu ngabantu.",
    "the cat the dog the cat",
    "Ngiyabonga kakhulu!!!",
    "abantu, abantu; abantu?",
    "Baie dankie",
    "a1b2c3",
  ]
}

#[test]
fn vocabulary_is_unique_and_order_preserving() {
  let service = service();

  for raw in sample_inputs() {
    let result = service.analyze(raw);

    let unique: HashSet<&String> = result.vocabulary.iter().collect();
    assert_eq!(unique.len(), result.vocabulary.len(), "raw={raw:?}");
    assert!(result.vocabulary.len() <= result.tokens.len());

    // first occurrences, in input order
    let mut seen = HashSet::new();
    let expected: Vec<&String> = result.tokens.iter().filter(|t| seen.insert(*t)).collect();
    assert_eq!(result.vocabulary.iter().collect::<Vec<_>>(), expected);
  }
}

#[test]
fn frequency_counts_sum_to_token_count() {
  let service = service();

  for raw in sample_inputs() {
    let result = service.analyze(raw);

    let total: usize = result.frequency.iter().map(|row| row.count).sum();
    assert_eq!(total, result.tokens.len(), "raw={raw:?}");
    assert_eq!(result.frequency.len(), result.vocabulary.len());
    assert!(result.frequency.iter().all(|row| row.count >= 1));
  }
}

#[test]
fn frequency_is_sorted_by_count_then_word() {
  let result = service().analyze_with_language(Language::Eng, "the cat the dog the cat");

  let rows: Vec<(&str, usize)> =
    result.frequency.iter().map(|row| (row.word.as_str(), row.count)).collect();
  assert_eq!(rows, vec![("the", 3), ("cat", 2), ("dog", 1)]);
}

#[test]
fn bigram_count_is_tokens_minus_one() {
  let service = service();

  for raw in sample_inputs() {
    let result = service.analyze(raw);
    assert_eq!(result.bigrams.len(), result.tokens.len().saturating_sub(1), "raw={raw:?}");

    for (pair, window) in result.bigrams.iter().zip(result.tokens.windows(2)) {
      assert_eq!(pair.left, window[0]);
      assert_eq!(pair.right, window[1]);
    }
  }
}

#[test]
fn normalize_is_idempotent_and_case_insensitive() {
  for raw in sample_inputs() {
    let once = normalize(raw);
    assert_eq!(normalize(&once), once, "raw={raw:?}");
  }

  assert_eq!(normalize("Umuntu Ngumuntu Ngabantu!"), normalize("umuntu ngumuntu ngabantu"));
}

#[test]
fn proverb_matches_only_exactly() {
  let service = service();

  let hit = service.analyze("  UMUNTU ngumuntu NGABANTU?! ");
  let entry = hit.matched_phrase.as_ref().expect("proverb must match");
  assert_eq!(entry.phrase, "umuntu ngumuntu ngabantu");
  assert!(!entry.morphology.is_empty());

  let miss = service.analyze("umuntu ngumuntu ngabantu bonke");
  assert!(miss.matched_phrase.is_none());
  assert_eq!(miss.translation_for(Language::Eng), NO_LOCAL_TRANSLATION);
}

#[test]
fn empty_and_whitespace_input_yield_empty_results() {
  let service = service();

  for raw in ["", "   ", "\t\n"] {
    let result = service.analyze(raw);
    assert!(result.tokens.is_empty());
    assert!(result.vocabulary.is_empty());
    assert!(result.bigrams.is_empty());
    assert!(result.frequency.is_empty());
    assert!(result.insights.is_empty());
    assert!(result.matched_phrase.is_none());
    assert_eq!(result.normalized, "");
  }
}

#[test]
fn digits_and_punctuation_are_separators() {
  assert_eq!(tokenize("Sawubona, 2024!").to_vec(), vec!["sawubona"]);
  assert_eq!(tokenize("a1b2c3").to_vec(), vec!["a", "b", "c"]);
}

#[test]
fn every_vocabulary_word_has_an_insight() {
  let service = service();

  for raw in sample_inputs() {
    let result = service.analyze(raw);
    assert_eq!(result.insights.len(), result.vocabulary.len());

    for (insight, word) in result.insights.iter().zip(&result.vocabulary) {
      assert_eq!(&insight.word, word);
      assert!(!insight.usage.is_empty(), "word={word:?}");
    }
  }
}

#[test]
fn heuristics_are_deterministic() {
  assert_eq!(gen_usage("umuntu"), gen_usage("umuntu"));
  assert_eq!(gen_synonyms("abantu", None), gen_synonyms("abantu", None));

  let service = service();
  assert_eq!(service.analyze("Abantu bayasebenza"), service.analyze("Abantu bayasebenza"));
}

#[test]
fn configured_phrase_file_replaces_embedded_phrases() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("phrases.json");
  fs::write(
    &path,
    r#"[{"phrase": "molo", "translation": "Hello.", "part_of_speech": "interjection", "source_language": "xho"}]"#,
  )
  .unwrap();

  let mut config = UlimiConfig::default();
  config.tables.phrases_path = Some(path);

  let service = UlimiService::init(&config).unwrap();
  let result = service.analyze_with_language(Language::Xho, "Molo!");
  assert_eq!(result.translation_for(Language::Eng), "Hello.");
  assert!(service.lookup_phrase("sawubona").is_none());
}

#[test]
fn malformed_table_fails_init() {
  let dir = TempDir::new().unwrap();
  let path = dir.path().join("synonyms.json");
  fs::write(&path, r#"[{"language": "zul", "word": "Usizo", "synonyms": []}]"#).unwrap();

  let mut config = UlimiConfig::default();
  config.tables.synonyms_path = Some(path);

  let err = UlimiService::init(&config).unwrap_err();
  assert!(matches!(err, UlimiError::ReferenceTable(_)));
}

#[test]
fn missing_table_path_fails_validation() {
  let dir = TempDir::new().unwrap();

  let mut config = UlimiConfig::default();
  config.tables.phrases_path = Some(dir.path().join("missing.json"));

  let err = UlimiService::init(&config).unwrap_err();
  assert!(matches!(err, UlimiError::Config(_)));
}
