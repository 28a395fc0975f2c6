//! Curated synonym tables, one per language
//!
//! The tables are small and intentionally incomplete. A missing headword is a
//! normal state, not an error.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use serde::Deserialize;

use crate::config::Language;
use crate::errors::ReferenceTableError;
use crate::tokenizer::tokenize;

/// Table name used in error messages
pub(crate) const SYNONYM_TABLE: &str = "synonyms";

/// One row of the synonym JSON file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynonymRecord {
  /// Table language
  pub language: Language,
  /// Headword (a single lowercase token)
  pub word: String,
  /// Synonyms and near-synonyms, in curated order
  pub synonyms: Vec<String>,
}

/// Synonym table of a single language
#[derive(Debug, Clone)]
pub struct SynonymTable {
  language: Language,
  entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
  /// Empty table for `language`
  pub fn new(language: Language) -> Self {
    Self {
      language,
      entries: HashMap::new(),
    }
  }

  /// Table language
  pub fn language(&self) -> Language {
    self.language
  }

  /// Exact headword lookup
  pub fn lookup(&self, word: &str) -> Option<&[String]> {
    self.entries.get(word).map(Vec::as_slice)
  }

  /// Number of headwords
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// `true` if the table has no headwords
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Headwords sorted alphabetically
  pub fn words(&self) -> Vec<&str> {
    let mut words: Vec<&str> = self.entries.keys().map(String::as_str).collect();
    words.sort_unstable();
    words
  }
}

/// All synonym tables, keyed by language
#[derive(Debug, Clone, Default)]
pub struct SynonymTables {
  tables: HashMap<Language, SynonymTable>,
}

impl SynonymTables {
  /// Builds the tables from records, validating each one.
  ///
  /// # Errors
  /// - `InvalidSynonymWord`: the headword is not exactly one lowercase token
  /// - `EmptySynonym`: a synonym string is blank
  /// - `DuplicateSynonymWord`: the same headword appears twice for one language
  pub fn from_records(records: Vec<SynonymRecord>) -> Result<Self, ReferenceTableError> {
    let mut tables: HashMap<Language, SynonymTable> = HashMap::new();

    for record in records {
      if !is_single_token(&record.word) {
        return Err(ReferenceTableError::InvalidSynonymWord {
          language: record.language,
          word: record.word,
        });
      }

      if record.synonyms.iter().any(|s| s.trim().is_empty()) {
        return Err(ReferenceTableError::EmptySynonym {
          language: record.language,
          word: record.word,
        });
      }

      let table =
        tables.entry(record.language).or_insert_with(|| SynonymTable::new(record.language));

      match table.entries.entry(record.word) {
        Entry::Occupied(occupied) => {
          return Err(ReferenceTableError::DuplicateSynonymWord {
            language: record.language,
            word: occupied.key().clone(),
          });
        }
        Entry::Vacant(vacant) => {
          vacant.insert(record.synonyms);
        }
      }
    }

    Ok(Self { tables })
  }

  /// Parses a JSON array of records and validates it.
  ///
  /// # Errors
  /// `Parse` for malformed JSON, otherwise the same errors as [`from_records`](Self::from_records).
  pub fn from_json_str(json: &str) -> Result<Self, ReferenceTableError> {
    let records: Vec<SynonymRecord> =
      serde_json::from_str(json).map_err(|e| ReferenceTableError::Parse {
        table: SYNONYM_TABLE,
        source: Arc::new(e),
      })?;

    Self::from_records(records)
  }

  /// Table of one language (`None` if no headword was curated for it)
  pub fn table(&self, language: Language) -> Option<&SynonymTable> {
    self.tables.get(&language)
  }

  /// Exact headword lookup in the table of `language`
  pub fn lookup(&self, language: Language, word: &str) -> Option<&[String]> {
    self.tables.get(&language).and_then(|table| table.lookup(word))
  }

  /// Total number of headwords across all languages
  pub fn len(&self) -> usize {
    self.tables.values().map(SynonymTable::len).sum()
  }

  /// `true` if no language has any headword
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// `true` if `word` tokenizes to exactly itself
fn is_single_token(word: &str) -> bool {
  let tokens = tokenize(word);
  let mut iter = tokens.iter();
  matches!((iter.next(), iter.next()), (Some(token), None) if token == word)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(language: Language, word: &str, synonyms: &[&str]) -> SynonymRecord {
    SynonymRecord {
      language,
      word: word.to_string(),
      synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
    }
  }

  #[test]
  fn lookup_is_per_language() {
    let tables = SynonymTables::from_records(vec![
      record(Language::Eng, "help", &["assist", "aid"]),
      record(Language::Afr, "help", &["hulp", "bystand"]),
    ])
    .unwrap();

    assert_eq!(
      tables.lookup(Language::Eng, "help").unwrap(),
      &["assist".to_string(), "aid".to_string()]
    );
    assert_eq!(tables.lookup(Language::Afr, "help").unwrap()[0], "hulp");
    assert!(tables.lookup(Language::Zul, "help").is_none());
    assert!(tables.table(Language::Xho).is_none());
    assert_eq!(tables.len(), 2);
  }

  #[test]
  fn lookup_preserves_curated_order() {
    let tables =
      SynonymTables::from_records(vec![record(Language::Eng, "happy", &["glad", "joyful", "content"])])
        .unwrap();

    assert_eq!(tables.lookup(Language::Eng, "happy").unwrap(), &[
      "glad".to_string(),
      "joyful".to_string(),
      "content".to_string()
    ]);
  }

  #[test]
  fn table_words_are_sorted() {
    let tables = SynonymTables::from_records(vec![
      record(Language::Zul, "usizo", &["ukusiza"]),
      record(Language::Zul, "ngijabule", &["ngiyajabula"]),
    ])
    .unwrap();

    let table = tables.table(Language::Zul).unwrap();
    assert_eq!(table.words(), vec!["ngijabule", "usizo"]);
    assert_eq!(table.language(), Language::Zul);
  }

  #[test]
  fn rejects_duplicate_headword_in_one_language() {
    let err = SynonymTables::from_records(vec![
      record(Language::Zul, "usizo", &["ukusiza"]),
      record(Language::Zul, "usizo", &["ukweseka"]),
    ])
    .unwrap_err();

    match err {
      ReferenceTableError::DuplicateSynonymWord { language, word } => {
        assert_eq!(language, Language::Zul);
        assert_eq!(word, "usizo");
      }
      _ => panic!("expected DuplicateSynonymWord error"),
    }
  }

  #[test]
  fn rejects_headwords_that_are_not_single_lowercase_tokens() {
    for word in ["", "Happy", "hou van", "help!", "42"] {
      let err =
        SynonymTables::from_records(vec![record(Language::Eng, word, &["x"])]).unwrap_err();
      assert!(
        matches!(err, ReferenceTableError::InvalidSynonymWord { .. }),
        "word={word:?}"
      );
    }
  }

  #[test]
  fn rejects_blank_synonym() {
    let err =
      SynonymTables::from_records(vec![record(Language::Eng, "help", &["assist", " "])]).unwrap_err();
    assert!(matches!(err, ReferenceTableError::EmptySynonym { .. }));
  }

  #[test]
  fn accepts_empty_synonym_list() {
    let tables = SynonymTables::from_records(vec![record(Language::Tsn, "thusa", &[])]).unwrap();
    assert_eq!(tables.lookup(Language::Tsn, "thusa").unwrap().len(), 0);
  }

  #[test]
  fn from_json_str_rejects_unknown_language() {
    let err =
      SynonymTables::from_json_str(r#"[{"language": "fra", "word": "aide", "synonyms": []}]"#)
        .unwrap_err();
    assert!(matches!(err, ReferenceTableError::Parse { table: SYNONYM_TABLE, .. }));
  }
}
