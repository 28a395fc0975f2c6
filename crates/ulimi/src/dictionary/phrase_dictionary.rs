//! Known-phrase dictionary
//!
//! Sentence-level exact-match lookup. Keys are normalized sentences; there is no
//! substring, word-level or fuzzy matching. A miss is the expected common case.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use crate::errors::ReferenceTableError;
use crate::models::KnownPhraseEntry;
use crate::tokenizer::normalize;

/// Table name used in error messages
pub(crate) const PHRASE_TABLE: &str = "known_phrases";

/// Immutable map from normalized sentence to curated entry
#[derive(Debug, Clone, Default)]
pub struct PhraseDictionary {
  entries: HashMap<String, KnownPhraseEntry>,
}

impl PhraseDictionary {
  /// Builds a dictionary from curated entries, validating each one.
  ///
  /// # Errors
  /// - `EmptyPhraseKey`: the key is empty
  /// - `UnnormalizedPhraseKey`: `normalize(key) != key`
  /// - `EmptyTranslation`: the translation is blank
  /// - `EmptyMorphologyPiece`: a morphology piece or gloss is blank
  /// - `DuplicatePhrase`: the same key appears twice
  pub fn from_entries(entries: Vec<KnownPhraseEntry>) -> Result<Self, ReferenceTableError> {
    let mut map = HashMap::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
      validate_entry(index, &entry)?;

      match map.entry(entry.phrase.clone()) {
        Entry::Occupied(occupied) => {
          return Err(ReferenceTableError::DuplicatePhrase {
            key: occupied.key().clone(),
          });
        }
        Entry::Vacant(vacant) => {
          vacant.insert(entry);
        }
      }
    }

    Ok(Self { entries: map })
  }

  /// Parses a JSON array of entries and validates it.
  ///
  /// # Errors
  /// `Parse` for malformed JSON, otherwise the same errors as [`from_entries`](Self::from_entries).
  pub fn from_json_str(json: &str) -> Result<Self, ReferenceTableError> {
    let entries: Vec<KnownPhraseEntry> =
      serde_json::from_str(json).map_err(|e| ReferenceTableError::Parse {
        table: PHRASE_TABLE,
        source: Arc::new(e),
      })?;

    Self::from_entries(entries)
  }

  /// Exact lookup of an already-normalized sentence.
  pub fn lookup(&self, normalized: &str) -> Option<&KnownPhraseEntry> {
    self.entries.get(normalized)
  }

  /// Number of entries
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// `true` if the dictionary has no entries
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// All entries sorted by key
  pub fn entries(&self) -> Vec<&KnownPhraseEntry> {
    let mut entries: Vec<&KnownPhraseEntry> = self.entries.values().collect();
    entries.sort_by(|a, b| a.phrase.cmp(&b.phrase));
    entries
  }
}

/// Structural checks of one entry
fn validate_entry(index: usize, entry: &KnownPhraseEntry) -> Result<(), ReferenceTableError> {
  if entry.phrase.is_empty() {
    return Err(ReferenceTableError::EmptyPhraseKey { index });
  }

  let normalized = normalize(&entry.phrase);
  if normalized.is_empty() {
    return Err(ReferenceTableError::EmptyPhraseKey { index });
  }
  if normalized != entry.phrase {
    return Err(ReferenceTableError::UnnormalizedPhraseKey {
      key: entry.phrase.clone(),
      normalized,
    });
  }

  if entry.translation.trim().is_empty() {
    return Err(ReferenceTableError::EmptyTranslation {
      key: entry.phrase.clone(),
    });
  }

  if let Some(position) = entry
    .morphology
    .iter()
    .position(|m| m.piece.trim().is_empty() || m.gloss.trim().is_empty())
  {
    return Err(ReferenceTableError::EmptyMorphologyPiece {
      key: entry.phrase.clone(),
      position,
    });
  }

  Ok(())
}
