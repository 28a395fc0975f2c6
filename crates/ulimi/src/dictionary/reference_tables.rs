//! Reference table loading
//!
//! Loads the known-phrase dictionary and the synonym tables once at startup.
//! The tables embedded in the crate are parsed on first use only; later calls
//! return a clone of the same `Arc`. Files named by the configuration replace
//! the embedded table of the same kind.
//!
//! Any defect in a table is fatal here, before a single request is served.

use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::info;

use super::phrase_dictionary::{PHRASE_TABLE, PhraseDictionary};
use super::synonym_table::{SYNONYM_TABLE, SynonymTables};
use crate::config::UlimiConfig;
use crate::errors::ReferenceTableError;

/// Known-phrase table embedded at compile time
const EMBEDDED_PHRASES: &str = include_str!("../../data/known_phrases.json");

/// Synonym table embedded at compile time
const EMBEDDED_SYNONYMS: &str = include_str!("../../data/synonyms.json");

/// Cache of the parsed embedded tables (initialized only once).
/// ReferenceTableError implements Clone so the Result itself is cached.
static EMBEDDED: OnceLock<Result<Arc<ReferenceTables>, ReferenceTableError>> = OnceLock::new();

/// Immutable pair of reference tables shared by every analysis
pub struct ReferenceTables {
  phrases: PhraseDictionary,
  synonyms: SynonymTables,
}

impl ReferenceTables {
  /// Constructs from already validated tables
  pub fn new(phrases: PhraseDictionary, synonyms: SynonymTables) -> Self {
    Self { phrases, synonyms }
  }

  /// Returns the tables embedded in the crate.
  ///
  /// - Parses and validates on the first call
  /// - Returns a clone of the same `Arc` from the second call onwards
  /// - A failure on the first call is cached and returned on every call
  pub fn embedded() -> Result<Arc<Self>, ReferenceTableError> {
    EMBEDDED
      .get_or_init(|| {
        let tables = Self::new(
          PhraseDictionary::from_json_str(EMBEDDED_PHRASES)?,
          SynonymTables::from_json_str(EMBEDDED_SYNONYMS)?,
        );
        info!(
          phrases = tables.phrases.len(),
          synonyms = tables.synonyms.len(),
          "Loaded embedded reference tables"
        );
        Ok(Arc::new(tables))
      })
      .clone()
  }

  /// Loads the tables named by `config`, falling back to the embedded ones.
  ///
  /// # Errors
  /// `Read` if a configured file cannot be read, `Parse` or a validation error
  /// if a table is malformed.
  pub fn load(config: &UlimiConfig) -> Result<Arc<Self>, ReferenceTableError> {
    let (phrases_path, synonyms_path) = (config.phrases_path(), config.synonyms_path());

    if phrases_path.is_none() && synonyms_path.is_none() {
      return Self::embedded();
    }

    let phrases = match phrases_path {
      Some(path) => PhraseDictionary::from_json_str(&read_table(PHRASE_TABLE, path)?)?,
      None => Self::embedded()?.phrases.clone(),
    };

    let synonyms = match synonyms_path {
      Some(path) => SynonymTables::from_json_str(&read_table(SYNONYM_TABLE, path)?)?,
      None => Self::embedded()?.synonyms.clone(),
    };

    info!(
      phrases = phrases.len(),
      synonyms = synonyms.len(),
      phrases_path = ?phrases_path,
      synonyms_path = ?synonyms_path,
      "Loaded reference tables"
    );

    Ok(Arc::new(Self::new(phrases, synonyms)))
  }

  /// Known-phrase dictionary
  pub fn phrases(&self) -> &PhraseDictionary {
    &self.phrases
  }

  /// Synonym tables
  pub fn synonyms(&self) -> &SynonymTables {
    &self.synonyms
  }
}

/// Reads a table file into a string
fn read_table(table: &'static str, path: &Path) -> Result<String, ReferenceTableError> {
  std::fs::read_to_string(path).map_err(|e| ReferenceTableError::Read {
    table,
    path: path.to_path_buf(),
    source: Arc::new(e),
  })
}

/// Shows only table sizes
impl fmt::Debug for ReferenceTables {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ReferenceTables")
      .field("phrases", &self.phrases.len())
      .field("synonyms", &self.synonyms.len())
      .finish()
  }
}
