//! Synonym generation
//!
//! The curated table of the analysis language wins. Without a curated entry the
//! word class may suggest near-terms; otherwise nothing is offered.

use super::classification::{WordClass, classify, infinitive_stem};
use crate::dictionary::SynonymTable;

/// Near-terms offered for singular person nouns
const PERSON_NEAR_TERMS: [&str; 3] = ["umuntu", "person", "individual"];

/// Near-terms offered for plural people nouns
const PLURAL_PEOPLE_NEAR_TERMS: [&str; 3] = ["abantu", "people", "umphakathi"];

/// Generates synonyms for a lowercase token.
///
/// `table` is the curated table of the analysis language, if one exists.
/// A curated, non-empty entry is returned verbatim and in order.
/// Class near-terms never include `word` itself. The result may be empty.
pub fn gen_synonyms(word: &str, table: Option<&SynonymTable>) -> Vec<String> {
  if let Some(curated) = table.and_then(|t| t.lookup(word)).filter(|s| !s.is_empty()) {
    return curated.to_vec();
  }

  let near_terms: Vec<String> = match classify(word) {
    WordClass::PersonNoun => PERSON_NEAR_TERMS.iter().map(|s| (*s).to_string()).collect(),
    WordClass::PluralPeople => PLURAL_PEOPLE_NEAR_TERMS.iter().map(|s| (*s).to_string()).collect(),
    WordClass::Infinitive => infinitive_stem(word)
      .map(|stem| vec![format!("-{stem} (verb stem)"), format!("ukwenza -{stem}")])
      .unwrap_or_default(),
    WordClass::Interjection | WordClass::Other => Vec::new(),
  };

  near_terms.into_iter().filter(|term| term != word).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Language;
  use crate::dictionary::{SynonymRecord, SynonymTables};

  fn tables() -> SynonymTables {
    SynonymTables::from_records(vec![
      SynonymRecord {
        language: Language::Zul,
        word: "usizo".to_string(),
        synonyms: vec!["ukusiza".to_string(), "ukweseka".to_string()],
      },
      SynonymRecord {
        language: Language::Zul,
        word: "umngane".to_string(),
        synonyms: vec![],
      },
      SynonymRecord {
        language: Language::Zul,
        word: "umuntu".to_string(),
        synonyms: vec!["isakhamuzi".to_string()],
      },
    ])
    .unwrap()
  }

  #[test]
  fn curated_entry_is_returned_verbatim() {
    let tables = tables();
    assert_eq!(gen_synonyms("usizo", tables.table(Language::Zul)), vec!["ukusiza", "ukweseka"]);
  }

  #[test]
  fn curated_entry_beats_class_near_terms() {
    let tables = tables();
    assert_eq!(gen_synonyms("umuntu", tables.table(Language::Zul)), vec!["isakhamuzi"]);
  }

  #[test]
  fn empty_curated_entry_falls_through_to_class() {
    let tables = tables();
    assert_eq!(gen_synonyms("umngane", tables.table(Language::Zul)), vec![
      "umuntu",
      "person",
      "individual"
    ]);
  }

  #[test]
  fn person_near_terms_exclude_the_word_itself() {
    assert_eq!(gen_synonyms("umuntu", None), vec!["person", "individual"]);
  }

  #[test]
  fn plural_people_near_terms() {
    assert_eq!(gen_synonyms("abantu", None), vec!["people", "umphakathi"]);
    assert_eq!(gen_synonyms("abafana", None), vec!["abantu", "people", "umphakathi"]);
  }

  #[test]
  fn infinitive_near_terms_use_the_stem() {
    assert_eq!(gen_synonyms("ukudla", None), vec!["-dla (verb stem)", "ukwenza -dla"]);
  }

  #[test]
  fn no_synonyms_for_unclassified_words() {
    assert!(gen_synonyms("kakhulu", None).is_empty());
    assert!(gen_synonyms("sawubona", None).is_empty());
  }

  #[test]
  fn table_of_another_language_is_not_consulted() {
    let tables = tables();
    assert!(gen_synonyms("usizo", tables.table(Language::Eng)).is_empty());
  }
}
