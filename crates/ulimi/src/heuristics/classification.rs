//! Surface-form word classification
//!
//! Nguni noun-class and verb prefixes decide the class of a token.
//! The check order is fixed: plural people, person noun, infinitive, interjection.

use serde::Serialize;

/// Class prefix of plural people nouns (noun class 2: abantu, abafana)
const PLURAL_PEOPLE_PREFIX: &str = "aba";

/// Class prefix of person nouns (noun class 1: umuntu, umfundisi)
const PERSON_NOUN_PREFIX: &str = "umu";

/// Kinship and person nouns that do not carry the `umu-` prefix
const PERSON_NOUNS: [&str; 5] = ["ubaba", "umama", "ugogo", "umkhulu", "umngane"];

/// Infinitive prefixes (`ukw-` before a vowel-initial stem: ukwazi, ukweseka)
const INFINITIVE_PREFIXES: [&str; 2] = ["uku", "ukw"];

/// Closed set of interjections and greetings
const INTERJECTIONS: [&str; 8] =
  ["sawubona", "sanibonani", "yebo", "cha", "hhayi", "hawu", "maye", "halala"];

/// Closed category of a token, derived from its surface form only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
  /// Singular person noun (umuntu, ubaba)
  PersonNoun,
  /// Plural people noun (abantu)
  PluralPeople,
  /// Infinitive verb (ukudla)
  Infinitive,
  /// Interjection or greeting (sawubona)
  Interjection,
  /// Anything else
  Other,
}

/// Classifies a lowercase token.
///
/// Pure and total. Prefix rules only match when something follows the prefix,
/// so a bare `uku` is `Other`.
pub fn classify(word: &str) -> WordClass {
  if has_prefix(word, PLURAL_PEOPLE_PREFIX) {
    return WordClass::PluralPeople;
  }

  if has_prefix(word, PERSON_NOUN_PREFIX) || PERSON_NOUNS.contains(&word) {
    return WordClass::PersonNoun;
  }

  if INFINITIVE_PREFIXES.iter().any(|prefix| has_prefix(word, prefix)) {
    return WordClass::Infinitive;
  }

  if INTERJECTIONS.contains(&word) {
    return WordClass::Interjection;
  }

  WordClass::Other
}

/// Verb stem of an infinitive (`ukudla` → `dla`, `ukwazi` → `azi`)
pub fn infinitive_stem(word: &str) -> Option<&str> {
  INFINITIVE_PREFIXES
    .iter()
    .find_map(|prefix| word.strip_prefix(prefix))
    .filter(|stem| !stem.is_empty())
}

/// `true` if `word` starts with `prefix` and is longer than it
fn has_prefix(word: &str, prefix: &str) -> bool {
  word.len() > prefix.len() && word.starts_with(prefix)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn classify_plural_people() {
    assert_eq!(classify("abantu"), WordClass::PluralPeople);
    assert_eq!(classify("abafana"), WordClass::PluralPeople);
  }

  #[test]
  fn classify_person_nouns_by_prefix_and_membership() {
    assert_eq!(classify("umuntu"), WordClass::PersonNoun);
    assert_eq!(classify("umfundisi"), WordClass::Other);
    assert_eq!(classify("umufundisi"), WordClass::PersonNoun);
    assert_eq!(classify("ubaba"), WordClass::PersonNoun);
    assert_eq!(classify("umngane"), WordClass::PersonNoun);
  }

  #[test]
  fn classify_infinitives() {
    assert_eq!(classify("ukudla"), WordClass::Infinitive);
    assert_eq!(classify("ukucasuka"), WordClass::Infinitive);
    assert_eq!(classify("ukweseka"), WordClass::Infinitive);
  }

  #[test]
  fn classify_interjections() {
    for word in INTERJECTIONS {
      assert_eq!(classify(word), WordClass::Interjection, "word={word}");
    }
  }

  #[test]
  fn classify_bare_prefixes_as_other() {
    assert_eq!(classify("aba"), WordClass::Other);
    assert_eq!(classify("umu"), WordClass::Other);
    assert_eq!(classify("uku"), WordClass::Other);
    assert_eq!(classify(""), WordClass::Other);
  }

  #[test]
  fn classify_unrelated_words_as_other() {
    assert_eq!(classify("hamba"), WordClass::Other);
    assert_eq!(classify("happy"), WordClass::Other);
    assert_eq!(classify("sawubonani"), WordClass::Other);
  }

  #[test]
  fn infinitive_stem_strips_prefix() {
    assert_eq!(infinitive_stem("ukudla"), Some("dla"));
    assert_eq!(infinitive_stem("ukwazi"), Some("azi"));
    assert_eq!(infinitive_stem("uku"), None);
    assert_eq!(infinitive_stem("hamba"), None);
  }
}
