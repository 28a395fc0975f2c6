//! Example usage sentence generation
//!
//! First-match cascade:
//! 1. hand-authored exact-word overrides
//! 2. per-class templates selected by [`classify`]
//! 3. generic fallback templates (class `Other`)
//!
//! Templates use `{word}` for the token and `{Word}` for the token at the start
//! of a sentence.

use super::classification::{WordClass, classify};

/// Hand-authored sentences for exact words. Highest precedence.
const USAGE_OVERRIDES: [(&str, &[&str]); 8] = [
  ("umuntu", &[
    "Umuntu ngumuntu ngabantu.",
    "Lowo muntu unomusa omkhulu.",
    "Umuntu ngamunye ufanelwe ukuhlonishwa.",
  ]),
  ("ubuntu", &[
    "Ubuntu busifundisa ukuhloniphana.",
    "Umphakathi wakhiwe ngobuntu.",
  ]),
  ("woza", &["Woza lapha, mngane wami!", "Woza sizodla ndawonye."]),
  ("hamba", &["Hamba kahle!", "Hamba uyothenga isinkwa."]),
  ("asambe", &["Asambe esikoleni.", "Asambe, sesephuzile!"]),
  ("ngijabule", &["Ngijabule kakhulu namuhla.", "Ngijabule ukukubona."]),
  ("happy", &["I am happy to see you.", "She looks happy today."]),
  ("help", &["Can you help me, please?", "Thank you for your help."]),
];

const PERSON_NOUN_TEMPLATES: [&str; 3] = [
  "{Word} ufika ekhaya kusihlwa.",
  "Ngibone {word} emakethe namuhla.",
  "{Word} uyasiza emphakathini.",
];

const PLURAL_PEOPLE_TEMPLATES: [&str; 3] = [
  "{Word} bayasebenza ndawonye.",
  "{Word} bahlangana enkundleni.",
  "Sibonga {word} ngosizo lwabo.",
];

const INFINITIVE_TEMPLATES: [&str; 3] = [
  "Ngithanda {word}.",
  "{Word} kubalulekile empilweni.",
  "Sifunda {word} esikoleni.",
];

const INTERJECTION_TEMPLATES: [&str; 2] = ["{Word}! Unjani namuhla?", "\"{Word},\" esho emamatheka."];

const FALLBACK_TEMPLATES: [&str; 2] = [
  "Igama elithi \"{word}\" liyasetshenziswa kule nkulumo.",
  "Example: \"{word}\" as used in everyday conversation.",
];

/// Generates example usage sentences for a lowercase token.
///
/// Never empty and deterministic: the same word always yields the same list.
pub fn gen_usage(word: &str) -> Vec<String> {
  if let Some(sentences) = usage_override(word) {
    return sentences.iter().map(|s| (*s).to_string()).collect();
  }

  templates_for(classify(word)).iter().map(|template| render(template, word)).collect()
}

/// Override sentences for `word`, if any
fn usage_override(word: &str) -> Option<&'static [&'static str]> {
  USAGE_OVERRIDES.iter().find(|(key, _)| *key == word).map(|(_, sentences)| *sentences)
}

/// Template set for each class
fn templates_for(class: WordClass) -> &'static [&'static str] {
  match class {
    WordClass::PersonNoun => &PERSON_NOUN_TEMPLATES,
    WordClass::PluralPeople => &PLURAL_PEOPLE_TEMPLATES,
    WordClass::Infinitive => &INFINITIVE_TEMPLATES,
    WordClass::Interjection => &INTERJECTION_TEMPLATES,
    WordClass::Other => &FALLBACK_TEMPLATES,
  }
}

/// Interpolates `word` into `template`
fn render(template: &str, word: &str) -> String {
  template.replace("{Word}", &capitalize(word)).replace("{word}", word)
}

/// Upper-cases the first character
fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn override_takes_precedence_over_classification() {
    // "umuntu" is also a PersonNoun
    let usage = gen_usage("umuntu");
    assert_eq!(usage[0], "Umuntu ngumuntu ngabantu.");
    assert_eq!(usage.len(), 3);
  }

  #[test]
  fn person_noun_templates_interpolate_the_word() {
    assert_eq!(gen_usage("ubaba"), vec![
      "Ubaba ufika ekhaya kusihlwa.",
      "Ngibone ubaba emakethe namuhla.",
      "Ubaba uyasiza emphakathini.",
    ]);
  }

  #[test]
  fn plural_people_templates() {
    let usage = gen_usage("abantu");
    assert_eq!(usage[0], "Abantu bayasebenza ndawonye.");
    assert!(usage.iter().all(|s| s.to_lowercase().contains("abantu")));
  }

  #[test]
  fn infinitive_templates() {
    assert_eq!(gen_usage("ukudla")[0], "Ngithanda ukudla.");
  }

  #[test]
  fn interjection_templates() {
    assert_eq!(gen_usage("yebo")[0], "Yebo! Unjani namuhla?");
  }

  #[test]
  fn fallback_for_unclassified_words() {
    let usage = gen_usage("kakhulu");
    assert_eq!(usage, vec![
      "Igama elithi \"kakhulu\" liyasetshenziswa kule nkulumo.",
      "Example: \"kakhulu\" as used in everyday conversation.",
    ]);
  }

  #[test]
  fn usage_is_never_empty() {
    for word in ["", "a", "umuntu", "abantu", "ukudla", "cha", "straße", "привет"] {
      assert!(!gen_usage(word).is_empty(), "word={word:?}");
    }
  }

  #[test]
  fn usage_is_deterministic() {
    assert_eq!(gen_usage("umuntu"), gen_usage("umuntu"));
    assert_eq!(gen_usage("ngiyabonga"), gen_usage("ngiyabonga"));
  }

  #[test]
  fn capitalize_handles_non_ascii() {
    assert_eq!(capitalize("één"), "Één");
    assert_eq!(capitalize("ß"), "SS");
    assert_eq!(capitalize(""), "");
  }
}
