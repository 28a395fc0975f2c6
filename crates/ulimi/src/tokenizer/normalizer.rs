//! Sentence normalization for exact-match dictionary lookup

use unicode_normalization::UnicodeNormalization;

/// Characters stripped from the end of a sentence.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Canonicalizes a sentence into its dictionary lookup key.
///
/// - NFC composition, so precomposed and decomposed accents compare equal
/// - lower-casing
/// - surrounding whitespace trimmed
/// - any trailing run of `.`, `!`, `?` removed, whitespace inside that run included
///
/// Total and idempotent: `normalize(&normalize(x)) == normalize(x)`.
///
/// # Examples
/// ```
/// use ulimi::tokenizer::normalize;
///
/// assert_eq!(normalize("  Umuntu ngumuntu ngabantu!! "), "umuntu ngumuntu ngabantu");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
  let lowered: String = text.to_lowercase().nfc().collect();

  lowered
    .trim_end_matches(|c: char| c.is_whitespace() || SENTENCE_TERMINATORS.contains(&c))
    .trim_start()
    .to_string()
}
