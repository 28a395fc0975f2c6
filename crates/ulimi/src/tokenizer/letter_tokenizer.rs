//! Letter-run tokenizer
//!
//! A token is a maximal run of Unicode alphabetic characters. Combining marks
//! (virama, vowel signs, nukta) continue a run that started on a letter.
//! Digits, punctuation, symbols and whitespace are separators and are dropped.

use std::iter::FusedIterator;

use tracing::debug;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Lower-cased token sequence of one input text.
///
/// - Owns the case-folded text; tokens borrow from it
/// - Restartable: every call to [`iter`](Self::iter) starts from the first token
/// - Finite, and no token is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
  text: String,
}

/// Lazy iterator over the tokens of a [`TokenSequence`]
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
  rest: &'a str,
}

/// Tokenizes `text` into lowercase letter runs.
///
/// The whole input is lower-cased (and NFC-composed) before scanning, so tokens
/// are equal to their own lowercase form. Script-agnostic: accented Latin,
/// Greek, Cyrillic, Devanagari and so on. A combining mark never starts a token.
///
/// # Examples
/// ```
/// use ulimi::tokenizer::tokenize;
///
/// let tokens = tokenize("Sawubona, 2024!");
/// assert_eq!(tokens.to_vec(), vec!["sawubona"]);
/// ```
pub fn tokenize(text: &str) -> TokenSequence {
  let tokens = TokenSequence {
    text: text.to_lowercase().nfc().collect(),
  };

  debug!(input_len = text.len(), token_count = tokens.len(), "Tokenized text");

  tokens
}

impl TokenSequence {
  /// Returns a fresh iterator positioned at the first token.
  pub fn iter(&self) -> Tokens<'_> {
    Tokens { rest: &self.text }
  }

  /// Number of tokens.
  pub fn len(&self) -> usize {
    self.iter().count()
  }

  /// `true` if the text contains no letters.
  pub fn is_empty(&self) -> bool {
    self.iter().next().is_none()
  }

  /// Collects the tokens into owned strings.
  pub fn to_vec(&self) -> Vec<String> {
    self.iter().map(str::to_string).collect()
  }

  /// The case-folded text the tokens are taken from.
  pub fn as_str(&self) -> &str {
    &self.text
  }
}

impl<'a> IntoIterator for &'a TokenSequence {
  type Item = &'a str;
  type IntoIter = Tokens<'a>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<'a> Iterator for Tokens<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<&'a str> {
    let Some(start) = self.rest.find(char::is_alphabetic) else {
      self.rest = "";
      return None;
    };

    let tail = &self.rest[start..];
    let end = tail.find(|c: char| !is_word_char(c)).unwrap_or(tail.len());
    let (token, rest) = tail.split_at(end);
    self.rest = rest;

    Some(token)
  }
}

impl FusedIterator for Tokens<'_> {}

/// Letters and the combining marks attached to them
fn is_word_char(c: char) -> bool {
  c.is_alphabetic() || is_combining_mark(c)
}
