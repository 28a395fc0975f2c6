//! Request model definitions

use serde::Deserialize;
use ulimi::Language;

/// Sentence analysis request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
  /// Sentence to analyse (may be empty)
  pub sentence: String,
  /// Language of the sentence
  pub source_language: Language,
  /// Language the learner translates into
  pub target_language: Language,
}

/// Query string of `GET /synonyms`
#[derive(Debug, Clone, Deserialize)]
pub struct SynonymQuery {
  /// Table language
  pub language: Language,
  /// Word to look up
  pub word: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserialize_valid_request() {
    let json = r#"{"sentence": "Sawubona", "sourceLanguage": "zul", "targetLanguage": "eng"}"#;
    let req: AnalyzeRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.sentence, "Sawubona");
    assert_eq!(req.source_language, Language::Zul);
    assert_eq!(req.target_language, Language::Eng);
  }

  #[test]
  fn deserialize_empty_sentence() {
    let json = r#"{"sentence": "", "sourceLanguage": "afr", "targetLanguage": "tsn"}"#;
    let req: AnalyzeRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.sentence, "");
  }

  #[test]
  fn reject_unknown_language_code() {
    let json = r#"{"sentence": "Bonjour", "sourceLanguage": "fra", "targetLanguage": "eng"}"#;
    assert!(serde_json::from_str::<AnalyzeRequest>(json).is_err());
  }

  #[test]
  fn reject_snake_case_fields() {
    let json = r#"{"sentence": "Sawubona", "source_language": "zul", "target_language": "eng"}"#;
    assert!(serde_json::from_str::<AnalyzeRequest>(json).is_err());
  }
}
