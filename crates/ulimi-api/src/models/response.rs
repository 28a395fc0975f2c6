//! Response Model Definition

use std::collections::BTreeMap;

use serde::Serialize;
use ulimi::{AnalysisResult, Language};

/// Sentence analysis response
///
/// `analysis` is present only when the language pairing has local analysis.
/// Otherwise `error` explains why; the HTTP status stays 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
  /// Matched translation into the target language, or the no-translation placeholder
  pub translation: String,
  /// Word statistics, examples and common pairs
  #[serde(skip_serializing_if = "Option::is_none")]
  pub analysis: Option<AnalysisDto>,
  /// Note shown when local analysis is unavailable
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl AnalyzeResponse {
  /// Builds the response for a pairing with local analysis
  #[must_use]
  pub fn analysed(result: &AnalysisResult, target: Language) -> Self {
    Self {
      translation: result.translation_for(target).to_string(),
      analysis: Some(AnalysisDto::from_result(result)),
      error: None,
    }
  }

  /// Builds the response for a pairing without local analysis
  #[must_use]
  pub fn unavailable(result: &AnalysisResult, source: Language, target: Language) -> Self {
    Self {
      translation: result.translation_for(target).to_string(),
      analysis: None,
      error: Some(format!(
        "Local analysis is not available yet for {} to {}.",
        source.display_name(),
        target.display_name()
      )),
    }
  }
}

/// Analysis section of [`AnalyzeResponse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDto {
  /// word → count
  pub word_stats: BTreeMap<String, usize>,
  /// word → usage examples
  pub examples: BTreeMap<String, Vec<String>>,
  /// Bigrams as `"left → right"`, in sentence order
  pub common_pairs: Vec<String>,
}

impl AnalysisDto {
  /// Converts an engine result
  #[must_use]
  pub fn from_result(result: &AnalysisResult) -> Self {
    let word_stats = result.frequency.iter().map(|row| (row.word.clone(), row.count)).collect();

    let examples = result
      .insights
      .iter()
      .map(|insight| (insight.word.clone(), insight.usage.clone()))
      .collect();

    let common_pairs = result.bigrams.iter().map(ToString::to_string).collect();

    Self {
      word_stats,
      examples,
      common_pairs,
    }
  }
}

/// Response of `GET /synonyms`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynonymsResponse {
  /// Table language
  pub language: Language,
  /// Word as requested
  pub word: String,
  /// Synonyms, possibly empty
  pub synonyms: Vec<String>,
}

/// One entry of `GET /languages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDto {
  /// Language code (`"zul"`)
  pub code: Language,
  /// Display name (`"isiZulu"`)
  pub name: &'static str,
  /// Whether local analysis is available with this language on both sides
  pub local_analysis: bool,
}
