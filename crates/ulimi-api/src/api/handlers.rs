//! HTTP handler definitions

use axum::{
  Json,
  extract::{Query, State},
};
use tracing::{debug, error, info};
use ulimi::AnalysisResult;

use crate::errors::ApiError;
use crate::models::{AnalyzeRequest, AnalyzeResponse, LanguageDto, SynonymQuery, SynonymsResponse};

use super::state::AppState;

/// Runs CPU-bound work on the blocking pool
async fn run_blocking<T, F>(work: F) -> Result<T, ApiError>
where
  F: FnOnce() -> Result<T, ApiError> + Send + 'static,
  T: Send + 'static,
{
  tokio::task::spawn_blocking(work).await.map_err(|e| {
    error!(error = %e, "spawn_blocking error");
    ApiError::internal("failed to run the analysis task")
  })?
}

/// POST /analyze endpoint
///
/// Analyses a sentence for a language pairing.
///
/// # Request Body
/// ```json
/// { "sentence": "Umuntu ngumuntu ngabantu", "sourceLanguage": "zul", "targetLanguage": "eng" }
/// ```
///
/// # Response
/// - 200 OK: analysed (or `error` note when the pairing has no local analysis)
/// - 400 Bad Request: input error (text too long, unsupported language)
/// - 500 Internal Server Error: internal error
pub async fn post_analyze(
  State(state): State<AppState>,
  Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  debug!(
    sentence_len = request.sentence.len(),
    source = %request.source_language,
    target = %request.target_language,
    "Received analysis request"
  );

  let service = state.service.clone();
  let response = run_blocking(move || service.analyze(request)).await?;

  info!(
    analysed = response.analysis.is_some(),
    words = response.analysis.as_ref().map_or(0, |a| a.word_stats.len()),
    "Analysis completed"
  );

  Ok(Json(response))
}

/// POST /analyze/full endpoint
///
/// Returns the complete engine result for the source language.
pub async fn post_analyze_full(
  State(state): State<AppState>,
  Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
  debug!(
    sentence_len = request.sentence.len(),
    source = %request.source_language,
    "Received full analysis request"
  );

  let service = state.service.clone();
  let result = run_blocking(move || service.analyze_full(request)).await?;

  info!(
    tokens = result.tokens.len(),
    matched = result.matched_phrase.is_some(),
    "Full analysis completed"
  );

  Ok(Json(result))
}

/// GET /synonyms?language=zul&word=usizo endpoint
pub async fn get_synonyms(
  State(state): State<AppState>,
  Query(query): Query<SynonymQuery>,
) -> Result<Json<SynonymsResponse>, ApiError> {
  debug!(language = %query.language, word_len = query.word.len(), "Received synonym query");

  let response = state.service.synonyms(query)?;
  Ok(Json(response))
}

/// GET /languages endpoint
pub async fn get_languages(State(state): State<AppState>) -> Json<Vec<LanguageDto>> {
  Json(state.service.languages())
}

/// Health check endpoint
///
/// Checks whether the server is running.
pub async fn health_check() -> &'static str {
  "OK"
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn run_blocking_returns_the_work_result() {
    let value = run_blocking(|| Ok(21 * 2)).await.unwrap();
    assert_eq!(value, 42);
  }

  #[tokio::test]
  async fn run_blocking_propagates_the_work_error() {
    let err = run_blocking::<(), _>(|| Err(ApiError::invalid_input("nope"))).await.unwrap_err();
    assert_eq!(err.code(), "invalid_input");
  }

  #[tokio::test]
  async fn run_blocking_maps_a_panic_to_internal_error() {
    let err = run_blocking::<(), _>(|| panic!("boom")).await.unwrap_err();
    assert_eq!(err.code(), "internal_error");
  }
}
