//! Sentence Analysis Service

use ulimi::{AnalysisResult, UlimiService};

use crate::config::{Config, MAX_TEXT_LENGTH};
use crate::errors::{ApiError, Result};
use crate::models::{AnalyzeRequest, AnalyzeResponse, LanguageDto, SynonymQuery, SynonymsResponse};

/// Common interface for the sentence analysis service
///
/// This trait allows swapping production implementation (`UlimiApiServiceFull`) with
/// test stubs/mocks.
pub trait UlimiApiService: Send + Sync {
  /// Analyses a sentence for a language pairing
  ///
  /// # Errors
  /// - Input error (length exceeded, unsupported language)
  /// - Internal error
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse>;

  /// Returns the complete engine result for the source language
  ///
  /// # Errors
  /// Same as [`analyze`](Self::analyze)
  fn analyze_full(&self, request: AnalyzeRequest) -> Result<AnalysisResult>;

  /// Looks up synonyms of a single word
  ///
  /// # Errors
  /// - Input error (length exceeded, unsupported language)
  fn synonyms(&self, query: SynonymQuery) -> Result<SynonymsResponse>;

  /// Lists the languages and their local-analysis capability
  fn languages(&self) -> Vec<LanguageDto>;
}

/// Sentence Analysis Service
///
/// Thin wrapper over [`UlimiService`] adding transport-level validation.
#[derive(Debug, Clone)]
pub struct UlimiApiServiceFull {
  inner: UlimiService,
}

impl UlimiApiServiceFull {
  /// Initializes the service
  ///
  /// # Errors
  /// Returns an error if the configuration is invalid or a reference table fails to load
  pub fn new(config: &Config) -> Result<Self> {
    let inner = UlimiService::init(&config.engine_config())?;
    Ok(Self { inner })
  }

  /// Wraps an already initialized engine
  #[must_use]
  pub fn from_service(inner: UlimiService) -> Self {
    Self { inner }
  }

  /// Returns the wrapped engine
  #[must_use]
  pub fn engine(&self) -> &UlimiService {
    &self.inner
  }

  /// Validates length and languages, then runs the engine
  fn analyse_request(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
    check_length(&request.sentence)?;
    self.inner.ensure_supported(request.source_language)?;
    self.inner.ensure_supported(request.target_language)?;

    Ok(self.inner.analyze_with_language(request.source_language, &request.sentence))
  }
}

/// Production implementation of trait `UlimiApiService`
impl UlimiApiService for UlimiApiServiceFull {
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    let result = self.analyse_request(&request)?;
    let (source, target) = (request.source_language, request.target_language);

    if self.inner.supports_local_analysis(source, target) {
      Ok(AnalyzeResponse::analysed(&result, target))
    } else {
      Ok(AnalyzeResponse::unavailable(&result, source, target))
    }
  }

  fn analyze_full(&self, request: AnalyzeRequest) -> Result<AnalysisResult> {
    self.analyse_request(&request)
  }

  fn synonyms(&self, query: SynonymQuery) -> Result<SynonymsResponse> {
    check_length(&query.word)?;
    self.inner.ensure_supported(query.language)?;

    let synonyms = self.inner.synonyms(query.language, &query.word);

    Ok(SynonymsResponse {
      language: query.language,
      word: query.word,
      synonyms,
    })
  }

  fn languages(&self) -> Vec<LanguageDto> {
    self
      .inner
      .supported_languages()
      .iter()
      .map(|&language| LanguageDto {
        code: language,
        name: language.display_name(),
        local_analysis: self.inner.supports_local_analysis(language, language),
      })
      .collect()
  }
}

/// Rejects text longer than [`MAX_TEXT_LENGTH`] bytes
fn check_length(text: &str) -> Result<()> {
  let text_bytes = text.len();
  if text_bytes > MAX_TEXT_LENGTH {
    return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
  }
  Ok(())
}
