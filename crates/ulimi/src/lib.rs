//! ulimi sentence analysis library
//!
//! Normalizes, tokenizes and profiles short sentences in South African languages,
//! matches them against a curated known-phrase dictionary and generates usage
//! examples and synonyms for every word.

/// Analysis module - vocabulary, bigram and frequency passes over tokens
pub mod analysis;

/// Configuration module - UlimiConfig, Language and related settings
pub mod config;

/// Dictionary module - known-phrase dictionary and synonym tables
pub mod dictionary;

/// Error module - UlimiError, UlimiResult and layered error types
pub mod errors;

/// Heuristics module - word classification, usage and synonym generation
pub mod heuristics;

/// Data model module - AnalysisResult, KnownPhraseEntry and friends
pub mod models;

/// Service module - the UlimiService facade
pub mod service;

/// Tokenizer module - normalization and letter-run tokenization
pub mod tokenizer;

/// Re-export
pub use config::{Language, UlimiConfig};
pub use errors::{UlimiError, UlimiResult};
pub use models::{AnalysisResult, NO_LOCAL_TRANSLATION};
pub use service::UlimiService;
