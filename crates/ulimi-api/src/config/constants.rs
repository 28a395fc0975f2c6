//! API configuration constants

/// Maximum length of a sentence or synonym query (bytes)
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Default bind address
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5530";

/// Environment variable: bind address
pub const ENV_BIND_ADDR: &str = "ULIMI_API_BIND_ADDR";

/// Environment variable: known-phrase table file
pub const ENV_PHRASES_PATH: &str = "ULIMI_PHRASES_PATH";

/// Environment variable: synonym table file
pub const ENV_SYNONYMS_PATH: &str = "ULIMI_SYNONYMS_PATH";

/// Environment variable: default analysis language code
pub const ENV_DEFAULT_LANGUAGE: &str = "ULIMI_DEFAULT_LANGUAGE";

/// Environment variable: comma-separated language codes with local analysis
pub const ENV_LOCAL_LANGUAGES: &str = "ULIMI_LOCAL_LANGUAGES";

/// Environment variable: log level
pub const ENV_LOG_LEVEL: &str = "ULIMI_LOG_LEVEL";
