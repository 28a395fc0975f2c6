//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, ENV_BIND_ADDR, ENV_DEFAULT_LANGUAGE, ENV_LOCAL_LANGUAGES, ENV_LOG_LEVEL,
  ENV_PHRASES_PATH, ENV_SYNONYMS_PATH, MAX_TEXT_LENGTH,
};
pub use env::Config;
