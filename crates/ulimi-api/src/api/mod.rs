//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_languages, get_synonyms, health_check, post_analyze, post_analyze_full};
pub use routes::{create_router, run_server};
pub use state::AppState;
