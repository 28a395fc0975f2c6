//! Model module

mod request;
mod response;

pub use request::{AnalyzeRequest, SynonymQuery};
pub use response::{AnalysisDto, AnalyzeResponse, LanguageDto, SynonymsResponse};
