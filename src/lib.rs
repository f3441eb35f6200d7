pub mod config;
pub mod error;
pub mod models;
pub mod extract;
pub mod llm;
pub mod taxonomy;
pub mod analysis;
pub mod report;

pub use config::{AnalyzerConfig, Config};
pub use error::{Error, Result};
pub use llm::{CompletionProvider, OllamaProvider};
pub use analysis::AnalysisPipeline;
