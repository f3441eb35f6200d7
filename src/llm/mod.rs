pub mod provider;
pub mod ollama;
pub mod prompts;
pub mod parser;

pub use provider::CompletionProvider;
pub use ollama::OllamaProvider;
pub use prompts::PromptVariables;
pub use parser::{parse_recommendations, parse_score_and_summary, strip_thinking};
