use async_trait::async_trait;
use crate::error::Result;
use crate::llm::prompts::PromptVariables;

/// A text-generation backend. Returns the raw completion, including any
/// reasoning markup the model emits; cleaning is left to the parser.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, template: &str, variables: &PromptVariables) -> Result<String>;
    fn model(&self) -> &str;
    fn name(&self) -> &str;
}
