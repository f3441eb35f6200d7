use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{Config, ModelOptions};
use crate::error::{Error, Result};
use crate::llm::prompts::PromptVariables;
use crate::llm::provider::CompletionProvider;

pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
    options: ModelOptions,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
    options: RequestOptions,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct RequestOptions {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    num_ctx: u32,
}

impl From<&ModelOptions> for RequestOptions {
    fn from(options: &ModelOptions) -> Self {
        Self {
            temperature: options.temperature,
            top_k: options.top_k,
            top_p: options.top_p,
            num_ctx: options.num_ctx,
        }
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    message: Option<ChatMessage>,
    #[serde(default)]
    error: Option<String>,
}

impl OllamaProvider {
    pub fn new(
        base_url: &str,
        model: &str,
        options: ModelOptions,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(client_setup_error)?;

        tracing::info!("Ollama provider initialized with model '{}'", model);

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            options,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.ollama_base_url,
            &config.model,
            config.model_options.clone(),
            config.request_timeout_secs,
        )
    }

    fn build_request(&self, prompt: String) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            stream: false,
            options: RequestOptions::from(&self.options),
        }
    }
}

/// A client that cannot be built (TLS backend, proxy settings) is a local
/// setup problem, not a model service failure.
fn client_setup_error(e: reqwest::Error) -> Error {
    Error::Config(format!("Failed to create HTTP client: {}", e))
}

#[async_trait]
impl CompletionProvider for OllamaProvider {
    async fn complete(&self, template: &str, variables: &PromptVariables) -> Result<String> {
        tracing::debug!(
            "Sending ~{} tokens to {}",
            variables.estimate_tokens(template),
            self.model
        );

        let request_body = self.build_request(variables.render(template));

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::ModelInvocation(format!("Failed to call Ollama at {}: {}", self.base_url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ModelInvocation(format!(
                "Ollama returned {}: {}",
                status, body
            )));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::ModelInvocation(format!("Failed to parse Ollama response: {}", e)))?;

        if let Some(error) = result.error {
            return Err(Error::ModelInvocation(error));
        }

        let text = result.message.map(|m| m.content).unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::ModelInvocation("Empty response from Ollama".to_string()));
        }

        tracing::debug!("Received {} characters from {}", text.len(), self.model);
        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn name(&self) -> &str {
        "Ollama"
    }
}
