use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "deepseek-r1:1.5b";
pub const DEFAULT_MAX_PROMPT_CHARS: usize = 2500;

#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_base_url: String,
    pub model: String,
    pub model_options: ModelOptions,
    pub request_timeout_secs: u64,
    pub max_prompt_chars: usize,
}

/// Sampling options forwarded to the model on every request.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelOptions {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub num_ctx: u32,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            top_k: 40,
            top_p: 0.9,
            num_ctx: 2048,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let ollama_base_url = env::var("OLLAMA_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());

        let model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let defaults = ModelOptions::default();
        let model_options = ModelOptions {
            temperature: parse_var("OLLAMA_TEMPERATURE").unwrap_or(defaults.temperature),
            top_k: parse_var("OLLAMA_TOP_K").unwrap_or(defaults.top_k),
            top_p: parse_var("OLLAMA_TOP_P").unwrap_or(defaults.top_p),
            num_ctx: parse_var("OLLAMA_NUM_CTX").unwrap_or(defaults.num_ctx),
        };

        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS").unwrap_or(300);

        let max_prompt_chars =
            parse_var("MAX_PROMPT_CHARS").unwrap_or(DEFAULT_MAX_PROMPT_CHARS);

        let config = Self {
            ollama_base_url,
            model,
            model_options,
            request_timeout_secs,
            max_prompt_chars,
        };
        config.validate()?;

        Ok(config)
    }

    /// Applies CLI overrides and re-checks the result.
    pub fn with_overrides(mut self, model: Option<String>, ollama_base_url: Option<String>) -> Result<Self> {
        if let Some(model) = model {
            self.model = model;
        }
        if let Some(url) = ollama_base_url {
            self.ollama_base_url = url;
        }
        self.validate()?;

        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.ollama_base_url.trim().is_empty() {
            return Err(Error::Config("Ollama base URL is empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(Error::Config("Ollama model name is empty".to_string()));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// CV text longer than this is cut before it is sent to the model.
    pub max_prompt_chars: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_prompt_chars: DEFAULT_MAX_PROMPT_CHARS,
        }
    }
}

impl From<&Config> for AnalyzerConfig {
    fn from(config: &Config) -> Self {
        Self {
            max_prompt_chars: config.max_prompt_chars,
        }
    }
}
