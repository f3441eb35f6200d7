use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported file type '{0}'. Only .pdf and .docx are supported.")]
    UnsupportedFormat(String),

    #[error("Could not extract text from {0}. The file might be corrupted or contain images only.")]
    ExtractionEmpty(String),

    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The boundary that failed, so callers can tell a bad document from an
    /// unreachable model service.
    pub fn boundary(&self) -> &'static str {
        match self {
            Error::UnsupportedFormat(_) | Error::ExtractionEmpty(_) => "document",
            Error::ModelInvocation(_) => "model service",
            Error::Config(_) => "configuration",
            Error::Serialization(_) | Error::Io(_) => "output",
        }
    }

    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::UnsupportedFormat(_) => Some("Upload the CV as a PDF or DOCX file."),
            Error::ExtractionEmpty(_) => {
                Some("Scanned or image-only documents have no text layer; export the CV with selectable text.")
            }
            Error::ModelInvocation(_) => {
                Some("Ensure Ollama is running and the model is installed.")
            }
            Error::Config(_) => {
                Some("Check OLLAMA_BASE_URL and OLLAMA_MODEL, or the --ollama-url and --model flags.")
            }
            _ => None,
        }
    }
}
