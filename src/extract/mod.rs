//! Document-to-text extraction for uploaded CVs.
//!
//! Unknown extensions are rejected with [`Error::UnsupportedFormat`]. A PDF or
//! DOCX that cannot be read or decoded yields an empty string, which callers
//! treat as "no text recovered".

mod docx;
mod pdf;

use std::path::Path;

use crate::error::{Error, Result};

pub use docx::docx_text;
pub use pdf::pdf_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            _ => Err(Error::UnsupportedFormat(
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
            )),
        }
    }
}

pub async fn extract_text(path: &Path) -> Result<String> {
    let kind = DocumentKind::from_path(path)?;

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("An error occurred while reading {}: {}", path.display(), e);
            return Ok(String::new());
        }
    };

    let text = match kind {
        DocumentKind::Pdf => pdf_text(bytes).await,
        DocumentKind::Docx => docx_text(&bytes),
    };

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_kind() {
        assert_eq!(DocumentKind::from_path(Path::new("cv.pdf")).unwrap(), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_path(Path::new("/tmp/CV.DOCX")).unwrap(), DocumentKind::Docx);
        assert!(matches!(
            DocumentKind::from_path(Path::new("cv.doc")),
            Err(Error::UnsupportedFormat(name)) if name == "cv.doc"
        ));
        assert!(DocumentKind::from_path(Path::new("resume")).is_err());
    }

    #[tokio::test]
    async fn test_missing_file_yields_empty_text() {
        let text = extract_text(Path::new("/nonexistent/cv.docx")).await.unwrap();
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_rejected_before_reading() {
        let err = extract_text(Path::new("/nonexistent/cv.txt")).await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }
}
