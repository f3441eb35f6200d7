use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::section_classifier::SectionClassifier;
use crate::config::AnalyzerConfig;
use crate::error::{Error, Result};
use crate::extract;
use crate::llm::parser::{parse_recommendations, parse_score_and_summary};
use crate::llm::prompts::{ATS_SCORE_PROMPT, IMPROVEMENT_RECOMMENDATIONS_PROMPT};
use crate::llm::{CompletionProvider, PromptVariables};
use crate::models::AnalysisResult;

const TRUNCATION_MARKER: &str = "... [truncated]";

pub struct AnalysisPipeline {
    llm: Arc<dyn CompletionProvider>,
    classifier: SectionClassifier,
    config: AnalyzerConfig,
}

impl AnalysisPipeline {
    pub fn new(llm: impl CompletionProvider + 'static, config: AnalyzerConfig) -> Self {
        Self::with_shared(Arc::new(llm), config)
    }

    pub fn with_shared(llm: Arc<dyn CompletionProvider>, config: AnalyzerConfig) -> Self {
        Self {
            llm,
            classifier: SectionClassifier::new(),
            config,
        }
    }

    pub fn model(&self) -> &str {
        self.llm.model()
    }

    /// Extracts the document's text and analyzes it. A document with no
    /// recoverable text is reported as [`Error::ExtractionEmpty`].
    pub async fn analyze_document(&self, path: &Path) -> Result<AnalysisResult> {
        tracing::info!("Extracting text from {}", path.display());
        let cv_text = extract::extract_text(path).await?;

        if cv_text.trim().is_empty() {
            return Err(Error::ExtractionEmpty(path.display().to_string()));
        }

        tracing::info!("Extracted {} characters", cv_text.chars().count());
        self.analyze_text(&cv_text).await
    }

    /// Scores the CV, asks for recommendations and buckets its lines.
    ///
    /// Only the model sees truncated text; section classification always
    /// runs on the full `cv_text`. Any model failure aborts the analysis.
    pub async fn analyze_text(&self, cv_text: &str) -> Result<AnalysisResult> {
        let variables = PromptVariables::new(truncate_for_prompt(cv_text, self.config.max_prompt_chars));

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(120));
        pb.set_message(format!("Analyzing CV with {}...", self.llm.model()));

        tracing::info!("Requesting ATS score and recommendations from {}", self.llm.name());
        let completions = futures::try_join!(
            self.llm.complete(ATS_SCORE_PROMPT, &variables),
            self.llm.complete(IMPROVEMENT_RECOMMENDATIONS_PROMPT, &variables),
        );
        pb.finish_and_clear();
        let (score_output, recommendations_output) = completions?;

        let score = parse_score_and_summary(&score_output);
        let recommendations = parse_recommendations(&recommendations_output);
        let sections = self.classifier.classify(cv_text);

        tracing::info!(
            "CV analysis completed: score {}, {} recommendations",
            score.score,
            recommendations.len()
        );

        Ok(AnalysisResult::new(score, &recommendations, sections))
    }
}

fn truncate_for_prompt(cv_text: &str, max_chars: usize) -> String {
    match cv_text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            tracing::debug!("CV text truncated to {} characters for the model", max_chars);
            format!("{}{}", &cv_text[..cut], TRUNCATION_MARKER)
        }
        None => cv_text.to_string(),
    }
}
