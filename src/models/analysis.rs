use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::section::CvSectionMap;

pub const SUMMARY_FALLBACK: &str = "Could not parse summary from model output.";
pub const RECOMMENDATIONS_FALLBACK: &str =
    "Model could not generate improvement recommendations for this CV.";
pub const MAX_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreResult {
    /// Passed through as found; out-of-range values are not clamped here.
    pub score: i64,
    pub summary: String,
}

impl Default for ScoreResult {
    fn default() -> Self {
        Self {
            score: 0,
            summary: SUMMARY_FALLBACK.to_string(),
        }
    }
}

/// Numbered recommendations ("1. ...", "2. ..."), between one and five
/// entries. Built only through [`RecommendationList::from_candidates`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationList(Vec<String>);

impl RecommendationList {
    /// Numbers the first five candidates in order. An empty candidate list
    /// degrades to the single fallback entry.
    pub fn from_candidates(candidates: Vec<String>) -> Self {
        if candidates.is_empty() {
            return Self(vec![RECOMMENDATIONS_FALLBACK.to_string()]);
        }

        let items = candidates
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .enumerate()
            .map(|(i, text)| format!("{}. {}", i + 1, text))
            .collect();

        Self(items)
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_text(&self) -> String {
        self.0.join("\n")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub score: i64,
    pub summary: String,
    /// Newline-joined [`RecommendationList`].
    pub recommendations: String,
    pub sections: CvSectionMap,
}

impl AnalysisResult {
    pub fn new(score: ScoreResult, recommendations: &RecommendationList, sections: CvSectionMap) -> Self {
        Self {
            score: score.score,
            summary: score.summary,
            recommendations: recommendations.to_text(),
            sections,
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s >= 80 => ScoreBand::Excellent,
            s if s >= 60 => ScoreBand::Good,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn quality(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "High",
            ScoreBand::Good => "Medium",
            ScoreBand::NeedsWork => "Low",
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::Excellent => write!(f, "Excellent"),
            ScoreBand::Good => write!(f, "Good"),
            ScoreBand::NeedsWork => write!(f, "Needs Work"),
        }
    }
}

/// What the CLI prints: the analysis plus where and when it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvReport {
    pub file_name: String,
    pub model: String,
    pub analysis_date: DateTime<Utc>,
    pub band: ScoreBand,
    pub analysis: AnalysisResult,
}

impl CvReport {
    pub fn new(file_name: String, model: String, analysis: AnalysisResult) -> Self {
        Self {
            file_name,
            model,
            analysis_date: Utc::now(),
            band: analysis.band(),
            analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations_are_renumbered_and_capped() {
        let candidates = (1..=7).map(|i| format!("Tip number {}", i)).collect();
        let list = RecommendationList::from_candidates(candidates);

        assert_eq!(list.len(), 5);
        assert_eq!(list.items()[0], "1. Tip number 1");
        assert_eq!(list.items()[4], "5. Tip number 5");
    }

    #[test]
    fn test_empty_candidates_fall_back() {
        let list = RecommendationList::from_candidates(Vec::new());
        assert_eq!(list.items(), &[RECOMMENDATIONS_FALLBACK.to_string()]);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(92), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(65), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::NeedsWork);
        assert_eq!(ScoreBand::NeedsWork.to_string(), "Needs Work");
        assert_eq!(ScoreBand::Good.quality(), "Medium");
    }
}
