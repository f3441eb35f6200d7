//! Turns free-form model completions into structured values.
//!
//! Every function here is total: malformed or empty completions produce the
//! documented fallback values instead of an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::analysis::{RecommendationList, ScoreResult};

/// Tried in order; the first one that matches and yields an integer wins.
const SCORE_PATTERNS: &[&str] = &[
    r"(?i)SCORE:\s*(\d+)",
    r"(?i)Score:\s*(\d+)",
    r"(?i)ATS Score:\s*(\d+)",
    r"(?i)(\d+)\s*/\s*100",
];

/// Tried in order. The first two stop at the next known label; the last
/// takes everything after `SUMMARY:`.
const SUMMARY_PATTERNS: &[&str] = &[
    r"(?is)SUMMARY:\s*(.*?)(?:CRITERIA:|KEYWORDS:|SCORE:|$)",
    r"(?is)Summary:\s*(.*?)(?:CRITERIA:|KEYWORDS:|SCORE:|$)",
    r"(?is)SUMMARY:\s*(.*)",
];

static SCORE_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| compile_all(SCORE_PATTERNS));
static SUMMARY_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| compile_all(SUMMARY_PATTERNS));

static THINK_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("valid think block pattern"));
static THINK_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?think>").expect("valid think tag pattern"));

static ASTERISKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*+").expect("valid asterisk pattern"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("valid italic pattern"));

// "1." / "-" / "*" at the start of a trimmed line
static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+\.|-|\*)\s*(.*)$").expect("valid list marker pattern"));
static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]").expect("valid sentence pattern"));

const MIN_ITEM_CHARS: usize = 3;
const MIN_SENTENCE_CHARS: usize = 8;
const MIN_SENTENCE_FALLBACK_CHARS: usize = 20;

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid parser pattern"))
        .collect()
}

/// Removes `<think>...</think>` spans (across lines) and any stray
/// `<think>`/`</think>` tags.
pub fn strip_thinking(text: &str) -> String {
    let without_blocks = THINK_BLOCK.replace_all(text, "");
    THINK_TAG.replace_all(&without_blocks, "").into_owned()
}

pub fn parse_score_and_summary(output: &str) -> ScoreResult {
    let clean = strip_thinking(output);
    let mut result = ScoreResult::default();

    match extract_score(&clean) {
        Some(score) => result.score = score,
        None => tracing::warn!("No score found in model output, defaulting to 0"),
    }

    match extract_summary(&clean) {
        Some(summary) => result.summary = summary,
        None => tracing::warn!("No summary found in model output"),
    }

    result
}

fn extract_score(text: &str) -> Option<i64> {
    SCORE_REGEXES.iter().find_map(|re| {
        re.captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<i64>().ok())
    })
}

fn extract_summary(text: &str) -> Option<String> {
    let raw = SUMMARY_REGEXES
        .iter()
        .find_map(|re| re.captures(text).and_then(|caps| caps.get(1)))?;

    let without_emphasis = ASTERISKS.replace_all(raw.as_str().trim(), "");
    Some(
        WHITESPACE_RUN
            .replace_all(&without_emphasis, " ")
            .trim()
            .to_string(),
    )
}

pub fn parse_recommendations(output: &str) -> RecommendationList {
    let clean = strip_emphasis(&strip_thinking(output));
    let clean = clean.trim();

    let mut candidates = list_items(clean);

    if candidates.is_empty() && clean.chars().count() > MIN_SENTENCE_FALLBACK_CHARS {
        tracing::debug!("No list markers in recommendations, splitting into sentences");
        candidates = sentences(clean);
    }

    if candidates.is_empty() {
        tracing::warn!("Could not extract any recommendations from model output");
    }

    RecommendationList::from_candidates(candidates)
}

fn strip_emphasis(text: &str) -> String {
    let unbolded = BOLD.replace_all(text, "$1");
    ITALIC.replace_all(&unbolded, "$1").into_owned()
}

fn list_items(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| LIST_MARKER.captures(line.trim()))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().trim().to_string()))
        .filter(|item| item.chars().count() > MIN_ITEM_CHARS)
        .collect()
}

fn sentences(text: &str) -> Vec<String> {
    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::{RECOMMENDATIONS_FALLBACK, SUMMARY_FALLBACK};

    #[test]
    fn test_parse_score_and_summary() {
        let result =
            parse_score_and_summary("SCORE: 72\nSUMMARY: Strong action verbs, weak quantification.");
        assert_eq!(result.score, 72);
        assert_eq!(result.summary, "Strong action verbs, weak quantification.");
    }

    #[test]
    fn test_think_block_is_stripped() {
        let input = "<think>\nSCORE: 99\nSUMMARY: internal draft\n</think>\nSCORE: 64\nSUMMARY: Clear layout.";
        let result = parse_score_and_summary(input);

        assert_eq!(result.score, 64);
        assert_eq!(result.summary, "Clear layout.");
        assert!(!result.summary.contains("internal draft"));
    }

    #[test]
    fn test_stray_think_tags_removed() {
        assert_eq!(strip_thinking("</think>SCORE: 5"), "SCORE: 5");
        assert_eq!(strip_thinking("a<think>b"), "ab");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let result = parse_score_and_summary("The CV looks fine overall.");
        assert_eq!(result.score, 0);
        assert_eq!(result.summary, SUMMARY_FALLBACK);

        let result = parse_score_and_summary("");
        assert_eq!(result, ScoreResult::default());
    }

    #[test]
    fn test_score_label_is_case_insensitive() {
        assert_eq!(parse_score_and_summary("score:   81").score, 81);
        assert_eq!(parse_score_and_summary("ATS Score: 55").score, 55);
    }

    #[test]
    fn test_fraction_score() {
        let result = parse_score_and_summary("I would rate this CV 68 / 100 overall.");
        assert_eq!(result.score, 68);
    }

    #[test]
    fn test_label_takes_priority_over_fraction() {
        let result = parse_score_and_summary("Roughly 40/100 before edits.\nSCORE: 77");
        assert_eq!(result.score, 77);
    }

    #[test]
    fn test_out_of_range_score_passes_through() {
        assert_eq!(parse_score_and_summary("SCORE: 140").score, 140);
    }

    #[test]
    fn test_overflowing_score_falls_through_to_next_pattern() {
        let result = parse_score_and_summary("SCORE: 99999999999999999999999 and 45/100");
        assert_eq!(result.score, 45);

        assert_eq!(parse_score_and_summary("SCORE: 99999999999999999999999").score, 0);
    }

    #[test]
    fn test_summary_stops_at_next_label() {
        let input = "SUMMARY: Good **structure** and\n   clear   dates.\nKEYWORDS: rust, sql\nSCORE: 70";
        let result = parse_score_and_summary(input);

        assert_eq!(result.summary, "Good structure and clear dates.");
        assert_eq!(result.score, 70);
    }

    #[test]
    fn test_summary_before_score() {
        let result = parse_score_and_summary("Summary: Needs metrics.\nSCORE: 58");
        assert_eq!(result.summary, "Needs metrics.");
        assert_eq!(result.score, 58);
    }

    #[test]
    fn test_recommendations_capped_at_five() {
        let input = "1. Add metrics\n2. Use keywords\n3. Quantify impact\n4. Fix formatting\n5. Add summary\n6. Extra line";
        let list = parse_recommendations(input);

        assert_eq!(
            list.items(),
            &[
                "1. Add metrics",
                "2. Use keywords",
                "3. Quantify impact",
                "4. Fix formatting",
                "5. Add summary",
            ]
        );
    }

    #[test]
    fn test_recommendations_renumbered_from_bullets() {
        let input = "<think>plan the answer</think>\nHere you go:\n- **Add** a summary\n- Use *action* verbs\n* Remove photo\n12. Link portfolio\n- ok";
        let list = parse_recommendations(input);

        assert_eq!(
            list.items(),
            &[
                "1. Add a summary",
                "2. Use action verbs",
                "3. Remove photo",
                "4. Link portfolio",
            ]
        );
    }

    #[test]
    fn test_recommendations_sentence_fallback() {
        let input = "Quantify every achievement. Mirror keywords from the posting! Why not add a GitHub link? Ok.";
        let list = parse_recommendations(input);

        assert_eq!(
            list.items(),
            &[
                "1. Quantify every achievement",
                "2. Mirror keywords from the posting",
                "3. Why not add a GitHub link",
            ]
        );
    }

    #[test]
    fn test_recommendations_fallback_sentinel() {
        for input in ["", "<think>nothing useful</think>", "Too short."] {
            let list = parse_recommendations(input);
            assert_eq!(list.items(), &[RECOMMENDATIONS_FALLBACK.to_string()]);
        }
    }

    #[test]
    fn test_recommendations_length_bounds() {
        let inputs = [
            "",
            "1. a\n2. b",
            "1. First tip here\n2. Second tip here",
            "x. y. z. This is a long sentence here. And another long one.",
        ];
        for input in inputs {
            let len = parse_recommendations(input).len();
            assert!((1..=5).contains(&len), "{} items for {:?}", len, input);
        }
    }
}
