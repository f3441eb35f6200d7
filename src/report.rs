use std::path::Path;

use crate::error::Result;
use crate::models::{CvReport, SectionKind};

/// Renders a report as `json`, `markdown` or (anything else) plain text.
pub fn render(report: &CvReport, format: &str) -> Result<String> {
    let output = match format {
        "json" => serde_json::to_string_pretty(report)?,
        "markdown" => format_markdown(report),
        _ => format_text(report),
    };

    Ok(output)
}

/// Writes to `path`, or prints to stdout when no path is given.
pub fn write_output(output: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, output)?;
            tracing::info!("Output written to: {}", path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}

fn format_text(report: &CvReport) -> String {
    let analysis = &report.analysis;
    let mut output = String::new();

    output.push_str(&format!("\n=== CV Analysis: {} ===\n\n", report.file_name));
    output.push_str(&format!(
        "ATS Score: {}/100 ({})\n",
        analysis.score, report.band
    ));
    output.push_str(&format!("Overall CV Quality: {}\n\n", report.band.quality()));

    output.push_str("Executive Summary:\n");
    output.push_str(&format!("  {}\n", analysis.summary));

    output.push_str("\nRecommendations for Improvement:\n");
    for line in analysis.recommendations.lines().filter(|l| !l.trim().is_empty()) {
        output.push_str(&format!("  {}\n", line));
    }

    for kind in SectionKind::ALL {
        output.push_str(&format!("\n{}:\n", kind.title()));
        for line in analysis.sections.get(kind).lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }

    output.push_str(&format!(
        "\nModel: {}\nAnalyzed on: {}\n",
        report.model,
        report.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(report: &CvReport) -> String {
    let analysis = &report.analysis;
    let mut output = String::new();

    output.push_str(&format!("# CV Analysis: {}\n\n", report.file_name));

    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| ATS Score | {}/100 |\n", analysis.score));
    output.push_str(&format!("| Rating | {} |\n", report.band));
    output.push_str(&format!("| Quality | {} |\n", report.band.quality()));

    output.push_str("\n## Executive Summary\n\n");
    output.push_str(&format!("> {}\n", analysis.summary));

    output.push_str("\n## Recommendations for Improvement\n\n");
    for line in analysis.recommendations.lines().filter(|l| !l.trim().is_empty()) {
        output.push_str(&format!("{}\n", line));
    }

    output.push_str("\n## CV Sections\n");
    for kind in SectionKind::ALL {
        output.push_str(&format!("\n### {}\n\n", kind.title()));
        if analysis.sections.is_found(kind) {
            for line in analysis.sections.get(kind).lines() {
                output.push_str(&format!("- {}\n", line.trim_start_matches("• ")));
            }
        } else {
            output.push_str(&format!("*{}*\n", analysis.sections.get(kind)));
        }
    }

    output.push_str(&format!(
        "\n---\n*Analyzed with {} on {}*\n",
        report.model,
        report.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
