use std::collections::HashMap;

use crate::models::section::{CvSectionMap, SectionKind};
use crate::taxonomy::SectionTaxonomy;

const BULLET: &str = "• ";

/// Buckets CV lines into sections by keyword. Each non-empty line goes to
/// at most one section; unmatched lines are dropped.
pub struct SectionClassifier {
    taxonomy: SectionTaxonomy,
}

impl SectionClassifier {
    pub fn new() -> Self {
        Self::with_taxonomy(SectionTaxonomy::new())
    }

    pub fn with_taxonomy(taxonomy: SectionTaxonomy) -> Self {
        Self { taxonomy }
    }

    pub fn classify(&self, cv_text: &str) -> CvSectionMap {
        let mut buckets: HashMap<SectionKind, Vec<&str>> = HashMap::new();

        for line in cv_text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(kind) = self.taxonomy.classify(line) {
                buckets.entry(kind).or_default().push(line);
            }
        }

        let mut sections = CvSectionMap::default();
        for (kind, lines) in buckets {
            let cap = self.taxonomy.max_lines(kind);
            sections.set(kind, format_bullets(&lines[..cap.min(lines.len())]));
        }

        tracing::debug!(
            "Classified sections: {}",
            SectionKind::ALL
                .iter()
                .filter(|k| sections.is_found(**k))
                .map(|k| k.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        sections
    }
}

impl Default for SectionClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn format_bullets(lines: &[&str]) -> String {
    format!("{}{}", BULLET, lines.join(&format!("\n{}", BULLET)))
}
