use crate::models::section::SectionKind;

/// One row of the classification table: a section, the lowercase substrings
/// that claim a line for it, and how many lines it keeps.
#[derive(Debug, Clone)]
pub struct SectionRule {
    pub kind: SectionKind,
    pub keywords: Vec<String>,
    pub max_lines: usize,
}

impl SectionRule {
    pub fn matches(&self, lowercase_line: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowercase_line.contains(keyword.as_str()))
    }
}

/// Ordered keyword table. Rules are checked top to bottom and the first
/// match owns the line.
#[derive(Debug, Clone)]
pub struct SectionTaxonomy {
    rules: Vec<SectionRule>,
}

impl SectionTaxonomy {
    pub fn new() -> Self {
        let mut taxonomy = Self { rules: Vec::new() };

        taxonomy.add_rule(
            SectionKind::Education,
            &[
                "university", "college", "degree", "bachelor", "master", "phd", "gpa",
                "education", "faculty",
            ],
            6,
        );
        taxonomy.add_rule(
            SectionKind::Experience,
            &[
                "experience", "work", "employment", "intern", "engineer", "developer",
                "analyst", "manager", "position", "role",
            ],
            6,
        );
        taxonomy.add_rule(
            SectionKind::Projects,
            &[
                "project", "developed", "created", "built", "implemented", "system",
                "application", "portfolio",
            ],
            6,
        );
        taxonomy.add_rule(
            SectionKind::Skills,
            &[
                "skill", "python", "java", "sql", "machine learning", "deep learning",
                "computer vision", "nlp", "tensorflow", "pytorch", "programming", "framework",
            ],
            8,
        );

        taxonomy
    }

    /// Appends a rule at the lowest priority.
    pub fn add_rule(&mut self, kind: SectionKind, keywords: &[&str], max_lines: usize) {
        self.rules.push(SectionRule {
            kind,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            max_lines,
        });
    }

    pub fn rules(&self) -> &[SectionRule] {
        &self.rules
    }

    pub fn classify(&self, line: &str) -> Option<SectionKind> {
        let lower = line.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lower))
            .map(|rule| rule.kind)
    }

    pub fn max_lines(&self, kind: SectionKind) -> usize {
        self.rules
            .iter()
            .find(|rule| rule.kind == kind)
            .map(|rule| rule.max_lines)
            .unwrap_or(0)
    }
}

impl Default for SectionTaxonomy {
    fn default() -> Self {
        Self::new()
    }
}
