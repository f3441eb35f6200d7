use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Education,
    Experience,
    Projects,
    Skills,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Skills,
    ];

    pub fn not_found_text(&self) -> &'static str {
        match self {
            SectionKind::Education => "No education information found in the CV",
            SectionKind::Experience => "No work experience information found in the CV",
            SectionKind::Projects => "No projects information found in the CV",
            SectionKind::Skills => "No skills information found in the CV",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Education => "Education",
            SectionKind::Experience => "Work Experience",
            SectionKind::Projects => "Projects & Achievements",
            SectionKind::Skills => "Skills & Competencies",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionKind::Education => write!(f, "education"),
            SectionKind::Experience => write!(f, "experience"),
            SectionKind::Projects => write!(f, "projects"),
            SectionKind::Skills => write!(f, "skills"),
        }
    }
}

/// The four CV content buckets. Each field holds either a bullet list of
/// matched lines or the section's "not found" text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CvSectionMap {
    pub education: String,
    pub experience: String,
    pub projects: String,
    pub skills: String,
}

impl CvSectionMap {
    pub fn get(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Education => &self.education,
            SectionKind::Experience => &self.experience,
            SectionKind::Projects => &self.projects,
            SectionKind::Skills => &self.skills,
        }
    }

    pub fn set(&mut self, kind: SectionKind, content: String) {
        let slot = match kind {
            SectionKind::Education => &mut self.education,
            SectionKind::Experience => &mut self.experience,
            SectionKind::Projects => &mut self.projects,
            SectionKind::Skills => &mut self.skills,
        };
        *slot = content;
    }

    pub fn is_found(&self, kind: SectionKind) -> bool {
        self.get(kind) != kind.not_found_text()
    }
}

impl Default for CvSectionMap {
    fn default() -> Self {
        Self {
            education: SectionKind::Education.not_found_text().to_string(),
            experience: SectionKind::Experience.not_found_text().to_string(),
            projects: SectionKind::Projects.not_found_text().to_string(),
            skills: SectionKind::Skills.not_found_text().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map_has_sentinels() {
        let map = CvSectionMap::default();
        for kind in SectionKind::ALL {
            assert_eq!(map.get(kind), kind.not_found_text());
            assert!(!map.is_found(kind));
        }
    }

    #[test]
    fn test_serializes_with_four_fixed_keys() {
        let value = serde_json::to_value(CvSectionMap::default()).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 4);
        for kind in SectionKind::ALL {
            assert!(keys.contains(&kind.to_string()));
        }
    }
}
