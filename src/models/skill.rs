use serde::{Deserialize, Serialize};

/// Broad grouping used by the skills view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Domain,
}

impl SkillCategory {
    /// Display label for the skills view headings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Soft => "Soft Skills",
            Self::Domain => "Domain",
        }
    }
}

/// A skill "extracted" from a processed document.
///
/// Skills accumulate without bound and are never deduplicated: uploading the
/// same document twice yields the batch twice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    /// Extraction confidence, 0-100.
    pub confidence: u8,
    pub category: SkillCategory,
}

impl Skill {
    pub fn new(name: &str, confidence: u8, category: SkillCategory) -> Self {
        Self {
            name: name.to_string(),
            confidence,
            category,
        }
    }

    /// The fixed batch appended each time a document finishes processing.
    ///
    /// Stands in for an extraction model that does not exist in this build;
    /// the document content never influences it.
    pub fn extraction_batch() -> Vec<Skill> {
        vec![
            Skill::new("Data Analysis", 94, SkillCategory::Technical),
            Skill::new("Python", 91, SkillCategory::Technical),
            Skill::new("Project Management", 88, SkillCategory::Soft),
            Skill::new("Technical Writing", 85, SkillCategory::Soft),
            Skill::new("User Research", 82, SkillCategory::Domain),
            Skill::new("SQL", 79, SkillCategory::Technical),
        ]
    }
}
