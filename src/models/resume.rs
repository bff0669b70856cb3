use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Section kinds a resume can contain, in conventional order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Summary,
    Skills,
    Experience,
    Education,
    Certifications,
}

impl SectionType {
    /// Display heading for the resume view.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Certifications => "Certifications",
        }
    }
}

/// Section body: either free text or a list of items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SectionContent {
    Text(String),
    Items(Vec<String>),
}

/// One section of a generated resume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResumeSection {
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub content: SectionContent,
}

/// A generated resume.
///
/// Generation only ever appends; existing resumes are never mutated or
/// replaced in-session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resume {
    pub id: String,
    pub name: String,
    pub title: String,
    pub sections: Vec<ResumeSection>,
    pub created_at: DateTime<Utc>,
}

impl Resume {
    /// The canned resume produced by every generation.
    ///
    /// The id is a millisecond timestamp taken at generation time, matching
    /// the weak-uniqueness behavior of document ids.
    pub fn generated() -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            name: "Alex Chen".to_string(),
            title: "Data Analyst".to_string(),
            sections: vec![
                ResumeSection {
                    section_type: SectionType::Summary,
                    content: SectionContent::Text(
                        "Results-driven data analyst with 3+ years of experience..."
                            .to_string(),
                    ),
                },
                ResumeSection {
                    section_type: SectionType::Skills,
                    content: SectionContent::Items(vec![
                        "Python".to_string(),
                        "SQL".to_string(),
                        "Data Analysis".to_string(),
                        "Tableau".to_string(),
                        "Machine Learning".to_string(),
                    ]),
                },
                ResumeSection {
                    section_type: SectionType::Experience,
                    content: SectionContent::Text(
                        "Senior Data Analyst at Tech Corp (2021-Present)".to_string(),
                    ),
                },
                ResumeSection {
                    section_type: SectionType::Education,
                    content: SectionContent::Text(
                        "BS in Computer Science, Stanford University".to_string(),
                    ),
                },
            ],
            created_at: now,
        }
    }
}
