use serde::{Deserialize, Serialize};

/// Result of analyzing a job description against the user's profile.
///
/// At most one exists at a time; each analysis fully replaces the previous
/// result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobMatch {
    /// Overall match score, 0-100.
    pub score: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

impl JobMatch {
    /// The canned analysis result.
    ///
    /// The job description text never influences it in this build; the stub
    /// stands in for a matching backend that does not exist yet.
    pub fn canned() -> Self {
        Self {
            score: 87,
            matched_skills: vec![
                "Python".to_string(),
                "Data Analysis".to_string(),
                "SQL".to_string(),
                "Project Management".to_string(),
            ],
            missing_skills: vec![
                "Kubernetes".to_string(),
                "Go".to_string(),
                "Terraform".to_string(),
            ],
            recommendations: vec![
                "Add cloud platform experience".to_string(),
                "Highlight leadership in projects".to_string(),
                "Include metrics in bullet points".to_string(),
            ],
        }
    }

    /// Verdict label shown next to the score.
    pub fn verdict(&self) -> &'static str {
        if self.score >= 80 {
            "Strong Match"
        } else if self.score >= 60 {
            "Good Match"
        } else {
            "Needs Work"
        }
    }
}
