use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of uploaded document, inferred from the filename alone.
///
/// No file content is ever read; classification stands in for a document
/// parser that does not exist in this build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Transcript,
    Project,
    Certificate,
}

impl DocumentType {
    /// Classify a document by filename substring.
    pub fn classify(name: &str) -> Self {
        if name.contains("transcript") {
            Self::Transcript
        } else if name.contains("cert") {
            Self::Certificate
        } else {
            Self::Project
        }
    }

    /// Display label for the document list.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Transcript => "Transcript",
            Self::Project => "Project",
            Self::Certificate => "Certificate",
        }
    }
}

/// Processing status of an uploaded document.
///
/// `Error` is part of the shape but no code path produces it: oversized files
/// are dropped by the upload surface before a document is ever created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

/// A document the user has uploaded this session.
///
/// Documents are appended in upload order and never removed in-session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedDocument {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    /// Size in bytes, as reported by the upload surface.
    pub size: u64,
    pub uploaded_at: DateTime<Utc>,
    pub status: DocumentStatus,
}

impl UploadedDocument {
    /// Create a new document in the `Processing` state.
    ///
    /// The id is the current timestamp in milliseconds: unique enough for a
    /// session, not collision-proof across rapid calls.
    pub fn new(name: &str, size: u64) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            name: name.to_string(),
            doc_type: DocumentType::classify(name),
            size,
            uploaded_at: now,
            status: DocumentStatus::Processing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_transcript() {
        assert_eq!(
            DocumentType::classify("fall_transcript.pdf"),
            DocumentType::Transcript
        );
    }

    #[test]
    fn test_classify_certificate() {
        assert_eq!(
            DocumentType::classify("aws_certificate.png"),
            DocumentType::Certificate
        );
        // "cert" substring alone is enough
        assert_eq!(
            DocumentType::classify("my_cert.pdf"),
            DocumentType::Certificate
        );
    }

    #[test]
    fn test_classify_defaults_to_project() {
        assert_eq!(
            DocumentType::classify("capstone_report.docx"),
            DocumentType::Project
        );
    }

    #[test]
    fn test_classify_transcript_wins_over_cert() {
        // "transcript" is checked first
        assert_eq!(
            DocumentType::classify("transcript_cert.pdf"),
            DocumentType::Transcript
        );
    }

    #[test]
    fn test_new_document_starts_processing() {
        let doc = UploadedDocument::new("thesis.pdf", 4096);
        assert_eq!(doc.status, DocumentStatus::Processing);
        assert_eq!(doc.doc_type, DocumentType::Project);
        assert_eq!(doc.size, 4096);
        assert!(!doc.id.is_empty());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&DocumentStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
    }
}
