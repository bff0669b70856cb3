//! AppMessage enum for async communication within the application.

use crate::models::{JobMatch, Resume, User};

/// Messages posted back by the simulated-delay tasks.
///
/// Every "asynchronous" store operation spawns a task that sleeps for its
/// fixed delay and then sends one of these over the app channel; the event
/// loop feeds them into [`App::handle_message`](crate::app::App::handle_message).
/// There is no cancellation: a message fired before a logout still lands
/// afterwards.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Login or signup finished; the fabricated session user is ready.
    AuthCompleted { user: User },
    /// A document finished processing. Flips its status to completed and
    /// appends the fixed skill batch.
    DocumentProcessed { document_id: String },
    /// Job analysis finished with the canned result.
    MatchAnalyzed { job_match: JobMatch },
    /// Resume generation finished.
    ResumeGenerated { resume: Resume },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_completed_construction() {
        let msg = AppMessage::AuthCompleted {
            user: User::from_email("a@b.edu"),
        };
        let cloned = msg.clone();
        match cloned {
            AppMessage::AuthCompleted { user } => assert_eq!(user.name, "a"),
            _ => panic!("Expected AuthCompleted variant"),
        }
    }

    #[test]
    fn test_document_processed_construction() {
        let msg = AppMessage::DocumentProcessed {
            document_id: "1700000000000".to_string(),
        };
        match msg {
            AppMessage::DocumentProcessed { document_id } => {
                assert_eq!(document_id, "1700000000000");
            }
            _ => panic!("Expected DocumentProcessed variant"),
        }
    }

    #[test]
    fn test_all_variants_debug() {
        let msgs = vec![
            AppMessage::AuthCompleted {
                user: User::with_name("a@b.edu", "Alex"),
            },
            AppMessage::DocumentProcessed {
                document_id: "1".to_string(),
            },
            AppMessage::MatchAnalyzed {
                job_match: JobMatch::canned(),
            },
            AppMessage::ResumeGenerated {
                resume: Resume::generated(),
            },
        ];
        for msg in msgs {
            let _ = format!("{:?}", msg);
        }
    }
}
