//! Message handling for the App.

use tracing::{debug, info};

use crate::models::{DocumentStatus, Skill};

use super::{App, AppMessage, NoticeKind, View};

impl App {
    /// Apply a delayed completion to the session state.
    ///
    /// All message handlers mark the app as dirty since they update visible
    /// state. Messages are applied unconditionally: there is no cancellation,
    /// so a completion scheduled before a logout still mutates the fresh
    /// session when it arrives.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::AuthCompleted { user } => {
                info!("authenticated as {} <{}>", user.name, user.email);
                self.user = Some(user);
                self.current_view = View::Dashboard;
                self.is_loading = false;
            }
            AppMessage::DocumentProcessed { document_id } => {
                match self
                    .documents
                    .iter_mut()
                    .find(|d| d.id == document_id)
                {
                    Some(doc) => {
                        doc.status = DocumentStatus::Completed;
                        info!("document {} completed", document_id);
                    }
                    // The document can be gone after a logout; the skill
                    // append below still happens regardless.
                    None => debug!("document {} no longer in session", document_id),
                }
                self.skills.extend(Skill::extraction_batch());
            }
            AppMessage::MatchAnalyzed { job_match } => {
                info!("job match analyzed, score {}", job_match.score);
                self.job_match = Some(job_match);
                self.is_loading = false;
                self.raise_notice(NoticeKind::Success, "Analysis complete!");
            }
            AppMessage::ResumeGenerated { resume } => {
                info!("resume {} generated", resume.id);
                self.resumes.push(resume);
                self.is_loading = false;
                self.raise_notice(NoticeKind::Success, "Resume generated successfully!");
            }
        }
    }
}
