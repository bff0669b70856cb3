//! Store operations for the App.
//!
//! These are the seven actions the presentation layer can invoke. The
//! delayed parts are simulated: each spawns a task that sleeps for a fixed
//! duration and posts an [`AppMessage`] back to the event loop. None of them
//! can fail and none return a result; state is observed via subsequent reads.

use std::time::Duration;

use tracing::info;

use crate::models::{JobMatch, Resume, UploadedDocument, User};

use super::{App, AppMessage, AuthForm, View};

/// Simulated backend latency for login and signup.
const AUTH_DELAY: Duration = Duration::from_millis(1000);
/// Simulated processing time for an uploaded document.
const PROCESSING_DELAY: Duration = Duration::from_millis(2000);
/// Simulated analysis time for a job match.
const ANALYSIS_DELAY: Duration = Duration::from_millis(1500);
/// Simulated generation time for a resume.
const GENERATION_DELAY: Duration = Duration::from_millis(2000);

impl App {
    /// Start a login. Always "succeeds" after [`AUTH_DELAY`]: no credential
    /// check happens and the password is ignored.
    pub fn login(&mut self, email: &str, _password: &str) {
        info!("login requested for {}", email);
        self.is_loading = true;
        self.mark_dirty();

        let user = User::from_email(email);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(AUTH_DELAY).await;
            let _ = tx.send(AppMessage::AuthCompleted { user });
        });
    }

    /// Start a signup. Same shape as [`App::login`] but the supplied name is
    /// used verbatim. No uniqueness or format check.
    pub fn signup(&mut self, email: &str, _password: &str, name: &str) {
        info!("signup requested for {}", email);
        self.is_loading = true;
        self.mark_dirty();

        let user = User::with_name(email, name);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(AUTH_DELAY).await;
            let _ = tx.send(AppMessage::AuthCompleted { user });
        });
    }

    /// Synchronous full session wipe.
    ///
    /// Does NOT cancel in-flight delayed tasks: a completion scheduled before
    /// the logout still lands in the fresh session when its timer fires.
    pub fn logout(&mut self) {
        info!("logout");
        self.user = None;
        self.current_view = View::Auth;
        self.documents.clear();
        self.skills.clear();
        self.job_match = None;
        self.resumes.clear();
        self.is_loading = false;
        self.notice = None;
        self.auth_form = AuthForm::default();
        self.upload_path.clear();
        self.job_description.clear();
        self.resume_index = 0;
        self.mark_dirty();
    }

    /// Record an upload and schedule its processing.
    ///
    /// Appends a `Processing` document immediately; after
    /// [`PROCESSING_DELAY`] the document flips to completed and the fixed
    /// skill batch is appended. Does not touch the shared loading flag.
    /// Only the filename and size are used - no file content is read
    /// anywhere.
    pub fn upload_document(&mut self, name: &str, size: u64) {
        let doc = UploadedDocument::new(name, size);
        info!("upload {} ({} bytes) as {:?}", name, size, doc.doc_type);
        let document_id = doc.id.clone();
        self.documents.push(doc);
        self.mark_dirty();

        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(PROCESSING_DELAY).await;
            let _ = tx.send(AppMessage::DocumentProcessed { document_id });
        });
    }

    /// Start a job-match analysis.
    ///
    /// The description text is accepted but never inspected: after
    /// [`ANALYSIS_DELAY`] the canned result replaces any previous match.
    pub fn analyze_job_match(&mut self, job_description: &str) {
        info!("analyze job match ({} chars)", job_description.len());
        self.is_loading = true;
        self.mark_dirty();

        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ANALYSIS_DELAY).await;
            let _ = tx.send(AppMessage::MatchAnalyzed {
                job_match: JobMatch::canned(),
            });
        });
    }

    /// Start resume generation. Appends one canned resume after
    /// [`GENERATION_DELAY`]; existing resumes are never touched.
    pub fn generate_resume(&mut self) {
        info!("generate resume");
        self.is_loading = true;
        self.mark_dirty();

        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(GENERATION_DELAY).await;
            let _ = tx.send(AppMessage::ResumeGenerated {
                resume: Resume::generated(),
            });
        });
    }
}
