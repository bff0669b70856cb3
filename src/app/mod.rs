//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`View`] - Which view is currently displayed
//! - [`AuthForm`] - Local input state for the auth screen
//! - [`AppMessage`] - Messages for async communication
//!
//! `App` is the view-model: it owns every piece of mutable session state and
//! exposes the operations that mutate it. Operations with a simulated delay
//! spawn a sleeping task that posts an [`AppMessage`] back over the app
//! channel; the event loop applies it via [`App::handle_message`].

mod actions;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{AuthField, AuthForm, AuthTab, Notice, NoticeKind, View};

use tokio::sync::mpsc;

use crate::models::{JobMatch, Resume, Skill, UploadedDocument, User};

/// How many ticks a notice stays visible (~3s at the 16ms tick rate).
const NOTICE_TICKS: u64 = 190;

/// Main application state.
///
/// Session entities live here and nowhere else; the presentation layer reads
/// snapshots and calls the operation methods, never mutating fields directly.
pub struct App {
    /// The signed-in user; `None` while on the auth screen.
    pub user: Option<User>,
    /// Which view is currently displayed.
    pub current_view: View,
    /// Uploaded documents, in upload order. Never removed in-session.
    pub documents: Vec<UploadedDocument>,
    /// Accumulated extracted skills. Appended per completed upload, never
    /// deduplicated.
    pub skills: Vec<Skill>,
    /// The latest job analysis, replaced wholesale by each analysis.
    pub job_match: Option<JobMatch>,
    /// Generated resumes, in generation order.
    pub resumes: Vec<Resume>,
    /// Single shared loading flag. Two overlapping delayed operations share
    /// it and the earliest completion wins the reset.
    pub is_loading: bool,
    /// Flag to track if the app should quit.
    pub should_quit: bool,
    /// Tick counter for animations (spinner, notice expiry).
    pub tick_count: u64,
    /// Dirty flag: when true, the UI needs to be redrawn.
    pub needs_redraw: bool,
    /// Receiver for async messages (delayed completions).
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (cloned into delayed tasks).
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Transient status banner, cleared automatically after a few seconds.
    pub notice: Option<Notice>,
    /// Auth screen input state.
    pub auth_form: AuthForm,
    /// Path typed into the upload view's file entry.
    pub upload_path: String,
    /// Text typed into the match view's job description field.
    pub job_description: String,
    /// Selected index in the resume list.
    pub resume_index: usize,
}

impl App {
    /// Create a fresh, unauthenticated App.
    pub fn new() -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            user: None,
            current_view: View::default(),
            documents: Vec::new(),
            skills: Vec::new(),
            job_match: None,
            resumes: Vec::new(),
            is_loading: false,
            should_quit: false,
            tick_count: 0,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            notice: None,
            auth_form: AuthForm::default(),
            upload_path: String::new(),
            job_description: String::new(),
            resume_index: 0,
        }
    }

    /// Advance the animation tick and expire stale notices.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if let Some(notice) = &self.notice {
            if self.tick_count.wrapping_sub(notice.raised_at_tick) >= NOTICE_TICKS {
                self.notice = None;
                self.mark_dirty();
            }
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Mark the app to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Raise a transient notice, replacing any existing one.
    pub fn raise_notice(&mut self, kind: NoticeKind, message: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            message: message.into(),
            raised_at_tick: self.tick_count,
        });
        self.mark_dirty();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_is_unauthenticated() {
        let app = App::new();
        assert!(app.user.is_none());
        assert_eq!(app.current_view, View::Auth);
        assert!(app.documents.is_empty());
        assert!(app.skills.is_empty());
        assert!(app.job_match.is_none());
        assert!(app.resumes.is_empty());
        assert!(!app.is_loading);
    }

    #[test]
    fn test_new_app_starts_dirty() {
        let app = App::new();
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_tick_increments_counter() {
        let mut app = App::new();
        app.tick();
        app.tick();
        assert_eq!(app.tick_count, 2);
    }

    #[test]
    fn test_notice_expires_after_notice_ticks() {
        let mut app = App::new();
        app.raise_notice(NoticeKind::Info, "hello");
        assert!(app.notice.is_some());
        for _ in 0..NOTICE_TICKS {
            app.tick();
        }
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_raise_notice_replaces_previous() {
        let mut app = App::new();
        app.raise_notice(NoticeKind::Info, "first");
        app.raise_notice(NoticeKind::Error, "second");
        let notice = app.notice.expect("notice should be set");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "second");
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = App::new();
        assert!(!app.should_quit);
        app.quit();
        assert!(app.should_quit);
    }
}
