//! Navigation methods for the App.

use super::{App, View};

impl App {
    /// Set the current view directly.
    ///
    /// Deliberately unguarded: any view is reachable from any view, even
    /// before a user exists. Gating unauthenticated users to the auth screen
    /// is the presentation layer's job.
    pub fn set_current_view(&mut self, view: View) {
        self.current_view = view;
        self.mark_dirty();
    }

    /// Cycle to the next navigation bar view.
    pub fn next_view(&mut self) {
        self.set_current_view(self.current_view.next());
    }

    /// Cycle to the previous navigation bar view.
    pub fn prev_view(&mut self) {
        self.set_current_view(self.current_view.prev());
    }

    /// Move the resume list selection up.
    pub fn select_prev_resume(&mut self) {
        if self.resume_index > 0 {
            self.resume_index -= 1;
            self.mark_dirty();
        }
    }

    /// Move the resume list selection down.
    pub fn select_next_resume(&mut self) {
        if !self.resumes.is_empty() && self.resume_index < self.resumes.len() - 1 {
            self.resume_index += 1;
            self.mark_dirty();
        }
    }
}
