//! UI rendering for the CareerBridge TUI
//!
//! Terminal rendition of the product layout:
//! - Auth screen (full-screen while no user exists)
//! - Navigation bar with the six signed-in views
//! - Notice line (transient status banner)
//! - One body renderer per view
//! - Footer with contextual keybind hints
//!
//! The UI is a pure consumer of [`App`]: it reads the current snapshot and
//! never mutates state.

mod auth;
pub mod components;
mod dashboard;
mod helpers;
mod insights;
mod match_view;
mod nav_bar;
mod resume_view;
mod skills;
mod theme;
mod upload;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_INPUT_BG,
    COLOR_PROCESSING, COLOR_PROGRESS, COLOR_SUCCESS, COLOR_VIOLET,
};

// Re-export helper functions for external use
pub use helpers::{format_size, percent_bar, spinner_frame, truncate_string};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, View};

/// Render the UI based on the current app snapshot.
///
/// Unauthenticated sessions always see the auth screen, regardless of
/// `current_view` - that gate lives here, not in the store.
pub fn render(frame: &mut Frame, app: &App) {
    if app.user.is_none() {
        auth::render_auth_screen(frame, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation bar
            Constraint::Length(1), // Notice line
            Constraint::Min(5),    // View body
            Constraint::Length(1), // Keybind hints
        ])
        .split(frame.area());

    nav_bar::render_nav_bar(frame, app, chunks[0]);
    nav_bar::render_notice_line(frame, app, chunks[1]);

    match app.current_view {
        // A user exists, so the auth view has nothing to show; the store
        // deliberately accepts the transition anyway.
        View::Auth => {}
        View::Dashboard => dashboard::render_dashboard(frame, app, chunks[2]),
        View::Upload => upload::render_upload(frame, app, chunks[2]),
        View::Skills => skills::render_skills(frame, app, chunks[2]),
        View::Match => match_view::render_match(frame, app, chunks[2]),
        View::Resume => resume_view::render_resume(frame, app, chunks[2]),
        View::Insights => insights::render_insights(frame, app, chunks[2]),
    }

    nav_bar::render_hints(frame, app, chunks[3]);
}
