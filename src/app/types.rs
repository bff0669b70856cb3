//! Type definitions for the application state.
//!
//! Contains enums and structs used for tracking UI state:
//! - [`View`] - Which view is currently displayed
//! - [`AuthForm`] - Input state for the login/signup screen
//! - [`Notice`] - Transient status banner

use serde::{Deserialize, Serialize};

/// Which view is currently displayed.
///
/// Exactly one is active at a time. `Auth` is where a fresh (or logged-out)
/// session starts; the remaining six are reachable once a user exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Auth,
    Dashboard,
    Upload,
    Skills,
    Match,
    Resume,
    Insights,
}

impl View {
    /// Views shown in the navigation bar, in display order.
    pub const NAV_ITEMS: [View; 6] = [
        View::Dashboard,
        View::Upload,
        View::Skills,
        View::Match,
        View::Resume,
        View::Insights,
    ];

    /// Label for the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            View::Auth => "Sign In",
            View::Dashboard => "Dashboard",
            View::Upload => "Upload",
            View::Skills => "Skills",
            View::Match => "Match",
            View::Resume => "Resume",
            View::Insights => "Insights",
        }
    }

    /// Next navigable view (wraps around). `Auth` maps to the first item.
    pub fn next(self) -> View {
        match Self::NAV_ITEMS.iter().position(|v| *v == self) {
            Some(i) => Self::NAV_ITEMS[(i + 1) % Self::NAV_ITEMS.len()],
            None => Self::NAV_ITEMS[0],
        }
    }

    /// Previous navigable view (wraps around). `Auth` maps to the first item.
    pub fn prev(self) -> View {
        match Self::NAV_ITEMS.iter().position(|v| *v == self) {
            Some(i) => Self::NAV_ITEMS[(i + Self::NAV_ITEMS.len() - 1) % Self::NAV_ITEMS.len()],
            None => Self::NAV_ITEMS[0],
        }
    }
}

/// Which tab of the auth screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

/// Which auth input field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    Name,
    #[default]
    Email,
    Password,
}

/// Local input state for the auth screen.
///
/// Pure presentation-layer state; the store only ever sees the final strings
/// when the form is submitted.
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub tab: AuthTab,
    pub focus: AuthField,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AuthForm {
    /// Field cycle order for the active tab. Login has no name field.
    fn field_order(&self) -> &'static [AuthField] {
        match self.tab {
            AuthTab::Login => &[AuthField::Email, AuthField::Password],
            AuthTab::Signup => &[AuthField::Name, AuthField::Email, AuthField::Password],
        }
    }

    /// First field of the active tab.
    fn first_field(&self) -> AuthField {
        self.field_order()[0]
    }

    /// Move focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        let order = self.field_order();
        let i = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(i + 1) % order.len()];
    }

    /// Move focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        let order = self.field_order();
        let i = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(i + order.len() - 1) % order.len()];
    }

    /// Switch between the Login and Sign Up tabs, resetting focus.
    pub fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            AuthTab::Login => AuthTab::Signup,
            AuthTab::Signup => AuthTab::Login,
        };
        self.focus = self.first_field();
    }

    /// Append a character to the focused field.
    pub fn insert_char(&mut self, c: char) {
        self.focused_value_mut().push(c);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_value_mut().pop();
    }

    /// Clear all fields and reset focus (used on logout).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }
}

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A transient status banner shown under the navigation bar.
///
/// Cleared automatically a few seconds after being raised.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Tick count when the notice was raised (for expiry).
    pub raised_at_tick: u64,
}
