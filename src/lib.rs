//! CareerBridge TUI - a terminal client demo for the CareerBridge AI
//! resume and job-matching product.
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;
