//! Color theme constants for the CareerBridge UI
//!
//! Terminal rendition of the product's cyan/violet dark palette.

use ratatui::style::Color;

/// Primary border color - dark gray for the minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - the product's cyan
pub const COLOR_ACCENT: Color = Color::Cyan;

/// Header text color - white for the logo and headings
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Secondary accent - violet, used for category headings
pub const COLOR_VIOLET: Color = Color::Rgb(139, 92, 246);

/// Completed / success state - green
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Error / missing state - red
pub const COLOR_ERROR: Color = Color::Red;

/// Processing / in-flight state - cyan
pub const COLOR_PROCESSING: Color = Color::Cyan;

/// Confidence / progress bar fill
pub const COLOR_PROGRESS: Color = Color::Cyan;
