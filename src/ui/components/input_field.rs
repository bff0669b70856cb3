//! Input Field Component
//!
//! A single-line text input with focus handling, password masking, and
//! placeholder text. Used by the auth, upload, and match views.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Whether to mask the value (for passwords)
    pub is_password: bool,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    /// Create a new input field configuration
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            is_password: false,
            placeholder: None,
        }
    }

    /// Set whether the input is focused
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set whether to mask the value (for passwords)
    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    /// Set placeholder text
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows consumed by one input field: label (1) + bordered box (3).
pub const INPUT_FIELD_HEIGHT: u16 = 4;

/// Render an input field with label and bordered input box.
///
/// Returns the height consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let label_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );

    let input_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: 3,
    };

    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let showing_placeholder = config.value.is_empty() && config.placeholder.is_some();
    let mut content = if config.is_password {
        "\u{2022}".repeat(config.value.chars().count())
    } else if showing_placeholder {
        config.placeholder.unwrap_or_default().to_string()
    } else {
        config.value.to_string()
    };

    let text_style = if showing_placeholder || !config.focused {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(Color::White)
    };

    if config.focused {
        content.push('\u{2588}'); // Block cursor
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(content, text_style))).block(block),
        input_area,
    );

    INPUT_FIELD_HEIGHT
}
