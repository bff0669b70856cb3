//! Auth screen rendering: login and signup tabs.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, AuthField, AuthTab};

use super::components::{render_input_field, InputFieldConfig};
use super::helpers::{centered_rect, spinner_frame};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// ASCII wordmark shown above the auth card.
pub const CAREERBRIDGE_LOGO: &[&str] = &[
    " ██████╗██████╗ ",
    "██╔════╝██╔══██╗",
    "██║     ██████╔╝",
    "██║     ██╔══██╗",
    "╚██████╗██████╔╝",
    " ╚═════╝╚═════╝ ",
];

pub fn render_auth_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer_block, area);

    let form = &app.auth_form;
    let field_count: u16 = match form.tab {
        AuthTab::Login => 2,
        AuthTab::Signup => 3,
    };
    // Logo (6) + wordmark (2) + tabs (2) + fields (4 each) + status (2)
    let card_height = 6 + 2 + 2 + field_count * 4 + 2;
    let card = centered_rect(area, 46.min(area.width.saturating_sub(4)), card_height);

    let mut y = card.y;

    // Logo and wordmark
    for line in CAREERBRIDGE_LOGO {
        let logo_area = Rect::new(card.x, y, card.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                *line,
                Style::default().fg(COLOR_ACCENT),
            )))
            .alignment(Alignment::Center),
            logo_area,
        );
        y += 1;
    }
    let wordmark_area = Rect::new(card.x, y, card.width, 2);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "CareerBridge AI",
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Turn your academic work into career opportunities",
                Style::default().fg(COLOR_DIM),
            )),
        ])
        .alignment(Alignment::Center),
        wordmark_area,
    );
    y += 2;

    // Tab selector
    let login_style = tab_style(form.tab == AuthTab::Login);
    let signup_style = tab_style(form.tab == AuthTab::Signup);
    let tabs_area = Rect::new(card.x, y, card.width, 2);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[ Login ]", login_style),
            Span::raw("  "),
            Span::styled("[ Sign Up ]", signup_style),
        ]))
        .alignment(Alignment::Center),
        tabs_area,
    );
    y += 2;

    // Input fields
    if form.tab == AuthTab::Signup {
        let field_area = Rect::new(card.x + 2, y, card.width.saturating_sub(4), 4);
        y += render_input_field(
            frame,
            field_area,
            &InputFieldConfig::new("Full Name", &form.name)
                .focused(form.focus == AuthField::Name)
                .placeholder("Alex Chen"),
        );
    }
    let field_area = Rect::new(card.x + 2, y, card.width.saturating_sub(4), 4);
    y += render_input_field(
        frame,
        field_area,
        &InputFieldConfig::new("Email", &form.email)
            .focused(form.focus == AuthField::Email)
            .placeholder("you@university.edu"),
    );
    let field_area = Rect::new(card.x + 2, y, card.width.saturating_sub(4), 4);
    y += render_input_field(
        frame,
        field_area,
        &InputFieldConfig::new("Password", &form.password)
            .focused(form.focus == AuthField::Password)
            .password(true),
    );

    // Status line: spinner while the fake backend "works"
    let status = if app.is_loading {
        let verb = match form.tab {
            AuthTab::Login => "Logging in...",
            AuthTab::Signup => "Creating account...",
        };
        Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(app.tick_count)),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::styled(verb, Style::default().fg(COLOR_DIM)),
        ])
    } else {
        Line::from(Span::styled(
            "Free for students. No credit card required.",
            Style::default().fg(COLOR_DIM),
        ))
    };
    let status_area = Rect::new(card.x, y + 1, card.width, 1);
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        status_area,
    );
}

fn tab_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    }
}
