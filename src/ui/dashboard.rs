//! Dashboard view: hero copy and session counts.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::helpers::centered_rect;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

pub fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let name = app
        .user
        .as_ref()
        .map(|u| u.name.as_str())
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled(
            "AI-POWERED",
            Style::default().fg(COLOR_ACCENT),
        )),
        Line::default(),
        Line::from(Span::styled(
            "TURN COURSEWORK INTO CAREER WINS",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Upload your academic work. We extract skills, match real jobs,",
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(Span::styled(
            "and build an ATS-ready resume - in seconds.",
            Style::default().fg(COLOR_DIM),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Welcome back, ", Style::default().fg(COLOR_DIM)),
            Span::styled(name.to_string(), Style::default().fg(COLOR_HEADER)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            format!(
                "{} documents · {} skills · {} resumes",
                app.documents.len(),
                app.skills.len(),
                app.resumes.len()
            ),
            Style::default().fg(COLOR_DIM),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(COLOR_DIM)),
            Span::styled("Enter", Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                " to start building your resume",
                Style::default().fg(COLOR_DIM),
            ),
        ]),
    ];

    let hero = centered_rect(area, area.width.saturating_sub(8), lines.len() as u16);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        hero,
    );
}
