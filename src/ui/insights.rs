//! Insights view: metric cards derived from the session state.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::SkillCategory;

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_insights(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "CAREER INSIGHTS",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))),
        chunks[0].inner(Margin::new(2, 0)),
    );

    // All metrics derive from session state; nothing is fetched or stored.
    let avg_match = app.job_match.as_ref().map(|m| m.score).unwrap_or(0);
    let technical = app
        .skills
        .iter()
        .filter(|s| s.category == SkillCategory::Technical)
        .count();

    let cards: [(String, &str); 4] = [
        (format!("{}%", avg_match), "Avg. Job Match"),
        (app.skills.len().to_string(), "Skills Mapped"),
        (technical.to_string(), "Technical Skills"),
        (app.resumes.len().to_string(), "Resumes Generated"),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(chunks[1]);

    for (i, (value, label)) in cards.iter().enumerate() {
        render_metric_card(frame, value, label, columns[i]);
    }
}

fn render_metric_card(frame: &mut Frame, value: &str, label: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                value.to_string(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                label.to_string(),
                Style::default().fg(COLOR_DIM),
            )),
        ])
        .alignment(Alignment::Center),
        inner,
    );
}
