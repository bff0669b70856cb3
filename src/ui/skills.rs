//! Skills view: extracted skills grouped by category with confidence bars.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::{Skill, SkillCategory};

use super::helpers::{percent_bar, truncate_string};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_PROGRESS, COLOR_VIOLET};

/// Width of the confidence bar in each skill row.
const CONFIDENCE_BAR_WIDTH: usize = 10;

pub fn render_skills(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
        .split(area);

    frame.render_widget(
        Paragraph::new(vec![Line::from(Span::styled(
            "YOUR SKILL PROFILE",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))]),
        chunks[0].inner(Margin::new(2, 0)),
    );

    if app.skills.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No skills extracted yet. Upload documents to map your skills.",
                Style::default().fg(COLOR_DIM),
            )))
            .alignment(Alignment::Center),
            chunks[1],
        );
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);

    for (i, category) in [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Domain,
    ]
    .into_iter()
    .enumerate()
    {
        render_category_column(frame, app, category, columns[i]);
    }
}

fn render_category_column(frame: &mut Frame, app: &App, category: SkillCategory, area: Rect) {
    let skills: Vec<&Skill> = app
        .skills
        .iter()
        .filter(|s| s.category == category)
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ({}) ", category.label(), skills.len()),
            Style::default().fg(COLOR_VIOLET),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for skill in skills {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<18}", truncate_string(&skill.name, 18)),
                Style::default().fg(COLOR_HEADER),
            ),
            Span::styled(
                percent_bar(skill.confidence, CONFIDENCE_BAR_WIDTH),
                Style::default().fg(COLOR_PROGRESS),
            ),
            Span::styled(
                format!(" {:>3}%", skill.confidence),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
