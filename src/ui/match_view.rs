//! Match view: job description entry and the analysis result.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::JobMatch;

use super::components::{render_input_field, InputFieldConfig};
use super::helpers::spinner_frame;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS,
};

pub fn render_match(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(4), // Job description input
            Constraint::Min(6),    // Result
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "MATCH YOUR DREAM JOB",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))),
        chunks[0].inner(Margin::new(2, 0)),
    );

    render_input_field(
        frame,
        chunks[1].inner(Margin::new(2, 0)),
        &InputFieldConfig::new("Job description", &app.job_description)
            .focused(true)
            .placeholder("Paste a job description here..."),
    );

    if app.is_loading {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("{} ", spinner_frame(app.tick_count)),
                    Style::default().fg(COLOR_ACCENT),
                ),
                Span::styled("Analyzing job match...", Style::default().fg(COLOR_DIM)),
            ]))
            .alignment(Alignment::Center),
            chunks[2],
        );
        return;
    }

    match &app.job_match {
        Some(job_match) => render_result(frame, job_match, chunks[2]),
        None => frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Paste a job description and press Enter to see how you stack up.",
                Style::default().fg(COLOR_DIM),
            )))
            .alignment(Alignment::Center),
            chunks[2],
        ),
    }
}

fn render_result(frame: &mut Frame, job_match: &JobMatch, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(area);

    // Score card
    let score_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Match ", Style::default().fg(COLOR_HEADER)));
    let score_inner = score_block.inner(columns[0]);
    frame.render_widget(score_block, columns[0]);
    frame.render_widget(
        Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                format!("{}%", job_match.score),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                job_match.verdict(),
                Style::default().fg(COLOR_DIM),
            )),
        ])
        .alignment(Alignment::Center),
        score_inner,
    );

    // Skill breakdown and recommendations
    let detail_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let detail_inner = detail_block.inner(columns[1]);
    frame.render_widget(detail_block, columns[1]);

    let mut lines = vec![Line::from(Span::styled(
        " Matched Skills",
        Style::default().fg(COLOR_DIM),
    ))];
    for skill in &job_match.matched_skills {
        lines.push(Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(COLOR_SUCCESS)),
            Span::styled(skill.clone(), Style::default().fg(COLOR_HEADER)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " Missing Skills",
        Style::default().fg(COLOR_DIM),
    )));
    for skill in &job_match.missing_skills {
        lines.push(Line::from(vec![
            Span::styled("  ✗ ", Style::default().fg(COLOR_ERROR)),
            Span::styled(skill.clone(), Style::default().fg(COLOR_HEADER)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " Recommendations",
        Style::default().fg(COLOR_DIM),
    )));
    for (i, rec) in job_match.recommendations.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. ", i + 1), Style::default().fg(COLOR_ACCENT)),
            Span::styled(rec.clone(), Style::default().fg(COLOR_HEADER)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), detail_inner);
}
