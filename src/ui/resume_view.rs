//! Resume view: generated resume list and the selected resume's sections.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::{Resume, SectionContent};

use super::helpers::spinner_frame;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_resume(frame: &mut Frame, app: &App, area: Rect) {
    if app.resumes.is_empty() {
        render_empty_state(frame, app, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
        .split(area);

    render_resume_list(frame, app, columns[0]);

    let selected = app
        .resumes
        .get(app.resume_index)
        .or_else(|| app.resumes.last());
    if let Some(resume) = selected {
        render_resume_detail(frame, resume, columns[1]);
    }
}

fn render_empty_state(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.is_loading {
        Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(app.tick_count)),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::styled("Generating your resume...", Style::default().fg(COLOR_DIM)),
        ])
    } else {
        Line::from(Span::styled(
            "Press g to generate your first ATS-optimized resume.",
            Style::default().fg(COLOR_DIM),
        ))
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_resume_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" Resumes ({}) ", app.resumes.len()),
            Style::default().fg(COLOR_HEADER),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for (i, resume) in app.resumes.iter().enumerate() {
        let selected = i == app.resume_index;
        let marker = if selected { "▸ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_HEADER)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(COLOR_ACCENT)),
            Span::styled(format!("{} — {}", resume.name, resume.title), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", resume.created_at.format("%H:%M:%S")),
            Style::default().fg(COLOR_DIM),
        )));
    }
    if app.is_loading {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", spinner_frame(app.tick_count)),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::styled("Generating...", Style::default().fg(COLOR_DIM)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_resume_detail(frame: &mut Frame, resume: &Resume, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} — {} ", resume.name, resume.title),
            Style::default().fg(COLOR_HEADER),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for section in &resume.sections {
        lines.push(Line::from(Span::styled(
            format!(" {}", section.section_type.heading().to_uppercase()),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )));
        match &section.content {
            SectionContent::Text(text) => {
                lines.push(Line::from(Span::styled(
                    format!("   {}", text),
                    Style::default().fg(COLOR_HEADER),
                )));
            }
            SectionContent::Items(items) => {
                for item in items {
                    lines.push(Line::from(vec![
                        Span::styled("   • ", Style::default().fg(COLOR_DIM)),
                        Span::styled(item.clone(), Style::default().fg(COLOR_HEADER)),
                    ]));
                }
            }
        }
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
