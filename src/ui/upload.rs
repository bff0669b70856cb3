//! Upload view: file path entry and the uploaded document list.

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::{DocumentStatus, UploadedDocument};

use super::components::{render_input_field, InputFieldConfig};
use super::helpers::{format_size, percent_bar, spinner_frame, truncate_string};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_PROCESSING,
    COLOR_SUCCESS,
};

/// Width of the transient progress bar next to processing documents.
const PROGRESS_BAR_WIDTH: usize = 12;

/// How long processing takes; used only to animate the transient progress
/// bar, which is never persisted to the document.
const PROCESSING_MILLIS: i64 = 2000;

pub fn render_upload(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + description
            Constraint::Length(4), // Path input
            Constraint::Length(1), // Format hint
            Constraint::Min(4),    // Document list
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "UPLOAD YOUR WORK",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Drop in transcripts, project reports, and certificates. Our AI parses and structures your achievements.",
            Style::default().fg(COLOR_DIM),
        )),
    ]);
    frame.render_widget(header, chunks[0].inner(Margin::new(2, 0)));

    let input_area = chunks[1].inner(Margin::new(2, 0));
    render_input_field(
        frame,
        input_area,
        &InputFieldConfig::new("File path", &app.upload_path)
            .focused(true)
            .placeholder("~/documents/transcript.pdf"),
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "PDF, DOCX, PNG (max 20 MB each)",
            Style::default().fg(COLOR_DIM),
        ))),
        chunks[2].inner(Margin::new(2, 0)),
    );

    render_document_list(frame, app, chunks[3]);
}

fn render_document_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Uploaded Documents ",
            Style::default().fg(COLOR_HEADER),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.documents.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No documents yet. Type a path above and press Enter.",
                Style::default().fg(COLOR_DIM),
            ))),
            inner,
        );
        return;
    }

    let mut lines = Vec::new();
    for doc in &app.documents {
        lines.push(document_line(doc, app.tick_count));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// One row of the document list: status icon, name, type, size, progress.
fn document_line(doc: &UploadedDocument, tick: u64) -> Line<'static> {
    let (icon, icon_color) = match doc.status {
        DocumentStatus::Completed => ("✓", COLOR_SUCCESS),
        DocumentStatus::Processing => (spinner_frame(tick), COLOR_PROCESSING),
        DocumentStatus::Error => ("✗", COLOR_ERROR),
        DocumentStatus::Pending => ("○", COLOR_DIM),
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(icon_color)),
        Span::styled(
            format!("{:<28}", truncate_string(&doc.name, 28)),
            Style::default().fg(COLOR_HEADER),
        ),
        Span::styled(
            format!("{:<12}", doc.doc_type.label()),
            Style::default().fg(COLOR_ACCENT),
        ),
        Span::styled(
            format!("{:>10}", format_size(doc.size)),
            Style::default().fg(COLOR_DIM),
        ),
    ];

    if doc.status == DocumentStatus::Processing {
        // Transient, render-only progress estimate; the document entity never
        // stores a percentage.
        let elapsed = (Utc::now() - doc.uploaded_at).num_milliseconds().max(0);
        let percent = ((elapsed * 100) / PROCESSING_MILLIS).min(99) as u8;
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            percent_bar(percent, PROGRESS_BAR_WIDTH),
            Style::default().fg(COLOR_PROCESSING),
        ));
    }

    Line::from(spans)
}
