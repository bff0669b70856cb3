//! Navigation bar, notice line, and keybind hints.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, NoticeKind, View};

use super::helpers::spinner_frame;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS,
};

/// Render the top navigation bar: wordmark, view tabs, user + loading state.
pub fn render_nav_bar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![
        Span::styled("◆ CareerBridge AI", Style::default().fg(COLOR_ACCENT)),
        Span::raw("   "),
    ];
    for view in View::NAV_ITEMS {
        let style = if view == app.current_view {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!(" {} ", view.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    // Right side: loading spinner and user name
    let mut right = Vec::new();
    if app.is_loading {
        right.push(Span::styled(
            format!("{} ", spinner_frame(app.tick_count)),
            Style::default().fg(COLOR_ACCENT),
        ));
    }
    if let Some(user) = &app.user {
        right.push(Span::styled(
            user.name.clone(),
            Style::default().fg(COLOR_HEADER),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        inner,
    );
}

/// Render the transient notice line under the navigation bar.
pub fn render_notice_line(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };
    let (icon, color) = match notice.kind {
        NoticeKind::Info => ("◌", COLOR_DIM),
        NoticeKind::Success => ("✓", COLOR_SUCCESS),
        NoticeKind::Error => ("✗", COLOR_ERROR),
    };
    let line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(color)),
        Span::styled(notice.message.clone(), Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Render the contextual keybind hints in the footer.
pub fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.current_view {
        View::Auth => "[Enter] Submit  [Tab] Next field  [Ctrl+C] Quit",
        View::Upload => "[Type] File path  [Enter] Upload  [Tab] Next view  [Ctrl+L] Logout",
        View::Match => "[Type] Job description  [Enter] Analyze  [Tab] Next view  [Ctrl+L] Logout",
        View::Resume => "[g] Generate  [↑/↓] Select  [Tab] Next view  [Ctrl+L] Logout",
        View::Dashboard => "[Enter] Start uploading  [Tab] Next view  [Ctrl+L] Logout",
        _ => "[Tab] Next view  [Shift+Tab] Previous  [Ctrl+L] Logout  [Ctrl+C] Quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(COLOR_DIM),
        )))
        .alignment(Alignment::Center),
        area,
    );
}
