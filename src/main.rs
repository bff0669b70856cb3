use careerbridge::app::{App, AppMessage, AuthTab, NoticeKind, View};
use careerbridge::logging;
use careerbridge::models::DocumentStatus;
use careerbridge::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use tokio::sync::mpsc;

/// Upload surface size ceiling (20 MB). Larger files are dropped silently
/// before the store ever sees them; no error document is created.
const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = logging::init() {
        eprintln!("warning: {}", e);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app).await;

    // Always restore the terminal, even when the loop errored.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw when state changed, or continuously while an animation
        // (spinner, processing progress) is on screen.
        if app.needs_redraw || app.is_loading || has_processing_documents(app) {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        // 16ms tick keeps the spinner and notice expiry moving.
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.mark_dirty();
                            handle_key(app, key);
                            if app.should_quit {
                                return Ok(());
                            }
                        }
                        _ => {}
                    }
                }
            }

            msg = recv_message(&mut message_rx) => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }
    }
}

/// Await the next delayed-completion message, or pend forever if the
/// receiver was never installed.
async fn recv_message(
    message_rx: &mut Option<mpsc::UnboundedReceiver<AppMessage>>,
) -> Option<AppMessage> {
    match message_rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

/// Any document still processing means the progress bars need animating.
fn has_processing_documents(app: &App) -> bool {
    app.documents
        .iter()
        .any(|d| d.status == DocumentStatus::Processing)
}

/// Top-level key dispatch.
fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keybinds (always active)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // Unauthenticated sessions only see the auth screen.
    if app.user.is_none() {
        handle_auth_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.logout();
            return;
        }
        KeyCode::Tab => {
            app.next_view();
            return;
        }
        KeyCode::BackTab => {
            app.prev_view();
            return;
        }
        _ => {}
    }

    match app.current_view {
        View::Dashboard => {
            if key.code == KeyCode::Enter {
                app.set_current_view(View::Upload);
            }
        }
        View::Upload => handle_upload_key(app, key),
        View::Match => handle_match_key(app, key),
        View::Resume => handle_resume_key(app, key),
        _ => {}
    }
}

fn handle_auth_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => app.auth_form.focus_next(),
        KeyCode::BackTab => app.auth_form.focus_prev(),
        KeyCode::Left | KeyCode::Right => app.auth_form.toggle_tab(),
        KeyCode::Enter => submit_auth(app),
        KeyCode::Backspace => app.auth_form.backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.auth_form.insert_char(c);
        }
        _ => {}
    }
}

/// Submit the auth form. Ignored while a login/signup is already in flight.
fn submit_auth(app: &mut App) {
    if app.is_loading {
        return;
    }
    let email = app.auth_form.email.clone();
    let password = app.auth_form.password.clone();
    match app.auth_form.tab {
        AuthTab::Login => app.login(&email, &password),
        AuthTab::Signup => {
            let name = app.auth_form.name.clone();
            app.signup(&email, &password, &name);
        }
    }
}

fn handle_upload_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => attach_file(app),
        KeyCode::Backspace => {
            app.upload_path.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.upload_path.push(c);
        }
        _ => {}
    }
}

/// Stand-in for the file picker: stat the typed path for its size, apply the
/// size ceiling, and hand `{name, size}` to the store. File content is never
/// read.
fn attach_file(app: &mut App) {
    let path_str = app.upload_path.trim().to_string();
    if path_str.is_empty() {
        return;
    }
    app.upload_path.clear();

    let name = Path::new(&path_str)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path_str.clone());

    let size = match std::fs::metadata(&path_str) {
        Ok(meta) => meta.len(),
        Err(_) => {
            app.raise_notice(NoticeKind::Error, format!("File not found: {}", path_str));
            return;
        }
    };

    if size > MAX_UPLOAD_BYTES {
        // Oversized files never reach the store and surface no error,
        // matching the picker contract.
        tracing::debug!("dropping oversized file {} ({} bytes)", name, size);
        return;
    }

    app.upload_document(&name, size);
    app.raise_notice(
        NoticeKind::Success,
        format!("Uploaded {} — processing your document...", name),
    );
}

fn handle_match_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if app.is_loading || app.job_description.trim().is_empty() {
                return;
            }
            let description = app.job_description.clone();
            app.raise_notice(NoticeKind::Info, "Analyzing job match...");
            app.analyze_job_match(&description);
        }
        KeyCode::Backspace => {
            app.job_description.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.job_description.push(c);
        }
        _ => {}
    }
}

fn handle_resume_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.select_prev_resume(),
        KeyCode::Down => app.select_next_resume(),
        KeyCode::Char('g') => {
            // Precondition check owned by this layer, not the store: the
            // store itself would happily generate with zero skills.
            if app.skills.is_empty() {
                app.raise_notice(
                    NoticeKind::Error,
                    "No skills found — upload documents first to extract your skills.",
                );
                return;
            }
            if app.is_loading {
                return;
            }
            app.raise_notice(NoticeKind::Info, "Generating your resume...");
            app.generate_resume();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn temp_file(name: &str, len: u64) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let file = File::create(&path).expect("create temp file");
        file.set_len(len).expect("size temp file");
        path
    }

    #[tokio::test]
    async fn attach_file_with_missing_path_raises_an_error_notice() {
        let mut app = App::new();
        app.upload_path = "/no/such/file.pdf".to_string();
        attach_file(&mut app);
        assert!(app.documents.is_empty());
        let notice = app.notice.expect("missing file raises a notice");
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[tokio::test]
    async fn attach_file_uploads_a_small_file() {
        let path = temp_file("cb_small_transcript.pdf", 4096);
        let mut app = App::new();
        app.upload_path = path.to_string_lossy().into_owned();
        attach_file(&mut app);
        std::fs::remove_file(&path).ok();

        assert_eq!(app.documents.len(), 1);
        assert_eq!(app.documents[0].name, "cb_small_transcript.pdf");
        assert_eq!(app.documents[0].size, 4096);
        assert!(app.upload_path.is_empty());
        let notice = app.notice.expect("upload raises a notice");
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[tokio::test]
    async fn attach_file_silently_drops_oversized_files() {
        // Sparse file just over the ceiling
        let path = temp_file("cb_huge_project.pdf", MAX_UPLOAD_BYTES + 1);
        let mut app = App::new();
        app.upload_path = path.to_string_lossy().into_owned();
        attach_file(&mut app);
        std::fs::remove_file(&path).ok();

        // Dropped without a document or a notice of any kind.
        assert!(app.documents.is_empty());
        assert!(app.notice.is_none());
    }

    #[tokio::test]
    async fn attach_file_at_the_ceiling_is_accepted() {
        let path = temp_file("cb_exact_cert.png", MAX_UPLOAD_BYTES);
        let mut app = App::new();
        app.upload_path = path.to_string_lossy().into_owned();
        attach_file(&mut app);
        std::fs::remove_file(&path).ok();

        assert_eq!(app.documents.len(), 1);
    }

    #[test]
    fn generate_is_refused_without_skills() {
        let mut app = App::new();
        let key = KeyEvent::from(KeyCode::Char('g'));
        handle_resume_key(&mut app, key);

        assert!(!app.is_loading);
        let notice = app.notice.expect("guard raises a notice");
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn blank_path_is_ignored() {
        let mut app = App::new();
        app.upload_path = "   ".to_string();
        attach_file(&mut app);
        assert!(app.documents.is_empty());
        assert!(app.notice.is_none());
    }
}
