//! Integration tests for the session store lifecycle.
//!
//! These drive the store the way the event loop does: call an operation,
//! advance paused time past the simulated delay, then drain the message
//! channel into `handle_message`.

use std::time::Duration;

use careerbridge::app::{App, AppMessage, View};
use careerbridge::models::{DocumentStatus, DocumentType, SkillCategory};
use tokio::sync::mpsc;

/// Take the receiver out of a fresh App so the test can drain it.
fn take_rx(app: &mut App) -> mpsc::UnboundedReceiver<AppMessage> {
    app.message_rx.take().expect("fresh app has a receiver")
}

/// Apply every message the delayed tasks have posted so far.
fn drain(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppMessage>) {
    while let Ok(msg) = rx.try_recv() {
        app.handle_message(msg);
    }
}

/// Let spawned tasks run and paused time advance past their sleeps.
async fn settle(millis: u64) {
    tokio::time::sleep(Duration::from_millis(millis)).await;
    tokio::task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn login_derives_name_from_email_local_part() {
    let mut app = App::new();
    let mut rx = take_rx(&mut app);

    app.login("jordan.lee@university.edu", "hunter2");
    assert!(app.is_loading);
    assert!(app.user.is_none());

    settle(1001).await;
    drain(&mut app, &mut rx);

    let user = app.user.as_ref().expect("login completed");
    assert_eq!(user.id, "1");
    assert_eq!(user.name, "jordan.lee");
    assert_eq!(user.email, "jordan.lee@university.edu");
    assert_eq!(app.current_view, View::Dashboard);
    assert!(!app.is_loading);
}

#[tokio::test(start_paused = true)]
async fn login_is_not_complete_before_the_delay() {
    let mut app = App::new();
    let mut rx = take_rx(&mut app);

    app.login("sam@example.com", "pw");
    settle(500).await;
    drain(&mut app, &mut rx);

    assert!(app.user.is_none());
    assert!(app.is_loading);
}

#[tokio::test(start_paused = true)]
async fn signup_uses_supplied_name_verbatim() {
    let mut app = App::new();
    let mut rx = take_rx(&mut app);

    app.signup("pat@example.com", "pw", "Pat Q. Example");
    settle(1001).await;
    drain(&mut app, &mut rx);

    let user = app.user.as_ref().expect("signup completed");
    assert_eq!(user.name, "Pat Q. Example");
    assert_eq!(user.email, "pat@example.com");
}

#[tokio::test(start_paused = true)]
async fn upload_processes_into_completed_document_and_six_skills() {
    let mut app = App::new();
    let mut rx = take_rx(&mut app);

    app.upload_document("fall_transcript.pdf", 120_000);
    assert_eq!(app.documents.len(), 1);
    assert_eq!(app.documents[0].status, DocumentStatus::Processing);
    assert_eq!(app.documents[0].doc_type, DocumentType::Transcript);
    // Uploads never touch the shared loading flag.
    assert!(!app.is_loading);
    assert!(app.skills.is_empty());

    settle(2001).await;
    drain(&mut app, &mut rx);

    assert_eq!(app.documents[0].status, DocumentStatus::Completed);
    assert_eq!(app.skills.len(), 6);
    let technical = app
        .skills
        .iter()
        .filter(|s| s.category == SkillCategory::Technical)
        .count();
    assert_eq!(technical, 3);
}

#[tokio::test(start_paused = true)]
async fn each_completed_upload_appends_another_skill_batch() {
    let mut app = App::new();
    let mut rx = take_rx(&mut app);

    app.upload_document("project_one.pdf", 1_000);
    // Document ids come from the wall clock in milliseconds; space the
    // uploads out so the ids are distinct.
    std::thread::sleep(Duration::from_millis(2));
    app.upload_document("project_two.pdf", 2_000);

    settle(2001).await;
    drain(&mut app, &mut rx);

    assert_eq!(app.documents.len(), 2);
    assert!(app
        .documents
        .iter()
        .all(|d| d.status == DocumentStatus::Completed));
    // Duplicate skills accumulate; nothing deduplicates them.
    assert_eq!(app.skills.len(), 12);
}

#[tokio::test(start_paused = true)]
async fn analyze_ignores_the_description_and_returns_the_canned_result() {
    let mut app = App::new();
    let mut rx = take_rx(&mut app);

    app.analyze_job_match("Senior Underwater Basket Weaver, 10+ years required");
    assert!(app.is_loading);
    assert!(app.job_match.is_none());

    settle(1501).await;
    drain(&mut app, &mut rx);

    let result = app.job_match.as_ref().expect("analysis completed");
    assert_eq!(result.score, 87);
    assert_eq!(result.matched_skills.len(), 4);
    assert_eq!(result.missing_skills, vec!["Kubernetes", "Go", "Terraform"]);
    assert_eq!(result.recommendations.len(), 3);
    assert!(!app.is_loading);

    let notice = app.notice.as_ref().expect("completion raises a notice");
    assert_eq!(notice.message, "Analysis complete!");
}

#[tokio::test(start_paused = true)]
async fn reanalyzing_replaces_the_previous_match_wholesale() {
    let mut app = App::new();
    let mut rx = take_rx(&mut app);

    app.analyze_job_match("first posting");
    settle(1501).await;
    drain(&mut app, &mut rx);
    assert!(app.job_match.is_some());

    app.analyze_job_match("second posting");
    assert!(app.is_loading);
    settle(1501).await;
    drain(&mut app, &mut rx);

    assert_eq!(app.job_match.as_ref().map(|m| m.score), Some(87));
    assert!(!app.is_loading);
}

#[tokio::test(start_paused = true)]
async fn generating_twice_appends_two_resumes() {
    let mut app = App::new();
    let mut rx = take_rx(&mut app);

    app.generate_resume();
    settle(2001).await;
    drain(&mut app, &mut rx);
    assert_eq!(app.resumes.len(), 1);

    app.generate_resume();
    settle(2001).await;
    drain(&mut app, &mut rx);

    assert_eq!(app.resumes.len(), 2);
    assert_eq!(app.resumes[1].name, "Alex Chen");
    assert_eq!(app.resumes[1].title, "Data Analyst");
    assert_eq!(app.resumes[1].sections.len(), 4);
}

#[tokio::test(start_paused = true)]
async fn completion_scheduled_before_logout_still_lands_afterwards() {
    let mut app = App::new();
    let mut rx = take_rx(&mut app);

    app.upload_document("capstone.pdf", 5_000);
    app.logout();
    assert!(app.documents.is_empty());

    settle(2001).await;
    drain(&mut app, &mut rx);

    // The document is gone, but the skill batch from its processing task
    // still pollutes the fresh session. Nothing cancels in-flight work.
    assert!(app.documents.is_empty());
    assert_eq!(app.skills.len(), 6);
}

#[tokio::test(start_paused = true)]
async fn overlapping_operations_share_the_loading_flag() {
    let mut app = App::new();
    let mut rx = take_rx(&mut app);

    app.analyze_job_match("posting");
    app.generate_resume();
    assert!(app.is_loading);

    // Analysis (1500ms) finishes first and clears the flag for both.
    settle(1501).await;
    drain(&mut app, &mut rx);
    assert!(app.job_match.is_some());
    assert!(!app.is_loading);
    assert!(app.resumes.is_empty());

    // Generation still lands later.
    settle(501).await;
    drain(&mut app, &mut rx);
    assert_eq!(app.resumes.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn full_session_walkthrough() {
    let mut app = App::new();
    let mut rx = take_rx(&mut app);

    app.signup("alex@university.edu", "pw", "Alex");
    settle(1001).await;
    drain(&mut app, &mut rx);
    assert_eq!(app.current_view, View::Dashboard);

    app.upload_document("ml_cert.png", 80_000);
    assert_eq!(app.documents[0].doc_type, DocumentType::Certificate);
    settle(2001).await;
    drain(&mut app, &mut rx);
    assert_eq!(app.skills.len(), 6);

    app.analyze_job_match("Data analyst role at a fintech startup");
    settle(1501).await;
    drain(&mut app, &mut rx);
    assert_eq!(app.job_match.as_ref().map(|m| m.score), Some(87));

    app.generate_resume();
    settle(2001).await;
    drain(&mut app, &mut rx);
    assert_eq!(app.resumes.len(), 1);

    app.logout();
    assert!(app.user.is_none());
    assert!(app.skills.is_empty());
    assert!(app.job_match.is_none());
    assert!(app.resumes.is_empty());
    assert_eq!(app.current_view, View::Auth);
}
