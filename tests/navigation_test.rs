//! Integration tests for view navigation and session reset behavior.

use careerbridge::app::{App, AuthTab, View};
use careerbridge::models::User;

#[test]
fn every_view_is_accepted_unguarded() {
    let mut app = App::new();
    // No guard: even Auth while signed in, or data views with no data.
    for view in [
        View::Auth,
        View::Dashboard,
        View::Upload,
        View::Skills,
        View::Match,
        View::Resume,
        View::Insights,
    ] {
        app.set_current_view(view);
        assert_eq!(app.current_view, view);
    }
}

#[test]
fn tab_cycles_through_the_nav_items() {
    let mut app = App::new();
    app.set_current_view(View::Dashboard);

    let expected = [
        View::Upload,
        View::Skills,
        View::Match,
        View::Resume,
        View::Insights,
        View::Dashboard,
    ];
    for view in expected {
        app.next_view();
        assert_eq!(app.current_view, view);
    }

    app.prev_view();
    assert_eq!(app.current_view, View::Insights);
}

#[test]
fn cycling_from_auth_enters_at_dashboard() {
    let mut app = App::new();
    assert_eq!(app.current_view, View::Auth);
    app.next_view();
    assert_eq!(app.current_view, View::Dashboard);
}

#[test]
fn resume_selection_clamps_to_the_list() {
    let mut app = App::new();
    app.select_next_resume();
    assert_eq!(app.resume_index, 0);

    app.resumes.push(careerbridge::models::Resume::generated());
    app.resumes.push(careerbridge::models::Resume::generated());

    app.select_next_resume();
    assert_eq!(app.resume_index, 1);
    app.select_next_resume();
    assert_eq!(app.resume_index, 1);
    app.select_prev_resume();
    assert_eq!(app.resume_index, 0);
    app.select_prev_resume();
    assert_eq!(app.resume_index, 0);
}

#[test]
fn logout_wipes_the_whole_session() {
    let mut app = App::new();
    app.user = Some(User::from_email("alex@example.com"));
    app.current_view = View::Insights;
    app.skills.extend(careerbridge::models::Skill::extraction_batch());
    app.resumes.push(careerbridge::models::Resume::generated());
    app.job_description.push_str("some posting");
    app.upload_path.push_str("~/cv.pdf");
    app.auth_form.email.push_str("alex@example.com");
    app.resume_index = 1;
    app.is_loading = true;

    app.logout();

    assert!(app.user.is_none());
    assert_eq!(app.current_view, View::Auth);
    assert!(app.skills.is_empty());
    assert!(app.resumes.is_empty());
    assert!(app.job_description.is_empty());
    assert!(app.upload_path.is_empty());
    assert!(app.auth_form.email.is_empty());
    assert_eq!(app.auth_form.tab, AuthTab::Login);
    assert_eq!(app.resume_index, 0);
    assert!(!app.is_loading);
}

#[test]
fn logout_is_idempotent() {
    let mut app = App::new();
    app.logout();
    app.logout();
    assert!(app.user.is_none());
    assert_eq!(app.current_view, View::Auth);
}
