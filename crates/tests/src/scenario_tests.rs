use crate::common;
use client::{go_back, submit_login};
use pretty_assertions::assert_eq;
use shared_types::{
    AttemptResolution, LoginStatus, PortalId, PortalSession, SessionViewState,
    INVALID_CREDENTIALS_MESSAGE,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

const DELAY: Duration = Duration::from_millis(1500);

#[tokio::test]
async fn test_teacher_logs_in_and_reaches_dashboard() {
    let server = common::spawn_demo_backend().await;
    let backend = server.backend();
    let session = Rc::new(RefCell::new(PortalSession::new()));

    assert!(session.borrow_mut().select_portal_key("teacher"));
    common::fill(&session, "teacher", "teacher123");

    let start = Instant::now();
    let resolution = submit_login(session.clone(), &backend, DELAY).await;
    let elapsed = start.elapsed();

    assert!(matches!(resolution, Some(AttemptResolution::Redirect(_))));
    assert!(elapsed >= DELAY, "Dashboard shown after {elapsed:?}");

    let s = session.borrow();
    assert_eq!(s.view(), SessionViewState::Dashboard);
    assert_eq!(s.descriptor().map(|d| d.title.en), Some("Teachers Portal"));
    assert_eq!(server.recorded().len(), 1);
}

#[tokio::test]
async fn test_admin_bad_password_shows_error_then_retries() {
    let server = common::spawn_demo_backend().await;
    let backend = server.backend();
    let session = common::session_in_login(PortalId::Admin);

    common::fill(&session, "admin", "wrong");
    let first = submit_login(session.clone(), &backend, DELAY).await;
    assert_eq!(first, Some(AttemptResolution::Failed));
    {
        let s = session.borrow();
        assert_eq!(s.status(), LoginStatus::Error);
        assert_eq!(s.view(), SessionViewState::Login);
        assert!(s.can_submit(), "Form must accept another attempt");
    }
    assert_eq!(INVALID_CREDENTIALS_MESSAGE, "Invalid credentials. Please try again.");

    // Fixing the password and retrying succeeds.
    session.borrow_mut().set_password("admin123");
    let start = Instant::now();
    let second = submit_login(session.clone(), &backend, Duration::from_millis(50)).await;
    assert!(matches!(second, Some(AttemptResolution::Redirect(_))));
    assert!(start.elapsed() >= Duration::from_millis(50));
    assert_eq!(session.borrow().view(), SessionViewState::Dashboard);
    assert_eq!(server.recorded().len(), 2);
}

#[tokio::test]
async fn test_unreachable_backend_leaves_form_usable() {
    let session = common::session_in_login(PortalId::Student);
    common::fill(&session, "student", "student123");
    let backend = client::HttpLoginBackend::new(&shared_types::ClientConfig {
        backend_url: Some(common::closed_port_url().await),
        ..shared_types::ClientConfig::default()
    });

    let resolution = submit_login(session.clone(), &backend, DELAY).await;

    assert_eq!(resolution, Some(AttemptResolution::Failed));
    let s = session.borrow();
    assert_eq!(s.status(), LoginStatus::Error);
    assert!(!s.is_submitting());
}

#[tokio::test]
async fn test_full_round_trip_through_every_view() {
    let server = common::spawn_demo_backend().await;
    let backend = server.backend();
    let session = Rc::new(RefCell::new(PortalSession::new()));
    assert_eq!(session.borrow().view(), SessionViewState::Selector);

    session.borrow_mut().select_portal(PortalId::Student);
    assert_eq!(session.borrow().view(), SessionViewState::Login);

    common::fill(&session, "student", "student123");
    submit_login(session.clone(), &backend, Duration::from_millis(10)).await;
    assert_eq!(session.borrow().view(), SessionViewState::Dashboard);

    go_back(session.clone());
    assert_eq!(session.borrow().view(), SessionViewState::Selector);

    // A fresh visit starts with an empty form.
    session.borrow_mut().select_portal(PortalId::Student);
    let s = session.borrow();
    assert_eq!(s.status(), LoginStatus::Idle);
    assert!(s.credentials().is_some_and(|c| c.is_empty()));
}
