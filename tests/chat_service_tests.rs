//! Chat session service tests for the paths that never reach the network:
//! idle and blank submissions, reset, and picker-filter cleanup.

use docchat_frontend::services::chat_session_service::{ChatSessionService, Sender};
use docchat_frontend::services::document_registry::{DocumentRegistry, Scope};
use docchat_frontend::services::notification_service::{NotificationState, Severity};
use leptos::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn service() -> (ChatSessionService, DocumentRegistry, NotificationState) {
    let notices = NotificationState::new();
    let registry = DocumentRegistry::new(notices);
    (ChatSessionService::new(registry, notices), registry, notices)
}

/// Puts a document into the session without going through `activate`, which
/// would kick off the predefined-question fetch.
fn activate_directly(service: &ChatSessionService) {
    service.session.update(|s| s.activate("doc-1", "a.pdf"));
}

#[wasm_bindgen_test]
fn test_send_while_idle_surfaces_a_notice_only() {
    let (service, _registry, notices) = service();
    service.send("hello", false);

    notices.notifications.with_untracked(|list| {
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].severity, Severity::Error);
    });
    service
        .session
        .with_untracked(|s| assert!(s.transcript.is_empty()));
}

#[wasm_bindgen_test]
fn test_send_blank_message_surfaces_an_info_notice() {
    let (service, _registry, notices) = service();
    activate_directly(&service);
    service.send("   ", false);

    notices.notifications.with_untracked(|list| {
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].severity, Severity::Info);
    });
    service
        .session
        .with_untracked(|s| assert!(s.transcript.is_empty()));
}

#[wasm_bindgen_test]
fn test_reset_returns_to_idle_and_clears_the_picker_filter() {
    let (service, registry, _notices) = service();
    activate_directly(&service);
    service
        .session
        .update(|s| drop(s.push(Sender::User, "hi", "2024-06-01T10:00:00+00:00".to_string())));
    registry.query(Scope::Chat).set("repo".to_string());

    service.reset();

    service.session.with_untracked(|s| {
        assert!(!s.is_active());
        assert!(s.transcript.is_empty());
    });
    registry
        .query(Scope::Chat)
        .with_untracked(|q| assert!(q.is_empty()));
}

#[wasm_bindgen_test]
fn test_main_scope_filter_survives_a_chat_reset() {
    let (service, registry, _notices) = service();
    registry.query(Scope::Main).set("report".to_string());
    activate_directly(&service);

    service.reset();

    registry
        .query(Scope::Main)
        .with_untracked(|q| assert_eq!(q, "report"));
}

#[wasm_bindgen_test]
fn test_predefined_questions_start_empty() {
    let (service, _registry, _notices) = service();
    service
        .predefined_questions
        .with_untracked(|q| assert!(q.is_empty()));
}
