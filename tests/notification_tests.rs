//! Notification state tests: notice lifecycle, severities, and removal.

use docchat_frontend::services::notification_service::{
    NotificationState, Severity, DEFAULT_NOTICE_MS, VALIDATION_NOTICE_MS,
};
use leptos::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_notify_appends_in_order() {
    let state = NotificationState::new();
    state.notify(Severity::Info, "first", DEFAULT_NOTICE_MS);
    state.notify(Severity::Error, "second", DEFAULT_NOTICE_MS);

    state.notifications.with_untracked(|list| {
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].message, "first");
        assert_eq!(list[1].message, "second");
        assert_eq!(list[1].severity, Severity::Error);
    });
}

#[wasm_bindgen_test]
fn test_duplicate_messages_are_not_collapsed() {
    let state = NotificationState::new();
    state.error("same message");
    state.error("same message");

    state
        .notifications
        .with_untracked(|list| assert_eq!(list.len(), 2));
}

#[wasm_bindgen_test]
fn test_notify_assigns_unique_ids() {
    let state = NotificationState::new();
    let a = state.notify(Severity::Info, "a", DEFAULT_NOTICE_MS);
    let b = state.notify(Severity::Info, "b", DEFAULT_NOTICE_MS);
    assert_ne!(a, b);
}

#[wasm_bindgen_test]
fn test_remove_by_id_leaves_others() {
    let state = NotificationState::new();
    let first = state.notify(Severity::Success, "keep me not", DEFAULT_NOTICE_MS);
    state.notify(Severity::Success, "keep me", DEFAULT_NOTICE_MS);

    state.remove(first);

    state.notifications.with_untracked(|list| {
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].message, "keep me");
    });
}

#[wasm_bindgen_test]
fn test_remove_unknown_id_is_a_no_op() {
    let state = NotificationState::new();
    state.info("still here");
    state.remove(uuid::Uuid::new_v4());

    state
        .notifications
        .with_untracked(|list| assert_eq!(list.len(), 1));
}

#[wasm_bindgen_test]
fn test_shorthand_constructors_use_default_duration() {
    let state = NotificationState::new();
    state.success("ok");
    state.error("bad");
    state.info("fyi");

    state.notifications.with_untracked(|list| {
        assert_eq!(list[0].severity, Severity::Success);
        assert_eq!(list[1].severity, Severity::Error);
        assert_eq!(list[2].severity, Severity::Info);
        assert!(list.iter().all(|n| n.duration_ms == DEFAULT_NOTICE_MS));
    });
}

#[wasm_bindgen_test]
fn test_validation_duration_is_longer_than_default() {
    assert!(VALIDATION_NOTICE_MS > DEFAULT_NOTICE_MS);
}

#[wasm_bindgen_test]
fn test_severity_classes_are_distinct() {
    let severities = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];
    for (i, a) in severities.iter().enumerate() {
        for b in &severities[i + 1..] {
            assert_ne!(a.class(), b.class());
        }
    }
}
