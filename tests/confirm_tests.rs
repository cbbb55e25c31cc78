//! Confirmation state tests: single pending request, confirm/cancel paths.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use docchat_frontend::services::confirm_service::ConfirmState;
use leptos::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_request_opens_the_modal() {
    let state = ConfirmState::new();
    assert!(!state.is_open());

    let accepted = state.request("Title", "Body", Arc::new(|| {}));
    assert!(accepted);
    assert!(state.is_open());

    state.pending.with_untracked(|p| {
        let request = p.as_ref().unwrap();
        assert_eq!(request.title, "Title");
        assert_eq!(request.message, "Body");
    });
}

#[wasm_bindgen_test]
fn test_second_request_is_rejected_while_one_is_pending() {
    let state = ConfirmState::new();
    assert!(state.request("First", "first body", Arc::new(|| {})));
    assert!(!state.request("Second", "second body", Arc::new(|| {})));

    // The original request is untouched.
    state
        .pending
        .with_untracked(|p| assert_eq!(p.as_ref().unwrap().title, "First"));
}

#[wasm_bindgen_test]
fn test_confirm_runs_the_callback_once_and_closes() {
    let state = ConfirmState::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    state.request(
        "Delete",
        "Sure?",
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );
    state.confirm();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!state.is_open());

    // Confirming again with nothing pending does nothing.
    state.confirm();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[wasm_bindgen_test]
fn test_cancel_discards_without_running_the_callback() {
    let state = ConfirmState::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();

    state.request(
        "Delete",
        "Sure?",
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );
    state.cancel();

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!state.is_open());
}

#[wasm_bindgen_test]
fn test_new_request_accepted_after_resolution() {
    let state = ConfirmState::new();
    state.request("First", "body", Arc::new(|| {}));
    state.cancel();

    assert!(state.request("Second", "body", Arc::new(|| {})));
    state
        .pending
        .with_untracked(|p| assert_eq!(p.as_ref().unwrap().title, "Second"));
}
