use leptos::prelude::*;
use std::sync::Arc;

/// A pending confirmation: title, body text, and the action to run when the
/// user confirms.
#[derive(Clone)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub on_confirm: Arc<dyn Fn() + Send + Sync>,
}

// Implement Debug manually since Arc<dyn Fn()> doesn't implement it
impl std::fmt::Debug for ConfirmRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfirmRequest")
            .field("title", &self.title)
            .field("message", &self.message)
            .finish()
    }
}

impl PartialEq for ConfirmRequest {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.message == other.message
            && Arc::ptr_eq(&self.on_confirm, &other.on_confirm)
    }
}

/// Single confirm/cancel modal with a pending-action queue of depth 1.
///
/// Only one confirmation may be pending at a time. A second `request` while
/// one is open is rejected outright rather than silently replacing the first
/// callback.
#[derive(Clone, Copy)]
pub struct ConfirmState {
    pub pending: RwSignal<Option<ConfirmRequest>>,
}

impl ConfirmState {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
        }
    }

    /// Opens the confirmation modal. Returns `false` (and leaves the existing
    /// request untouched) when one is already pending.
    pub fn request(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: Arc<dyn Fn() + Send + Sync>,
    ) -> bool {
        if self.pending.with_untracked(|p| p.is_some()) {
            log::warn!("confirmation request dropped: another confirmation is already pending");
            return false;
        }
        self.pending.set(Some(ConfirmRequest {
            title: title.into(),
            message: message.into(),
            on_confirm,
        }));
        true
    }

    /// Runs the pending callback and closes the modal.
    pub fn confirm(&self) {
        let taken = self.pending.with_untracked(|p| p.clone());
        self.pending.set(None);
        if let Some(request) = taken {
            (request.on_confirm)();
        }
    }

    /// Closes the modal without invoking the callback.
    pub fn cancel(&self) {
        self.pending.set(None);
    }

    pub fn is_open(&self) -> bool {
        self.pending.with_untracked(|p| p.is_some())
    }
}

impl Default for ConfirmState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_confirm_state() -> ConfirmState {
    let state = ConfirmState::new();
    provide_context(state);
    state
}

pub fn use_confirm_state() -> ConfirmState {
    expect_context::<ConfirmState>()
}
