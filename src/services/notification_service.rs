use leptos::prelude::*;
use uuid::Uuid;

/// Default lifetime of a transient notice.
pub const DEFAULT_NOTICE_MS: u64 = 5000;

/// Longer lifetime used for per-file validation notices, which users tend to
/// read one by one.
pub const VALIDATION_NOTICE_MS: u64 = 7000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "border-[var(--success)]",
            Severity::Error => "border-[var(--error)]",
            Severity::Warning => "border-[var(--warning)]",
            Severity::Info => "border-[var(--accent)]",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "⚠",
            Severity::Warning => "!",
            Severity::Info => "i",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub severity: Severity,
    pub message: String,
    pub duration_ms: u64,
}

/// Transient, auto-dismissing notices. Append-only with independently timed
/// removal; several may be visible at once and duplicates are not collapsed.
#[derive(Clone, Copy)]
pub struct NotificationState {
    pub notifications: RwSignal<Vec<Notification>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(Vec::new()),
        }
    }

    pub fn notify(&self, severity: Severity, message: impl Into<String>, duration_ms: u64) -> Uuid {
        let id = Uuid::new_v4();
        let notification = Notification {
            id,
            severity,
            message: message.into(),
            duration_ms,
        };
        self.notifications.update(|list| list.push(notification));
        id
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(Severity::Success, message, DEFAULT_NOTICE_MS);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Severity::Error, message, DEFAULT_NOTICE_MS);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(Severity::Info, message, DEFAULT_NOTICE_MS);
    }

    pub fn remove(&self, id: Uuid) {
        self.notifications.update(|list| {
            if let Some(pos) = list.iter().position(|n| n.id == id) {
                list.remove(pos);
            }
        });
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notification_state() -> NotificationState {
    let state = NotificationState::new();
    provide_context(state);
    state
}

pub fn use_notification_state() -> NotificationState {
    expect_context::<NotificationState>()
}

pub fn remove_notification(id: Uuid) {
    if let Some(state) = use_context::<NotificationState>() {
        state.remove(id);
    }
}
