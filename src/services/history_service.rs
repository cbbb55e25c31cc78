use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, HistoryEntry};
use crate::services::confirm_service::ConfirmState;
use crate::services::notification_service::NotificationState;

/// Success notice for a clear-all, always naming how many rows went away.
fn delete_all_notice(count: u64) -> String {
    format!("Chat history cleared ({count} entries deleted).")
}

/// Server-sourced chat history. Nothing is cached beyond the current render;
/// every mutation reloads the list.
#[derive(Clone, Copy)]
pub struct HistoryState {
    pub entries: RwSignal<Vec<HistoryEntry>>,
    notices: NotificationState,
    confirm: ConfirmState,
}

impl HistoryState {
    pub fn new(notices: NotificationState, confirm: ConfirmState) -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            notices,
            confirm,
        }
    }

    pub async fn refresh(&self) {
        match api::history::list_history().await {
            Ok(entries) => self.entries.set(entries),
            Err(err) => {
                self.notices
                    .error(format!("Failed to load chat history: {err}"));
                self.entries.set(Vec::new());
            }
        }
    }

    pub fn delete_entry(&self, id: i64) {
        let service = *self;
        self.confirm.request(
            "Delete History Entry",
            "Are you sure you want to delete this conversation? This cannot be undone.",
            Arc::new(move || {
                spawn_local(async move {
                    match api::history::delete_history_entry(id).await {
                        Ok(()) => {
                            service.notices.success("History entry deleted.");
                            service.refresh().await;
                        }
                        Err(err) => {
                            service
                                .notices
                                .error(format!("Failed to delete history entry: {err}"));
                        }
                    }
                });
            }),
        );
    }

    pub fn delete_all(&self) {
        let service = *self;
        self.confirm.request(
            "Delete All History",
            "Are you sure you want to delete your entire chat history? This cannot be undone.",
            Arc::new(move || {
                spawn_local(async move {
                    match api::history::delete_all_history().await {
                        Ok(response) => {
                            service
                                .notices
                                .success(delete_all_notice(response.deleted_count));
                            service.refresh().await;
                        }
                        Err(err) => {
                            service
                                .notices
                                .error(format!("Failed to clear chat history: {err}"));
                        }
                    }
                });
            }),
        );
    }
}

pub fn use_history_state() -> HistoryState {
    expect_context::<HistoryState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_all_notice_includes_the_count() {
        assert_eq!(
            delete_all_notice(7),
            "Chat history cleared (7 entries deleted)."
        );
    }

    #[test]
    fn test_delete_all_notice_zero_entries() {
        assert!(delete_all_notice(0).contains("0 entries"));
    }
}
