use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, AdminStats, Document, HistoryEntry};
use crate::services::confirm_service::ConfirmState;
use crate::services::notification_service::NotificationState;

/// How many activity rows the activity tab shows at most.
pub const MAX_ACTIVITY_ROWS: usize = 30;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Documents,
    Activity,
}

impl AdminTab {
    pub fn all() -> &'static [AdminTab] {
        &[AdminTab::Documents, AdminTab::Activity]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Documents => "Documents",
            AdminTab::Activity => "Activity",
        }
    }
}

/// Demo-admin dashboard state: stats cards plus the two tabbed lists. All of
/// it is server data re-fetched on every visit.
#[derive(Clone, Copy)]
pub struct AdminState {
    pub stats: RwSignal<Option<AdminStats>>,
    pub stats_failed: RwSignal<bool>,
    pub documents: RwSignal<Vec<Document>>,
    pub activity: RwSignal<Vec<HistoryEntry>>,
    pub active_tab: RwSignal<AdminTab>,
    notices: NotificationState,
    confirm: ConfirmState,
}

impl AdminState {
    pub fn new(notices: NotificationState, confirm: ConfirmState) -> Self {
        Self {
            stats: RwSignal::new(None),
            stats_failed: RwSignal::new(false),
            documents: RwSignal::new(Vec::new()),
            activity: RwSignal::new(Vec::new()),
            active_tab: RwSignal::new(AdminTab::default()),
            notices,
            confirm,
        }
    }

    /// Admin-section load: stats first, then whichever tab is active.
    pub async fn refresh(&self) {
        match api::admin::admin_stats().await {
            Ok(stats) => {
                self.stats.set(Some(stats));
                self.stats_failed.set(false);
            }
            Err(err) => {
                self.notices
                    .error(format!("Failed to load admin statistics: {err}"));
                self.stats.set(None);
                self.stats_failed.set(true);
            }
        }
        self.load_tab(self.active_tab.get_untracked()).await;
    }

    pub async fn load_tab(&self, tab: AdminTab) {
        match tab {
            AdminTab::Documents => match api::admin::admin_documents().await {
                Ok(documents) => self.documents.set(documents),
                Err(err) => {
                    self.notices
                        .error(format!("Failed to load the document list: {err}"));
                    self.documents.set(Vec::new());
                }
            },
            AdminTab::Activity => match api::admin::admin_activity().await {
                Ok(mut entries) => {
                    entries.truncate(MAX_ACTIVITY_ROWS);
                    self.activity.set(entries);
                }
                Err(err) => {
                    self.notices
                        .error(format!("Failed to load system activity: {err}"));
                    self.activity.set(Vec::new());
                }
            },
        }
    }

    pub fn switch_tab(&self, tab: AdminTab) {
        if self.active_tab.get_untracked() == tab {
            return;
        }
        self.active_tab.set(tab);
        let service = *self;
        spawn_local(async move {
            service.load_tab(tab).await;
        });
    }

    pub fn delete_document(&self, id: &str, filename: &str) {
        let service = *self;
        let id = id.to_string();
        let filename = filename.to_string();
        self.confirm.request(
            "Delete Document",
            format!("Are you sure you want to delete \"{filename}\"? This cannot be undone."),
            Arc::new(move || {
                let id = id.clone();
                let filename = filename.clone();
                spawn_local(async move {
                    match api::admin::admin_delete_document(&id).await {
                        Ok(()) => {
                            service
                                .notices
                                .success(format!("Document \"{filename}\" deleted."));
                            service.load_tab(AdminTab::Documents).await;
                        }
                        Err(err) => {
                            service
                                .notices
                                .error(format!("Failed to delete document: {err}"));
                        }
                    }
                });
            }),
        );
    }
}

pub fn use_admin_state() -> AdminState {
    expect_context::<AdminState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_documents() {
        assert_eq!(AdminTab::default(), AdminTab::Documents);
    }

    #[test]
    fn test_all_tabs() {
        assert_eq!(AdminTab::all(), &[AdminTab::Documents, AdminTab::Activity]);
    }

    #[test]
    fn test_tab_labels_non_empty() {
        for tab in AdminTab::all() {
            assert!(!tab.label().is_empty());
        }
    }
}
