use leptos::prelude::*;

use crate::api::{self, Document};
use crate::services::notification_service::NotificationState;

/// The two places a document list is shown independently: the browsing view
/// and the chat-side document picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Main,
    Chat,
}

/// Case-insensitive substring match on filename. Empty query returns the
/// full set unchanged in order. Never touches the network.
pub fn filter_documents(documents: &[Document], query: &str) -> Vec<Document> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return documents.to_vec();
    }
    documents
        .iter()
        .filter(|doc| doc.filename.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Client-side cache of the last-fetched document list per scope, with a
/// per-scope filter query applied at render time only.
#[derive(Clone, Copy)]
pub struct DocumentRegistry {
    pub main_documents: RwSignal<Vec<Document>>,
    pub chat_documents: RwSignal<Vec<Document>>,
    pub main_query: RwSignal<String>,
    pub chat_query: RwSignal<String>,
    notices: NotificationState,
}

impl DocumentRegistry {
    pub fn new(notices: NotificationState) -> Self {
        Self {
            main_documents: RwSignal::new(Vec::new()),
            chat_documents: RwSignal::new(Vec::new()),
            main_query: RwSignal::new(String::new()),
            chat_query: RwSignal::new(String::new()),
            notices,
        }
    }

    fn documents(&self, scope: Scope) -> RwSignal<Vec<Document>> {
        match scope {
            Scope::Main => self.main_documents,
            Scope::Chat => self.chat_documents,
        }
    }

    pub fn query(&self, scope: Scope) -> RwSignal<String> {
        match scope {
            Scope::Main => self.main_query,
            Scope::Chat => self.chat_query,
        }
    }

    /// Replaces the cached full set for a scope.
    pub fn set(&self, scope: Scope, documents: Vec<Document>) {
        self.documents(scope).set(documents);
    }

    /// The filtered view of a scope's cached set. Reactive in both the cached
    /// set and the query; the cached set itself is never mutated by filtering.
    pub fn visible(&self, scope: Scope) -> Vec<Document> {
        let query = self.query(scope).get();
        self.documents(scope)
            .with(|docs| filter_documents(docs, &query))
    }

    pub fn cached(&self, scope: Scope) -> Vec<Document> {
        self.documents(scope).get()
    }

    pub fn contains(&self, scope: Scope, id: &str) -> bool {
        self.documents(scope)
            .with_untracked(|docs| docs.iter().any(|d| d.id == id))
    }

    pub fn find(&self, scope: Scope, id: &str) -> Option<Document> {
        self.documents(scope)
            .with_untracked(|docs| docs.iter().find(|d| d.id == id).cloned())
    }

    /// Fetches the full list for a scope and replaces the cache. On failure
    /// the cache is cleared so the view falls back to its empty state.
    pub async fn refresh(&self, scope: Scope) {
        match api::documents::list_documents().await {
            Ok(documents) => self.set(scope, documents),
            Err(err) => {
                self.notices.error(format!("Failed to load documents: {err}"));
                self.set(scope, Vec::new());
            }
        }
    }
}

pub fn use_document_registry() -> DocumentRegistry {
    expect_context::<DocumentRegistry>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, filename: &str) -> Document {
        Document {
            id: id.to_string(),
            filename: filename.to_string(),
            upload_date: "2024-01-01T00:00:00+00:00".to_string(),
            file_size: Some(1024.0),
        }
    }

    #[test]
    fn test_filter_empty_query_returns_full_set_in_order() {
        let docs = vec![doc("1", "b.pdf"), doc("2", "a.pdf"), doc("3", "c.txt")];
        let filtered = filter_documents(&docs, "");
        assert_eq!(filtered, docs);
    }

    #[test]
    fn test_filter_whitespace_query_returns_full_set() {
        let docs = vec![doc("1", "report.pdf")];
        assert_eq!(filter_documents(&docs, "   "), docs);
    }

    #[test]
    fn test_filter_case_insensitive_substring() {
        let docs = vec![
            doc("1", "Annual-Report.pdf"),
            doc("2", "notes.txt"),
            doc("3", "REPORT-2024.docx"),
        ];
        let filtered = filter_documents(&docs, "report");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "1");
        assert_eq!(filtered[1].id, "3");
    }

    #[test]
    fn test_filter_no_match_returns_empty() {
        let docs = vec![doc("1", "a.pdf")];
        assert!(filter_documents(&docs, "zzz").is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let docs = vec![doc("1", "a.pdf"), doc("2", "b.pdf")];
        let before = docs.clone();
        let _ = filter_documents(&docs, "a");
        assert_eq!(docs, before);
    }
}
