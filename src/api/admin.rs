//! Demo-admin endpoints.
//!
//! Every path here carries the `is_admin_query=true` flag. That flag is a
//! demo gate shared with the backend, not an authorization mechanism.

use serde::Deserialize;

use super::documents::{Document, DocumentListResponse};
use super::history::{HistoryEntry, HistoryListResponse};
use super::ApiError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityEntry {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub username: Option<String>,
    pub description: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminStats {
    pub total_documents: u64,
    pub total_chats: u64,
    #[serde(default)]
    pub recent_activity: Vec<ActivityEntry>,
}

/// GET /admin/stats?is_admin_query=true
pub async fn admin_stats() -> Result<AdminStats, ApiError> {
    super::get_json("/admin/stats?is_admin_query=true").await
}

/// GET /admin/documents?is_admin_query=true
pub async fn admin_documents() -> Result<Vec<Document>, ApiError> {
    let response: DocumentListResponse =
        super::get_json("/admin/documents?is_admin_query=true").await?;
    Ok(response.documents)
}

/// GET /history?is_admin_query=true - system-wide chat activity feed.
pub async fn admin_activity() -> Result<Vec<HistoryEntry>, ApiError> {
    let response: HistoryListResponse = super::get_json("/history?is_admin_query=true").await?;
    Ok(response.history)
}

/// DELETE /admin/documents/{id}?is_admin_query=true
pub async fn admin_delete_document(id: &str) -> Result<(), ApiError> {
    super::delete(&format!("/admin/documents/{id}?is_admin_query=true")).await
}
