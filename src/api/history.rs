//! Durable chat-history endpoints.

use serde::Deserialize;

use super::ApiError;

/// One persisted question/answer pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub message: String,
    pub response: String,
    pub timestamp: String,
    #[serde(default)]
    pub is_predefined: bool,
    #[serde(default)]
    pub document_ids: Vec<String>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct HistoryListResponse {
    #[serde(default)]
    pub(crate) history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteAllResponse {
    #[serde(default)]
    pub deleted_count: u64,
}

/// GET /history
pub async fn list_history() -> Result<Vec<HistoryEntry>, ApiError> {
    let response: HistoryListResponse = super::get_json("/history").await?;
    Ok(response.history)
}

/// DELETE /history/{id}
pub async fn delete_history_entry(id: i64) -> Result<(), ApiError> {
    super::delete(&format!("/history/{id}")).await
}

/// DELETE /history - removes everything, reports how many rows went away.
pub async fn delete_all_history() -> Result<DeleteAllResponse, ApiError> {
    super::delete_json("/history").await
}
