//! Document listing, upload and deletion endpoints.

use serde::{Deserialize, Serialize};

use super::ApiError;

/// A document as the server reports it. The client never mutates one; it
/// only lists, filters and deletes by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub filename: String,
    pub upload_date: String,
    #[serde(default)]
    pub file_size: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentListResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadedDocument {
    pub document_id: String,
    pub filename: String,
    #[serde(default)]
    pub size: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub uploaded_documents: Vec<UploadedDocument>,
    #[serde(default)]
    pub message: String,
}

/// GET /documents
pub async fn list_documents() -> Result<Vec<Document>, ApiError> {
    let response: DocumentListResponse = super::get_json("/documents").await?;
    Ok(response.documents)
}

/// POST /upload with all staged files under the multipart field `files`.
pub async fn upload_documents(form: web_sys::FormData) -> Result<UploadResponse, ApiError> {
    super::post_multipart("/upload", form).await
}

/// DELETE /documents/{id}
pub async fn delete_document(id: &str) -> Result<(), ApiError> {
    super::delete(&format!("/documents/{id}")).await
}
