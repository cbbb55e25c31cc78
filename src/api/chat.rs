//! Chat and predefined-question endpoints.

use serde::{Deserialize, Serialize};

use super::ApiError;

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub document_ids: Vec<String>,
    pub is_predefined: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredefinedQuestions {
    #[serde(default)]
    pub questions: Vec<String>,
}

/// POST /chat
pub async fn send_chat(request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    super::post_json("/chat", request).await
}

/// GET /predefined-questions/{id}
pub async fn predefined_questions(document_id: &str) -> Result<PredefinedQuestions, ApiError> {
    super::get_json(&format!("/predefined-questions/{document_id}")).await
}
