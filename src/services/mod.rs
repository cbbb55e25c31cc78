pub mod admin_service;
pub mod chat_session_service;
pub mod confirm_service;
pub mod document_registry;
pub mod history_service;
pub mod navigation_service;
pub mod notification_service;
pub mod upload_service;
