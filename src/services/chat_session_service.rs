use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, ChatRequest};
use crate::services::document_registry::{DocumentRegistry, Scope};
use crate::services::notification_service::NotificationState;
use crate::utils::formatting::now_iso;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

/// Message in the in-memory transcript for the active document.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub content: String,
    pub sender: Sender,
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActiveDocument {
    pub id: String,
    pub filename: String,
}

/// Headless chat-session state machine: which document is active and what
/// messages belong to the current session.
///
/// Invariant: the transcript is non-empty only while a document is active,
/// and activating a different document always clears it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    pub active: Option<ActiveDocument>,
    pub transcript: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_document_id(&self) -> Option<&str> {
        self.active.as_ref().map(|d| d.id.as_str())
    }

    pub fn activate(&mut self, id: impl Into<String>, filename: impl Into<String>) {
        self.active = Some(ActiveDocument {
            id: id.into(),
            filename: filename.into(),
        });
        self.transcript.clear();
    }

    pub fn reset(&mut self) {
        self.active = None;
        self.transcript.clear();
    }

    /// Appends a message. Refused while idle so the transcript can never
    /// outlive a selection.
    pub fn push(&mut self, sender: Sender, content: impl Into<String>, timestamp: String) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.transcript.push(ChatMessage {
            content: content.into(),
            sender,
            timestamp,
        });
        true
    }
}

/// Reactive wrapper driving message submission and the chat-side document
/// picker. Rendering subscribes to the signals; all transitions go through
/// the headless [`ChatSession`] core.
#[derive(Clone, Copy)]
pub struct ChatSessionService {
    pub session: RwSignal<ChatSession>,
    pub input: RwSignal<String>,
    pub is_sending: RwSignal<bool>,
    pub predefined_questions: RwSignal<Vec<String>>,
    registry: DocumentRegistry,
    notices: NotificationState,
}

impl ChatSessionService {
    pub fn new(registry: DocumentRegistry, notices: NotificationState) -> Self {
        Self {
            session: RwSignal::new(ChatSession::default()),
            input: RwSignal::new(String::new()),
            is_sending: RwSignal::new(false),
            predefined_questions: RwSignal::new(Vec::new()),
            registry,
            notices,
        }
    }

    /// Activates a document: empty transcript, cleared picker filter, and a
    /// best-effort predefined-question load (failures are logged, not
    /// surfaced).
    pub fn activate(&self, id: &str, filename: &str) {
        self.session.update(|s| s.activate(id, filename));
        self.predefined_questions.set(Vec::new());
        self.registry.query(Scope::Chat).set(String::new());

        let service = *self;
        let document_id = id.to_string();
        spawn_local(async move {
            match api::chat::predefined_questions(&document_id).await {
                Ok(response) => service.predefined_questions.set(response.questions),
                Err(err) => log::warn!("failed to load predefined questions: {err}"),
            }
        });
    }

    /// Back to idle: no active document, empty transcript, chat-side search
    /// filter cleared.
    pub fn reset(&self) {
        self.session.update(|s| s.reset());
        self.predefined_questions.set(Vec::new());
        self.registry.query(Scope::Chat).set(String::new());
    }

    /// Submits a message for the active document. The user's message is
    /// echoed into the transcript before the network call resolves; the
    /// assistant's reply (or a generic failure message) follows when it does.
    pub fn send(&self, text: &str, is_predefined: bool) {
        if self.session.with_untracked(|s| !s.is_active()) {
            self.notices
                .error("Select a document first to start chatting.");
            return;
        }
        let message = text.trim().to_string();
        if message.is_empty() {
            self.notices.info("Type your question in the input field.");
            return;
        }
        if self.is_sending.get_untracked() {
            return;
        }

        let document_id = self
            .session
            .with_untracked(|s| s.active.as_ref().map(|d| d.id.clone()))
            .unwrap_or_default();

        self.session
            .update(|s| drop(s.push(Sender::User, message.clone(), now_iso())));
        if !is_predefined {
            self.input.set(String::new());
        }
        self.is_sending.set(true);

        let service = *self;
        spawn_local(async move {
            let request = ChatRequest {
                message,
                document_ids: vec![document_id],
                is_predefined,
            };
            match api::chat::send_chat(&request).await {
                Ok(response) => {
                    service
                        .session
                        .update(|s| drop(s.push(Sender::Assistant, response.response, now_iso())));
                }
                Err(err) => {
                    service.notices.error(format!("Chat error: {err}"));
                    service.session.update(|s| {
                        drop(s.push(
                            Sender::Assistant,
                            "Sorry, something went wrong while processing your question.",
                            now_iso(),
                        ))
                    });
                }
            }
            service.is_sending.set(false);
        });
    }

    /// Chat-section load: refresh the picker list, then reconcile the
    /// selection against it. A selection that vanished server-side drops the
    /// session back to idle; one that survived is re-activated.
    pub async fn sync_documents(&self) {
        self.registry.refresh(Scope::Chat).await;
        let selected = self.session.with_untracked(|s| s.active.clone());
        match selected {
            Some(active) if self.registry.contains(Scope::Chat, &active.id) => {
                self.activate(&active.id, &active.filename);
            }
            Some(_) => self.reset(),
            None => {}
        }
    }
}

pub fn use_chat_session() -> ChatSessionService {
    expect_context::<ChatSessionService>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts() -> String {
        "2024-01-01T00:00:00+00:00".to_string()
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = ChatSession::default();
        assert!(!session.is_active());
        assert!(session.transcript.is_empty());
    }

    #[test]
    fn test_activate_sets_document_and_clears_transcript() {
        let mut session = ChatSession::default();
        session.activate("doc-a", "a.pdf");
        assert!(session.push(Sender::User, "hello", ts()));
        assert_eq!(session.transcript.len(), 1);

        session.activate("doc-b", "b.pdf");
        assert_eq!(session.active.as_ref().unwrap().id, "doc-b");
        assert!(session.transcript.is_empty());
    }

    #[test]
    fn test_reactivating_same_document_clears_transcript() {
        let mut session = ChatSession::default();
        session.activate("doc-a", "a.pdf");
        session.push(Sender::User, "hello", ts());
        session.activate("doc-a", "a.pdf");
        assert!(session.transcript.is_empty());
    }

    #[test]
    fn test_push_refused_while_idle() {
        let mut session = ChatSession::default();
        assert!(!session.push(Sender::User, "hello", ts()));
        assert!(session.transcript.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = ChatSession::default();
        session.activate("doc-a", "a.pdf");
        session.push(Sender::User, "hello", ts());
        session.reset();
        assert!(!session.is_active());
        assert!(session.transcript.is_empty());
    }

    #[test]
    fn test_transcript_order_user_then_assistant() {
        let mut session = ChatSession::default();
        session.activate("doc-a", "a.pdf");
        session.push(Sender::User, "hello", ts());
        session.push(Sender::Assistant, "hi there", ts());
        assert_eq!(session.transcript[0].sender, Sender::User);
        assert_eq!(session.transcript[0].content, "hello");
        assert_eq!(session.transcript[1].sender, Sender::Assistant);
        assert_eq!(session.transcript[1].content, "hi there");
    }

    #[test]
    fn test_sender_as_str() {
        assert_eq!(Sender::User.as_str(), "user");
        assert_eq!(Sender::Assistant.as_str(), "assistant");
    }
}
