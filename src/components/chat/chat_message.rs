use leptos::prelude::*;

use crate::services::chat_session_service::{ChatMessage, Sender};
use crate::utils::formatting::format_time;

/// A single transcript message with sender-based alignment and styling.
#[component]
pub fn TranscriptMessage(message: ChatMessage) -> impl IntoView {
    let is_user = message.sender == Sender::User;

    let container_class = if is_user {
        "bg-blue-900/40 p-3 rounded-lg max-w-3xl ml-auto border border-blue-800"
    } else {
        "bg-gray-800 p-3 rounded-lg max-w-3xl border border-gray-700"
    };
    let label = if is_user { "You" } else { "Assistant" };

    view! {
        <div class=container_class>
            <div class="flex items-baseline justify-between gap-4 mb-1">
                <span class="text-xs font-medium text-gray-400">{label}</span>
                <span class="text-xs text-gray-500">{format_time(&message.timestamp)}</span>
            </div>
            <p class="text-gray-200 whitespace-pre-wrap break-words">{message.content}</p>
        </div>
    }
}
