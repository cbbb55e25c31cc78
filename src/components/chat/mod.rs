mod chat_message;

pub use chat_message::TranscriptMessage;

use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::components::design_system::{Button, ButtonVariant, EmptyState, Input};
use crate::services::chat_session_service::use_chat_session;
use crate::services::document_registry::{use_document_registry, Scope};

/// Chat section: document picker on the left, transcript and composer on the
/// right. The composer stays disabled until a document is selected.
#[component]
pub fn ChatSection() -> impl IntoView {
    let chat = use_chat_session();
    let registry = use_document_registry();
    let input_ref = NodeRef::<html::Input>::new();

    let is_idle = Signal::derive(move || chat.session.with(|s| !s.is_active()));
    let composer_disabled =
        Signal::derive(move || is_idle.get() || chat.is_sending.get());

    // Return focus to the composer once a reply lands.
    Effect::new(move |_| {
        if !chat.is_sending.get() && !is_idle.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let submit = move || {
        let text = chat.input.get_untracked();
        chat.send(&text, false);
    };

    let handle_keydown = move |evt: ev::KeyboardEvent| {
        if evt.key() == "Enter" {
            submit();
        }
    };

    let active_banner = move || {
        chat.session.with(|s| {
            s.active.as_ref().map(|doc| {
                let filename = doc.filename.clone();
                view! {
                    <div class="flex items-center justify-between gap-2 p-2 rounded bg-gray-800 border border-gray-700">
                        <span class="text-sm text-gray-300 truncate">
                            "Chatting with " <span class="font-medium text-white">{filename}</span>
                        </span>
                        <Button
                            variant=ButtonVariant::Ghost
                            class="text-sm px-2 py-1"
                            title="Clear selection"
                            on_click=move |_| chat.reset()
                        >
                            "×"
                        </Button>
                    </div>
                }
            })
        })
    };

    view! {
        <div class="flex flex-col lg:flex-row gap-4">
            <aside class="lg:w-64 flex-shrink-0 flex flex-col gap-2">
                <h3 class="font-medium text-white">"Documents"</h3>
                <Input
                    value=registry.query(Scope::Chat)
                    placeholder="Search..."
                />
                <Show
                    when=move || !registry.visible(Scope::Chat).is_empty()
                    fallback=|| view! { <EmptyState message="No documents available." /> }
                >
                    <ul class="flex flex-col gap-1 max-h-80 overflow-y-auto">
                        {move || {
                            let active_id = chat
                                .session
                                .with(|s| s.active.as_ref().map(|d| d.id.clone()));
                            registry
                                .visible(Scope::Chat)
                                .into_iter()
                                .map(|doc| {
                                    let selected = active_id.as_deref() == Some(doc.id.as_str());
                                    let item_class = if selected {
                                        "w-full text-left p-2 rounded text-sm bg-blue-600 text-white truncate"
                                    } else {
                                        "w-full text-left p-2 rounded text-sm text-gray-300 hover:bg-gray-700 truncate transition-colors"
                                    };
                                    let id = doc.id.clone();
                                    let filename = doc.filename.clone();
                                    view! {
                                        <li>
                                            <button
                                                class=item_class
                                                title=doc.filename.clone()
                                                on:click=move |_| chat.activate(&id, &filename)
                                            >
                                                {doc.filename.clone()}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </aside>

            <div class="flex-1 flex flex-col gap-3 min-w-0">
                {active_banner}

                <div class="flex-1 min-h-64 max-h-[60vh] overflow-y-auto flex flex-col gap-2 p-3 rounded bg-gray-900 border border-gray-700">
                    {move || {
                        let transcript = chat.session.with(|s| s.transcript.clone());
                        if transcript.is_empty() {
                            let message = if is_idle.get() {
                                "Select a document to start chatting."
                            } else {
                                "Ask your first question about this document."
                            };
                            view! { <EmptyState message=message /> }.into_any()
                        } else {
                            transcript
                                .into_iter()
                                .map(|message| view! { <TranscriptMessage message=message /> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>

                <Show when=move || chat.predefined_questions.with(|q| !q.is_empty())>
                    <div class="flex gap-2 flex-wrap">
                        {move || {
                            chat.predefined_questions
                                .get()
                                .into_iter()
                                .map(|question| {
                                    let text = question.clone();
                                    view! {
                                        <Button
                                            variant=ButtonVariant::Secondary
                                            class="text-xs"
                                            disabled=composer_disabled
                                            on_click=move |_| chat.send(&text, true)
                                        >
                                            {question}
                                        </Button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>

                <div class="flex gap-2">
                    <Input
                        value=chat.input
                        node_ref=input_ref
                        placeholder="Ask a question about the selected document..."
                        disabled=composer_disabled
                        on_keydown=handle_keydown
                    />
                    <Button
                        disabled=composer_disabled
                        loading=Signal::derive(move || chat.is_sending.get())
                        on_click=move |_| submit()
                    >
                        "Send"
                    </Button>
                </div>
            </div>
        </div>
    }
}
