use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::design_system::{
    Button, ButtonVariant, Card, CardBody, CardHeader, EmptyState, Input,
};
use crate::services::chat_session_service::use_chat_session;
use crate::services::confirm_service::use_confirm_state;
use crate::services::document_registry::{use_document_registry, Scope};
use crate::services::navigation_service::{use_navigation, Section};
use crate::services::notification_service::use_notification_state;
use crate::utils::formatting::{format_date, format_file_size};

/// Documents section: searchable card grid of everything uploaded, with
/// per-document chat and delete actions.
#[component]
pub fn DocumentsSection() -> impl IntoView {
    let registry = use_document_registry();
    let chat = use_chat_session();
    let nav = use_navigation();
    let confirm = use_confirm_state();
    let notices = use_notification_state();

    let start_chat = move |id: String, filename: String| {
        chat.activate(&id, &filename);
        notices.info(format!("Now chatting with \"{filename}\"."));
        nav.navigate_to(Section::Chat);
    };

    let delete_document = move |id: String, filename: String| {
        confirm.request(
            "Delete Document",
            format!("Are you sure you want to delete \"{filename}\"? This cannot be undone."),
            Arc::new(move || {
                let id = id.clone();
                let filename = filename.clone();
                spawn_local(async move {
                    match api::documents::delete_document(&id).await {
                        Ok(()) => {
                            notices.success(format!("Document \"{filename}\" deleted."));
                            registry.refresh(Scope::Main).await;
                        }
                        Err(err) => {
                            notices.error(format!("Failed to delete document: {err}"));
                        }
                    }
                });
            }),
        );
    };

    let empty_message = move || {
        if registry.main_query.with(|q| q.trim().is_empty()) {
            "No documents uploaded yet. Head to the Upload tab to add some."
        } else {
            "No documents match your search."
        }
    };

    view! {
        <div class="flex flex-col gap-4">
            <div class="flex items-center justify-between gap-4 flex-wrap">
                <h2 class="text-lg font-semibold text-white">"Your Documents"</h2>
                <div class="w-full sm:w-64">
                    <Input
                        value=registry.query(Scope::Main)
                        placeholder="Search documents..."
                    />
                </div>
            </div>

            <Show
                when=move || !registry.visible(Scope::Main).is_empty()
                fallback=move || view! { <EmptyState message=empty_message() /> }
            >
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    {move || {
                        registry
                            .visible(Scope::Main)
                            .into_iter()
                            .map(|doc| {
                                let chat_id = doc.id.clone();
                                let chat_name = doc.filename.clone();
                                let delete_id = doc.id.clone();
                                let delete_name = doc.filename.clone();
                                let size = doc
                                    .file_size
                                    .map(format_file_size)
                                    .unwrap_or_else(|| "Unknown size".to_string());
                                view! {
                                    <Card>
                                        <CardHeader>
                                            <p class="font-medium text-white truncate" title=doc.filename.clone()>
                                                {doc.filename.clone()}
                                            </p>
                                        </CardHeader>
                                        <CardBody>
                                            <p class="text-sm text-gray-400">
                                                {format_date(&doc.upload_date)}
                                            </p>
                                            <p class="text-sm text-gray-500">{size}</p>
                                            <div class="mt-3 flex gap-2">
                                                <Button
                                                    class="text-sm"
                                                    on_click=move |_| start_chat(
                                                        chat_id.clone(),
                                                        chat_name.clone(),
                                                    )
                                                >
                                                    "Chat"
                                                </Button>
                                                <Button
                                                    variant=ButtonVariant::Danger
                                                    class="text-sm"
                                                    on_click=move |_| delete_document(
                                                        delete_id.clone(),
                                                        delete_name.clone(),
                                                    )
                                                >
                                                    "Delete"
                                                </Button>
                                            </div>
                                        </CardBody>
                                    </Card>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
