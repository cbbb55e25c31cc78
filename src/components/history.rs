use leptos::prelude::*;

use crate::components::design_system::{
    Button, ButtonVariant, Card, CardBody, CardHeader, EmptyState,
};
use crate::services::history_service::use_history_state;
use crate::utils::formatting::format_date;

/// History section: every stored conversation, newest first per the server,
/// with per-entry delete and a clear-all action.
#[component]
pub fn HistorySection() -> impl IntoView {
    let history = use_history_state();

    view! {
        <div class="flex flex-col gap-4">
            <div class="flex items-center justify-between gap-4 flex-wrap">
                <h2 class="text-lg font-semibold text-white">"Chat History"</h2>
                <Show when=move || history.entries.with(|e| !e.is_empty())>
                    <Button
                        variant=ButtonVariant::Danger
                        class="text-sm"
                        on_click=move |_| history.delete_all()
                    >
                        "Clear All History"
                    </Button>
                </Show>
            </div>

            <Show
                when=move || history.entries.with(|e| !e.is_empty())
                fallback=|| view! { <EmptyState message="No chat history yet." /> }
            >
                <div class="flex flex-col gap-3">
                    {move || {
                        history
                            .entries
                            .get()
                            .into_iter()
                            .map(|entry| {
                                let id = entry.id;
                                view! {
                                    <Card>
                                        <CardHeader>
                                            <div class="flex items-center justify-between gap-2">
                                                <span class="text-sm text-gray-400">
                                                    {format_date(&entry.timestamp)}
                                                    {(!entry.document_ids.is_empty())
                                                        .then(|| format!(
                                                            " · {} document(s)",
                                                            entry.document_ids.len()
                                                        ))}
                                                </span>
                                                <Button
                                                    variant=ButtonVariant::Ghost
                                                    class="text-sm px-2 py-1"
                                                    title="Delete entry"
                                                    on_click=move |_| history.delete_entry(id)
                                                >
                                                    "×"
                                                </Button>
                                            </div>
                                        </CardHeader>
                                        <CardBody>
                                            <p class="text-gray-200 font-medium mb-2">
                                                "Q: " {entry.message.clone()}
                                            </p>
                                            <p class="text-gray-400 whitespace-pre-wrap break-words">
                                                "A: " {entry.response.clone()}
                                            </p>
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
