use leptos::prelude::*;

use crate::components::design_system::{
    Button, ButtonVariant, Card, CardBody, CardHeader, EmptyState,
};
use crate::services::admin_service::{use_admin_state, AdminTab};
use crate::utils::formatting::{format_date, format_file_size, preview};

/// Admin section: stats cards, a recent-activity strip, and tabbed lists of
/// all documents and the system-wide chat activity.
#[component]
pub fn AdminSection() -> impl IntoView {
    let admin = use_admin_state();

    view! {
        <div class="flex flex-col gap-4">
            <h2 class="text-lg font-semibold text-white">"Admin Dashboard"</h2>
            <StatsCards />

            <div class="flex gap-1 border-b border-gray-700">
                {AdminTab::all()
                    .iter()
                    .copied()
                    .map(|tab| {
                        let tab_class = move || {
                            if admin.active_tab.get() == tab {
                                "px-4 py-2 text-sm font-medium text-white border-b-2 border-blue-500"
                            } else {
                                "px-4 py-2 text-sm font-medium text-gray-400 hover:text-white transition-colors"
                            }
                        };
                        view! {
                            <button class=tab_class on:click=move |_| admin.switch_tab(tab)>
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || match admin.active_tab.get() {
                AdminTab::Documents => view! { <AdminDocuments /> }.into_any(),
                AdminTab::Activity => view! { <AdminActivity /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn StatsCards() -> impl IntoView {
    let admin = use_admin_state();

    view! {
        {move || {
            if admin.stats_failed.get() {
                return view! {
                    <EmptyState message="Statistics are unavailable right now." />
                }
                .into_any();
            }
            match admin.stats.get() {
                None => view! {
                    <EmptyState message="Loading statistics..." />
                }
                .into_any(),
                Some(stats) => {
                    let activity = stats.recent_activity.clone();
                    view! {
                        <div class="flex flex-col gap-3">
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                <Card>
                                    <CardBody>
                                        <p class="text-3xl font-bold text-white">
                                            {stats.total_documents}
                                        </p>
                                        <p class="text-sm text-gray-400">"Total documents"</p>
                                    </CardBody>
                                </Card>
                                <Card>
                                    <CardBody>
                                        <p class="text-3xl font-bold text-white">
                                            {stats.total_chats}
                                        </p>
                                        <p class="text-sm text-gray-400">"Total chats"</p>
                                    </CardBody>
                                </Card>
                            </div>
                            <Show when={
                                let has_activity = !activity.is_empty();
                                move || has_activity
                            }>
                                <div class="flex flex-col gap-1 text-sm">
                                    {activity
                                        .iter()
                                        .map(|entry| {
                                            let line = format!(
                                                "[{}] {}: {}",
                                                entry.kind,
                                                entry.username.as_deref().unwrap_or("system"),
                                                preview(&entry.description, 70),
                                            );
                                            let when = format_date(&entry.timestamp);
                                            view! {
                                                <div class="flex justify-between gap-4 text-gray-400">
                                                    <span class="truncate">{line}</span>
                                                    <span class="flex-shrink-0 text-gray-500">{when}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                    .into_any()
                }
            }
        }}
    }
}

#[component]
fn AdminDocuments() -> impl IntoView {
    let admin = use_admin_state();

    view! {
        <Show
            when=move || admin.documents.with(|d| !d.is_empty())
            fallback=|| view! { <EmptyState message="No documents in the system." /> }
        >
            <div class="flex flex-col gap-2">
                {move || {
                    admin
                        .documents
                        .get()
                        .into_iter()
                        .map(|doc| {
                            let id = doc.id.clone();
                            let filename = doc.filename.clone();
                            let size = doc
                                .file_size
                                .map(format_file_size)
                                .unwrap_or_else(|| "Unknown size".to_string());
                            view! {
                                <div class="flex items-center justify-between gap-3 p-3 rounded bg-gray-800 border border-gray-700">
                                    <div class="min-w-0">
                                        <p class="text-gray-200 truncate" title=doc.filename.clone()>
                                            {doc.filename.clone()}
                                        </p>
                                        <p class="text-xs text-gray-500">
                                            {format_date(&doc.upload_date)} " · " {size}
                                        </p>
                                    </div>
                                    <Button
                                        variant=ButtonVariant::Danger
                                        class="text-sm flex-shrink-0"
                                        on_click=move |_| admin.delete_document(&id, &filename)
                                    >
                                        "Delete"
                                    </Button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}

#[component]
fn AdminActivity() -> impl IntoView {
    let admin = use_admin_state();

    view! {
        <Show
            when=move || admin.activity.with(|a| !a.is_empty())
            fallback=|| view! { <EmptyState message="No recent activity." /> }
        >
            <div class="flex flex-col gap-2">
                {move || {
                    admin
                        .activity
                        .get()
                        .into_iter()
                        .map(|entry| {
                            let who = entry
                                .username
                                .clone()
                                .unwrap_or_else(|| "anonymous".to_string());
                            view! {
                                <Card>
                                    <CardHeader>
                                        <div class="flex items-center justify-between gap-2 text-sm">
                                            <span class="text-gray-300 font-medium">{who}</span>
                                            <span class="text-gray-500">
                                                {format_date(&entry.timestamp)}
                                            </span>
                                        </div>
                                    </CardHeader>
                                    <CardBody>
                                        <p class="text-gray-400 text-sm">
                                            {preview(&entry.message, 70)}
                                        </p>
                                    </CardBody>
                                </Card>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
