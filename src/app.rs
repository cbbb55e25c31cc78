use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::design_system::{ConfirmModal, LoadingOverlay, ToastContainer};
use crate::components::{
    AdminSection, ChatSection, DocumentsSection, FaqSection, HistorySection, NavBar, UploadSection,
};
use crate::config::is_admin_demo;
use crate::services::admin_service::AdminState;
use crate::services::chat_session_service::ChatSessionService;
use crate::services::confirm_service::provide_confirm_state;
use crate::services::document_registry::{DocumentRegistry, Scope};
use crate::services::history_service::HistoryState;
use crate::services::navigation_service::{NavigationState, Section};
use crate::services::notification_service::provide_notification_state;
use crate::services::upload_service::UploadService;

#[component]
pub fn App() -> impl IntoView {
    // Global services, constructed in dependency order.
    let notices = provide_notification_state();
    let confirm = provide_confirm_state();

    let registry = DocumentRegistry::new(notices);
    provide_context(registry);

    let nav = NavigationState::new(is_admin_demo(), notices);
    provide_context(nav);

    let chat = ChatSessionService::new(registry, notices);
    provide_context(chat);

    let upload = UploadService::new(notices, confirm, chat, nav);
    provide_context(upload);

    let history = HistoryState::new(notices, confirm);
    provide_context(history);

    let admin = AdminState::new(notices, confirm);
    provide_context(admin);

    // Each section fetches its data on entry; the busy flag covers the load.
    Effect::new(move |_| {
        let section = nav.current.get();
        match section {
            Section::Upload | Section::Faq => {}
            Section::Documents => {
                run_section_load(nav, async move { registry.refresh(Scope::Main).await })
            }
            Section::Chat => run_section_load(nav, async move { chat.sync_documents().await }),
            Section::History => run_section_load(nav, async move { history.refresh().await }),
            Section::Admin => run_section_load(nav, async move { admin.refresh().await }),
        }
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-gray-100">
            <NavBar />
            <main class="max-w-5xl mx-auto px-4 py-6">
                <Show
                    when=move || !nav.is_loading.get()
                    fallback=|| view! { <LoadingOverlay /> }
                >
                    {move || match nav.current.get() {
                        Section::Upload => view! { <UploadSection /> }.into_any(),
                        Section::Documents => view! { <DocumentsSection /> }.into_any(),
                        Section::Chat => view! { <ChatSection /> }.into_any(),
                        Section::History => view! { <HistorySection /> }.into_any(),
                        Section::Faq => view! { <FaqSection /> }.into_any(),
                        Section::Admin => view! { <AdminSection /> }.into_any(),
                    }}
                </Show>
            </main>
            <ToastContainer />
            <ConfirmModal />
        </div>
    }
}

fn run_section_load<F>(nav: NavigationState, load: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    nav.is_loading.set(true);
    spawn_local(async move {
        load.await;
        nav.is_loading.set(false);
    });
}
