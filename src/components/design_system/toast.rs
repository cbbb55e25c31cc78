use crate::services::notification_service::{remove_notification, Notification};
use leptos::prelude::*;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let state = crate::services::notification_service::use_notification_state();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 pointer-events-none">
            {move || state.notifications.get().into_iter().map(|notification| {
                view! {
                    <Toast notification=notification />
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn Toast(notification: Notification) -> impl IntoView {
    let (is_exiting, set_is_exiting) = signal(false);
    let id = notification.id;

    // Handle close
    let close = move || {
        set_is_exiting.set(true);
        // Wait for animation then remove
        set_timeout(
            move || {
                remove_notification(id);
            },
            std::time::Duration::from_millis(300),
        );
    };

    // Auto-close after the notice's lifetime
    {
        let close = close.clone();
        set_timeout(
            move || {
                close();
            },
            std::time::Duration::from_millis(notification.duration_ms),
        );
    }

    let border_class = notification.severity.class();
    let icon = notification.severity.icon();

    view! {
        <div
            class=move || format!(
                "pointer-events-auto min-w-[300px] max-w-md p-4 rounded shadow-lg bg-gray-800 border border-gray-700 border-l-4 flex gap-3 transition-all duration-300 transform {} {}",
                border_class,
                if is_exiting.get() { "translate-x-full opacity-0" } else { "translate-x-0 opacity-100" }
            )
            role="alert"
        >
            <div class="flex-shrink-0 text-lg">
                <span>{icon}</span>
            </div>
            <div class="flex-1 text-sm text-gray-200 text-wrap break-words self-center">
                {notification.message}
            </div>
            <button
                class="flex-shrink-0 text-gray-400 hover:text-white self-start -mt-1 -mr-1"
                on:click=move |_| close()
                aria-label="Close"
            >
                "×"
            </button>
        </div>
    }
}
