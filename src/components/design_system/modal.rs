use leptos::prelude::*;

use crate::components::design_system::{Button, ButtonVariant};
use crate::services::confirm_service::use_confirm_state;

/// Modal dialog rendering the pending confirmation request, if any.
///
/// Mounted once at the application root; the backdrop and the Cancel
/// button both dismiss without running the confirmed action.
#[component]
pub fn ConfirmModal() -> impl IntoView {
    let confirm = use_confirm_state();

    let title = move || {
        confirm
            .pending
            .with(|p| p.as_ref().map(|r| r.title.clone()).unwrap_or_default())
    };
    let message = move || {
        confirm
            .pending
            .with(|p| p.as_ref().map(|r| r.message.clone()).unwrap_or_default())
    };

    view! {
        <Show when=move || confirm.pending.with(|p| p.is_some())>
            <div
                class="fixed inset-0 z-40 flex items-center justify-center bg-black/60"
                on:click=move |_| confirm.cancel()
            >
                <div
                    class="w-full max-w-md mx-4 rounded-lg bg-gray-800 border border-gray-700 shadow-xl"
                    on:click=|evt| evt.stop_propagation()
                >
                    <div class="p-4 border-b border-gray-700">
                        <h3 class="text-lg font-semibold text-white">{title}</h3>
                    </div>
                    <div class="p-4">
                        <p class="text-gray-300">{message}</p>
                    </div>
                    <div class="p-4 flex justify-end gap-2 border-t border-gray-700">
                        <Button
                            variant=ButtonVariant::Secondary
                            on_click=move |_| confirm.cancel()
                        >
                            "Cancel"
                        </Button>
                        <Button
                            variant=ButtonVariant::Primary
                            on_click=move |_| confirm.confirm()
                        >
                            "Confirm"
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
