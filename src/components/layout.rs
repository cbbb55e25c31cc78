use leptos::prelude::*;

use crate::services::navigation_service::{use_navigation, Section};

/// Top navigation bar. Renders one tab per visible section; the admin tab
/// only appears when the demo-admin flag is set.
#[component]
pub fn NavBar() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="max-w-5xl mx-auto px-4 py-3 flex items-center justify-between flex-wrap gap-2">
                <h1 class="text-xl font-bold text-white">"Document Chat"</h1>
                <nav class="flex gap-1 flex-wrap">
                    {Section::all()
                        .iter()
                        .copied()
                        .map(|section| {
                            let visible = move || !section.requires_admin() || nav.is_admin.get();
                            let tab_class = move || {
                                if nav.current.get() == section {
                                    "px-3 py-1.5 rounded text-sm font-medium bg-blue-600 text-white"
                                } else {
                                    "px-3 py-1.5 rounded text-sm font-medium text-gray-300 hover:bg-gray-700 hover:text-white transition-colors"
                                }
                            };
                            view! {
                                <Show when=visible>
                                    <button
                                        class=tab_class
                                        on:click=move |_| nav.navigate_to(section)
                                    >
                                        {section.label()}
                                    </button>
                                </Show>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
