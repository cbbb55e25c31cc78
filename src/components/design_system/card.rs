use leptos::prelude::*;

/// Panel container used by the document grid, history entries, activity
/// rows and admin stat tiles.
#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! {
        <div class="bg-gray-800 border border-gray-700 rounded-lg shadow-md overflow-hidden">
            {children()}
        </div>
    }
}

/// Title strip across the top of a [`Card`]. Lays its children out with
/// space between, so an action button can sit opposite the title.
#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! {
        <div class="px-4 py-3 bg-gray-800/50 border-b border-gray-700 flex justify-between items-center">
            {children()}
        </div>
    }
}

/// Padded content area of a [`Card`]. Stat tiles use it on its own, without
/// a header.
#[component]
pub fn CardBody(children: Children) -> impl IntoView {
    view! {
        <div class="p-4">
            {children()}
        </div>
    }
}
