use leptos::prelude::*;

/// Spinner sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "w-4 h-4 border-2",
            SpinnerSize::Medium => "w-6 h-6 border-2",
            SpinnerSize::Large => "w-10 h-10 border-4",
        }
    }
}

/// An animated loading spinner
#[component]
pub fn LoadingSpinner(
    /// Spinner size
    #[prop(optional)]
    size: SpinnerSize,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let full_class = format!(
        "inline-block rounded-full border-gray-600 border-t-blue-500 animate-spin {} {}",
        size.class(),
        class
    );

    view! { <span class=full_class aria-label="Loading"></span> }
}

/// A full-section loading indicator with a message
#[component]
pub fn LoadingOverlay(
    /// Message shown under the spinner
    #[prop(into, optional)]
    message: String,
) -> impl IntoView {
    let message = if message.is_empty() {
        "Loading...".to_string()
    } else {
        message
    };

    view! {
        <div class="flex flex-col items-center justify-center gap-3 p-10 text-gray-400">
            <LoadingSpinner size=SpinnerSize::Large />
            <p class="text-sm">{message}</p>
        </div>
    }
}
