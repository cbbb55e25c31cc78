//! Design System Components for Leptos
//!
//! A collection of reusable, theme-aware UI components.

mod button;
mod card;
mod input;
mod loading;
mod modal;
mod toast;

pub use button::{Button, ButtonVariant};
pub use card::{Card, CardBody, CardHeader};
pub use input::Input;
pub use loading::{LoadingOverlay, LoadingSpinner, SpinnerSize};
pub use modal::ConfirmModal;
pub use toast::{Toast, ToastContainer};

use leptos::prelude::*;

/// Placeholder shown by every list view when there is nothing to render.
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="p-6 text-center text-[var(--text-muted)]">
            <p>{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::button::ButtonVariant;

    #[test]
    fn test_button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn test_button_variant_classes_non_empty_and_distinct() {
        let variants = [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Danger,
            ButtonVariant::Ghost,
        ];
        for variant in variants {
            assert!(!variant.class().is_empty());
        }
        assert_ne!(ButtonVariant::Primary.class(), ButtonVariant::Danger.class());
    }
}
