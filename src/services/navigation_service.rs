use leptos::prelude::*;

use crate::services::notification_service::NotificationState;

/// The mutually exclusive top-level sections. Exactly one is active at a
/// time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Upload,
    Documents,
    Chat,
    History,
    Faq,
    Admin,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Upload,
            Section::Documents,
            Section::Chat,
            Section::History,
            Section::Faq,
            Section::Admin,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Upload => "Upload",
            Section::Documents => "Documents",
            Section::Chat => "Chat",
            Section::History => "History",
            Section::Faq => "FAQ",
            Section::Admin => "Admin",
        }
    }

    /// Only the demo-admin gate hides a section; everything else is public.
    pub fn requires_admin(&self) -> bool {
        matches!(self, Section::Admin)
    }
}

/// Where a navigation request actually lands. Returns the effective section
/// and whether the request was denied by the admin gate.
pub fn resolve_target(requested: Section, is_admin: bool) -> (Section, bool) {
    if requested.requires_admin() && !is_admin {
        (Section::default(), true)
    } else {
        (requested, false)
    }
}

/// Exclusive-section view state plus the shared busy indicator for section
/// loads.
#[derive(Clone, Copy)]
pub struct NavigationState {
    pub current: RwSignal<Section>,
    pub is_loading: RwSignal<bool>,
    pub is_admin: RwSignal<bool>,
    notices: NotificationState,
}

impl NavigationState {
    pub fn new(is_admin: bool, notices: NotificationState) -> Self {
        Self {
            current: RwSignal::new(Section::default()),
            is_loading: RwSignal::new(false),
            is_admin: RwSignal::new(is_admin),
            notices,
        }
    }

    /// Activates a section. The admin gate redirects denied requests to the
    /// default section with an access-denied notice. The section's load
    /// action is dispatched by the effect watching `current` (see `app.rs`);
    /// re-selecting the current section re-runs its load.
    pub fn navigate_to(&self, requested: Section) {
        let (target, denied) = resolve_target(requested, self.is_admin.get_untracked());
        if denied {
            self.notices
                .error("Access denied: you are not an administrator.");
        }
        self.current.set(target);
    }
}

pub fn use_navigation() -> NavigationState {
    expect_context::<NavigationState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_section_is_upload() {
        assert_eq!(Section::default(), Section::Upload);
    }

    #[test]
    fn test_all_sections_closed_set() {
        let all = Section::all();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Section::Upload);
        assert_eq!(all[5], Section::Admin);
    }

    #[test]
    fn test_only_admin_requires_admin() {
        for section in Section::all() {
            assert_eq!(section.requires_admin(), *section == Section::Admin);
        }
    }

    #[test]
    fn test_resolve_target_allows_public_sections() {
        for section in Section::all().iter().filter(|s| !s.requires_admin()) {
            assert_eq!(resolve_target(*section, false), (*section, false));
            assert_eq!(resolve_target(*section, true), (*section, false));
        }
    }

    #[test]
    fn test_resolve_target_gates_admin() {
        assert_eq!(resolve_target(Section::Admin, true), (Section::Admin, false));
        assert_eq!(
            resolve_target(Section::Admin, false),
            (Section::Upload, true)
        );
    }
}
