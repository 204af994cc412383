//! Application state for the dashboard
//!
//! All reactive state lives in one global signal. Components read it and
//! drop the guard before rendering; async actions write it in short bursts
//! and never hold a borrow across an `.await`.

use dioxus::prelude::*;
use tuning_api::DashboardData;
use tuning_core::{EntityKind, View};
use tuning_model::{EditorTarget, EntityRecord};

// ============================================================================
// UI State
// ============================================================================

/// UI-specific state (not persisted)
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Whether the sidebar is collapsed
    pub sidebar_collapsed: bool,
    /// Currently shown view
    pub active_view: View,
    /// Header search text
    pub search: String,
    /// Open editor, if any
    pub active_dialog: Option<EditorTarget>,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
    /// Saves still in flight
    pub pending_saves: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            active_view: View::Dashboard,
            search: String::new(),
            active_dialog: None,
            status_message: None,
            pending_saves: 0,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch views. Pure state change, no data is refetched.
    pub fn navigate(&mut self, view: View) {
        self.active_view = view;
    }

    /// Open an empty editor for a collection
    pub fn open_create(&mut self, kind: EntityKind) {
        self.active_dialog = Some(EditorTarget::Create(kind));
    }

    /// Open a pre-filled editor for an existing record
    pub fn open_edit(&mut self, record: impl Into<EntityRecord>) {
        self.active_dialog = Some(EditorTarget::Edit(record.into()));
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = None;
    }

    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn begin_save(&mut self) {
        self.pending_saves += 1;
    }

    pub fn finish_save(&mut self) {
        self.pending_saves = self.pending_saves.saturating_sub(1);
    }

    /// Whether any save is still in flight
    pub fn is_saving(&self) -> bool {
        self.pending_saves > 0
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }
}

/// Status bar message
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    /// CSS modifier for the status bar
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusLevel::Info => "status-info",
            StatusLevel::Success => "status-success",
            StatusLevel::Warning => "status-warning",
            StatusLevel::Error => "status-error",
        }
    }
}

// ============================================================================
// App State
// ============================================================================

/// Root application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The four collections and load bookkeeping
    pub data: DashboardData,
    /// UI state
    pub ui: UiState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection the header's add button creates into, if the view has one
    pub fn add_target(&self) -> Option<EntityKind> {
        self.ui.active_view.entity_kind()
    }
}

/// Global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// State Hooks (for component use)
// ============================================================================

/// Hook to access the current view
pub fn use_current_view() -> View {
    let state = APP_STATE.read();
    state.ui.active_view
}

/// Hook to check whether a load is in flight
pub fn use_is_loading() -> bool {
    let state = APP_STATE.read();
    state.data.loading
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tuning_model::Client;

    #[test]
    fn test_navigate_only_changes_view() {
        let mut ui = UiState::new();
        ui.set_search("BMW");
        ui.navigate(View::Cars);
        assert_eq!(ui.active_view, View::Cars);
        assert_eq!(ui.search, "BMW");
        assert!(ui.active_dialog.is_none());
    }

    #[test]
    fn test_dialog_lifecycle() {
        let mut ui = UiState::new();
        ui.open_create(EntityKind::Orders);
        assert_eq!(ui.active_dialog, Some(EditorTarget::Create(EntityKind::Orders)));

        ui.open_edit(Client::named(4, "Сидоров Михаил"));
        assert!(ui.active_dialog.as_ref().is_some_and(EditorTarget::is_edit));

        ui.close_dialog();
        assert!(ui.active_dialog.is_none());
    }

    #[test]
    fn test_status_message() {
        let mut ui = UiState::new();
        ui.set_status("Сохранено", StatusLevel::Success);
        assert_eq!(
            ui.status_message.as_ref().map(|m| m.level.css_class()),
            Some("status-success")
        );
        ui.clear_status();
        assert!(ui.status_message.is_none());
    }

    #[test]
    fn test_overlapping_saves() {
        let mut ui = UiState::new();
        ui.begin_save();
        ui.begin_save();
        ui.finish_save();
        assert!(ui.is_saving());
        ui.finish_save();
        assert!(!ui.is_saving());
        ui.finish_save();
        assert_eq!(ui.pending_saves, 0);
    }

    #[test]
    fn test_add_target_follows_view() {
        let mut state = AppState::new();
        assert_eq!(state.add_target(), None);
        state.ui.navigate(View::Services);
        assert_eq!(state.add_target(), Some(EntityKind::Services));
    }
}
