//! # UI Components
//!
//! Reusable Dioxus components for the dashboard.
//!
//! - **Inputs**: form inputs (text, textarea, select, checkbox)
//! - **Dialogs**: the modal entity editor
//! - **StatCard**: a single summary figure on the dashboard
//! - **StatusBadge**: colored order status label

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dialogs;
pub mod inputs;
pub mod stat_card;
pub mod status_badge;

// ============================================================================
// Re-exports
// ============================================================================

pub use dialogs::EntityDialog;
pub use inputs::{Checkbox, Select, SelectOption, TextArea, TextInput};
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
