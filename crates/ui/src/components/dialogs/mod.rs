//! # Dialog Components
//!
//! - **EntityDialog**: create and edit form shared by all record kinds
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tuning_ui::components::dialogs::EntityDialog;
//!
//! rsx! {
//!     EntityDialog {
//!         target: EditorTarget::Create(EntityKind::Orders),
//!         references: data.reference_lists(),
//!         on_save: move |record| spawn(actions::save(record)),
//!         on_close: move |_| APP_STATE.write().ui.close_dialog(),
//!     }
//! }
//! ```

pub mod entity_dialog;

pub use entity_dialog::{EntityDialog, EntityDialogProps};
