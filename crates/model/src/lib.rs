//! # Tuning Model
//!
//! Typed records and the schema-driven form editor for the TuningPro
//! dashboard.
//!
//! ## Core Concepts
//!
//! - **Record**: one of the four flat entity types (`Client`, `Car`,
//!   `Service`, `Order`); `id` present means the record exists server-side
//! - **FieldSchema**: declarative description of one form field (name,
//!   input kind, required flag, reference source)
//! - **Draft**: the locally mutable copy of a record held by an open form
//! - **EntityDraft / EntityRecord**: kind-erased wrappers so one dialog
//!   component can edit every kind
//! - **ReferenceLists**: client and car options for selection controls
//!

pub mod car;
pub mod client;
pub mod draft;
pub mod editor;
pub mod lenient;
pub mod order;
pub mod record;
pub mod reference;
pub mod schema;
pub mod service;

// Re-export commonly used types at crate root
pub use car::Car;
pub use client::Client;
pub use draft::{Draft, DraftMode, FieldError};
pub use editor::{EditorTarget, EntityDraft, EntityRecord};
pub use order::Order;
pub use record::Record;
pub use reference::{ReferenceLists, ReferenceOption};
pub use schema::{FieldSchema, FieldValue, InputKind, ReferenceSource};
pub use service::Service;

// Re-export core types that are commonly used with records
pub use tuning_core::{DashboardError, DashboardResult, EntityKind, OrderStatus, RecordId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
