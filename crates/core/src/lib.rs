//! # Tuning Core
//!
//! Core types, traits, and error handling for the TuningPro dashboard.
//!
//! This crate provides the foundational building blocks used by the model,
//! API and UI crates:
//!
//! - **Types**: entity kinds, order statuses, dashboard views
//! - **Traits**: `Validatable`
//! - **Errors**: unified error handling with `DashboardError` and `DashboardResult`
//! - **Config**: `DashboardConfig` loaded from the environment
//! - **Format**: ruble amounts and order numbers as shown in the UI
//!

pub mod config;
pub mod error;
pub mod format;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use config::DashboardConfig;
pub use error::{DashboardError, DashboardResult};
pub use format::{format_compact_rub, format_order_number, format_rub};
pub use traits::Validatable;
pub use types::{EntityKind, OrderStatus, RecordId, View};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
