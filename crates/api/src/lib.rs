//! # Tuning API
//!
//! Talks to the dashboard's single JSON endpoint and keeps the four
//! collections in sync with it.
//!
//! - **ApiClient**: `reqwest` client for `GET ?entity=`, `POST` and `PUT`
//! - **Backend**: the async trait the sync layer is written against
//! - **DashboardData**: collections, load tickets, derived values
//! - **DashboardSession**: load / save / view switching without a UI
//!

pub mod backend;
pub mod client;
pub mod error;
pub mod payload;
pub mod session;
pub mod sync;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::Backend;
pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
pub use session::DashboardSession;
pub use sync::{DashboardData, FetchAll, LoadFailure, LoadReport, LoadTicket, fetch_all, persist};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
