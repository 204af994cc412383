//! Core traits for the dashboard

use crate::error::DashboardResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that check their own consistency before use
pub trait Validatable {
    /// Returns `Ok(())` if valid, or a `DashboardError` describing the problem.
    fn validate(&self) -> DashboardResult<()>;
}
