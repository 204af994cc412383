//! Error types for the TuningPro dashboard
//!
//! This module provides unified error handling for everything that is not
//! an HTTP failure: validation of records and drafts, configuration,
//! serialization and internal state errors. HTTP failures live in
//! `tuning_api::ClientError`.

use thiserror::Error;

use crate::types::EntityKind;

/// The main error type for the dashboard
#[derive(Debug, Error)]
pub enum DashboardError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A single field failed validation
    #[error("Field validation failed for '{entity}.{field}': {message}")]
    FieldValidation {
        entity: EntityKind,
        field: String,
        message: String,
    },

    /// A field name that the entity schema does not declare
    #[error("Unknown field '{field}' for entity '{entity}'")]
    UnknownField { entity: EntityKind, field: String },

    /// A value of the wrong shape was written into a field
    #[error("Field '{entity}.{field}' expects {expected}")]
    FieldType {
        entity: EntityKind,
        field: String,
        expected: &'static str,
    },

    /// Unknown order status string
    #[error("Unknown order status: '{0}'")]
    UnknownStatus(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read a `.env` file
    #[error("Failed to load environment file: {0}")]
    EnvFile(String),

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DashboardError {
    /// Create a field validation error
    pub fn field_validation(
        entity: EntityKind,
        field: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        DashboardError::FieldValidation {
            entity,
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create an unknown-field error
    pub fn unknown_field(entity: EntityKind, field: impl Into<String>) -> Self {
        DashboardError::UnknownField {
            entity,
            field: field.into(),
        }
    }

    /// Create a field type mismatch error
    pub fn field_type(entity: EntityKind, field: impl Into<String>, expected: &'static str) -> Self {
        DashboardError::FieldType {
            entity,
            field: field.into(),
            expected,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        DashboardError::InvalidConfig(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DashboardError::Internal(msg.into())
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DashboardError::FieldValidation { .. }
                | DashboardError::FieldType { .. }
                | DashboardError::UnknownStatus(_)
        )
    }

    /// Check if this error is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            DashboardError::InvalidConfig(_) | DashboardError::EnvFile(_)
        )
    }
}

/// Result type alias using DashboardError
pub type DashboardResult<T> = Result<T, DashboardError>;

// ============================================================================
// Tests
// ============================================================================
