//! The `Record` trait shared by the four entity types
//!
//! A record is a flat, serde-friendly struct whose `id` is `None` until the
//! server has assigned one. Field access by name goes through `get`/`set`
//! so the schema-driven editor never needs to know the concrete type.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tuning_core::{DashboardError, DashboardResult, EntityKind, RecordId};

use crate::reference::ReferenceLists;
use crate::schema::{FieldSchema, FieldValue};

// ============================================================================
// Record Trait
// ============================================================================

/// A persisted (or to-be-persisted) entity
pub trait Record:
    Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Collection this record belongs to
    const KIND: EntityKind;

    /// Server-assigned id, `None` while unsaved
    fn id(&self) -> Option<RecordId>;

    /// Record the id returned by a create
    fn set_id(&mut self, id: RecordId);

    /// Form fields, in display order
    fn schema() -> &'static [FieldSchema];

    /// A fresh record for a create dialog, seeded from the reference lists
    fn defaults(refs: &ReferenceLists) -> Self;

    /// Read a schema field
    fn get(&self, field: &str) -> DashboardResult<FieldValue>;

    /// Write a schema field
    fn set(&mut self, field: &str, value: FieldValue) -> DashboardResult<()>;

    /// Short human-readable label (used in logs and status messages)
    fn label(&self) -> String;

    /// Whether the record exists server-side
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}

// ============================================================================
// Value Coercion Helpers
// ============================================================================

pub(crate) fn unknown(kind: EntityKind, field: &str) -> DashboardError {
    DashboardError::unknown_field(kind, field)
}

pub(crate) fn text(kind: EntityKind, field: &str, value: FieldValue) -> DashboardResult<String> {
    match value {
        FieldValue::Text(s) => Ok(s),
        _ => Err(DashboardError::field_type(kind, field, "text")),
    }
}

/// Text where an empty or blank value clears the field
pub(crate) fn opt_text(
    kind: EntityKind,
    field: &str,
    value: FieldValue,
) -> DashboardResult<Option<String>> {
    let s = text(kind, field, value)?;
    Ok(if s.trim().is_empty() { None } else { Some(s) })
}

pub(crate) fn decimal(kind: EntityKind, field: &str, value: FieldValue) -> DashboardResult<f64> {
    match value {
        FieldValue::Decimal(n) => Ok(n),
        FieldValue::Integer(n) => Ok(n as f64),
        _ => Err(DashboardError::field_type(kind, field, "a number")),
    }
}

pub(crate) fn integer(kind: EntityKind, field: &str, value: FieldValue) -> DashboardResult<i64> {
    match value {
        FieldValue::Integer(n) => Ok(n),
        _ => Err(DashboardError::field_type(kind, field, "a whole number")),
    }
}

pub(crate) fn flag(kind: EntityKind, field: &str, value: FieldValue) -> DashboardResult<bool> {
    match value {
        FieldValue::Flag(b) => Ok(b),
        _ => Err(DashboardError::field_type(kind, field, "a flag")),
    }
}

pub(crate) fn reference(
    kind: EntityKind,
    field: &str,
    value: FieldValue,
) -> DashboardResult<RecordId> {
    match value {
        FieldValue::Reference(id) => Ok(id),
        _ => Err(DashboardError::field_type(kind, field, "a reference id")),
    }
}

/// Read an optional text field as a (possibly empty) `FieldValue::Text`
pub(crate) fn show(value: &Option<String>) -> FieldValue {
    FieldValue::Text(value.clone().unwrap_or_default())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_opt_text_clears_blank() {
        let kind = EntityKind::Clients;
        assert_eq!(opt_text(kind, "email", FieldValue::Text("  ".into())).unwrap(), None);
        assert_eq!(
            opt_text(kind, "email", FieldValue::Text("a@b.ru".into())).unwrap(),
            Some("a@b.ru".to_string())
        );
    }

    #[test]
    fn test_type_mismatch_is_reported() {
        let err = decimal(EntityKind::Services, "price", FieldValue::Flag(true)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Field 'services.price' expects a number");
    }

    #[test]
    fn test_integer_widens_to_decimal() {
        assert_eq!(
            decimal(EntityKind::Orders, "total_amount", FieldValue::Integer(5)).unwrap(),
            5.0
        );
    }
}
