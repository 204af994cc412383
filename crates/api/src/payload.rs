//! Request bodies for writes
//!
//! Writes carry the record's fields plus an `entity` discriminator. A create
//! body never contains `id`; an update body always does.

use serde::Deserialize;
use serde_json::{Map, Value};
use tuning_core::{DashboardError, DashboardResult, RecordId};
use tuning_model::EntityRecord;

/// Body of `POST` (record without id)
pub fn create_body(record: &EntityRecord) -> DashboardResult<Value> {
    let mut fields = fields_of(record)?;
    fields.remove("id");
    Ok(with_entity(record, fields))
}

/// Body of `PUT` (record with id)
pub fn update_body(record: &EntityRecord) -> DashboardResult<Value> {
    let id = record
        .id()
        .ok_or_else(|| DashboardError::internal(format!("cannot update unsaved {}", record.label())))?;
    let mut fields = fields_of(record)?;
    fields.insert("id".to_string(), Value::from(id));
    Ok(with_entity(record, fields))
}

fn fields_of(record: &EntityRecord) -> DashboardResult<Map<String, Value>> {
    match record.to_json()? {
        Value::Object(map) => Ok(map),
        other => Err(DashboardError::internal(format!(
            "{} did not serialize to an object: {other}",
            record.kind()
        ))),
    }
}

fn with_entity(record: &EntityRecord, mut fields: Map<String, Value>) -> Value {
    fields.insert(
        "entity".to_string(),
        Value::String(record.kind().as_str().to_string()),
    );
    Value::Object(fields)
}

// ============================================================================
// Responses
// ============================================================================

/// Body of a successful `POST`
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedResponse {
    #[serde(default, deserialize_with = "tuning_model::lenient::opt_id")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a successful `PUT`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a failed request
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tuning_model::{Client, Order, OrderStatus};

    #[test]
    fn test_create_body_never_has_id() {
        let record = EntityRecord::from(Client::named(5, "Петров"));
        let body = create_body(&record).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["entity"], "clients");
        assert_eq!(body["name"], "Петров");
    }

    #[test]
    fn test_update_body_carries_id() {
        let order = Order {
            id: Some(7),
            client_id: 1,
            car_id: 2,
            status: OrderStatus::InProgress,
            total_amount: 125000.0,
            ..Order::default()
        };
        let body = update_body(&order.into()).unwrap();
        assert_eq!(
            body,
            json!({
                "entity": "orders",
                "id": 7,
                "client_id": 1,
                "car_id": 2,
                "status": "В работе",
                "total_amount": 125000.0,
                "notes": null
            })
        );
    }

    #[test]
    fn test_update_requires_id() {
        let record = EntityRecord::from(Order::default());
        assert!(update_body(&record).is_err());
    }

    #[test]
    fn test_created_response_accepts_string_id() {
        let created: CreatedResponse =
            serde_json::from_value(json!({"id": "12", "message": "Created"})).unwrap();
        assert_eq!(created.id, Some(12));
    }
}
