//! Tolerant deserializers for backend fields
//!
//! The backend sometimes sends numbers as strings (order ids arrive as
//! `"007"`, decimals from the database driver may be stringified). These
//! helpers accept either form.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use tuning_core::{OrderStatus, RecordId};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumberOrString {
    fn as_i64(&self) -> Option<i64> {
        match self {
            NumberOrString::Int(n) => Some(*n),
            NumberOrString::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            NumberOrString::Float(_) => None,
            NumberOrString::Text(s) => s.trim().trim_start_matches('#').parse().ok(),
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            NumberOrString::Int(n) => Some(*n as f64),
            NumberOrString::Float(f) => Some(*f),
            NumberOrString::Text(s) => s.trim().replace(',', ".").parse().ok(),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, NumberOrString::Text(s) if s.trim().is_empty())
    }
}

/// Optional record id: number, numeric string, `null` or empty string
pub fn opt_id<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrString>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(v) if v.is_blank() => Ok(None),
        Some(v) => v
            .as_i64()
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom("expected a numeric id")),
    }
}

/// Record id that defaults to `0` when absent or blank
pub fn id_or_zero<'de, D>(deserializer: D) -> Result<RecordId, D::Error>
where
    D: Deserializer<'de>,
{
    opt_id(deserializer).map(|id| id.unwrap_or(0))
}

/// Decimal amount: number or numeric string; `null` reads as `0`
pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrString>::deserialize(deserializer)?;
    match raw {
        None => Ok(0.0),
        Some(v) if v.is_blank() => Ok(0.0),
        Some(v) => v
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("expected a number")),
    }
}

/// Whole number: number or numeric string; `null` reads as `0`
pub fn whole<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrString>::deserialize(deserializer)?;
    match raw {
        None => Ok(0),
        Some(v) if v.is_blank() => Ok(0),
        Some(v) => v
            .as_i64()
            .ok_or_else(|| serde::de::Error::custom("expected a whole number")),
    }
}

/// Year: like [`whole`] but narrowed to `i32`
pub fn year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = whole(deserializer)?;
    i32::try_from(value).map_err(|_| serde::de::Error::custom("year out of range"))
}

/// Optional text where `null` and `""` both read as `None`
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatusRepr {
    Label(String),
    Other(IgnoredAny),
}

/// Order status; `null`, non-strings and unknown labels read as pending
pub fn status<'de, D>(deserializer: D) -> Result<OrderStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<StatusRepr>::deserialize(deserializer)?;
    let status = match raw {
        Some(StatusRepr::Label(label)) => label.parse().unwrap_or_else(|e| {
            tracing::warn!("{}, reading as {}", e, OrderStatus::Pending);
            OrderStatus::Pending
        }),
        Some(StatusRepr::Other(_)) => {
            tracing::warn!("Order status is not a string, reading as {}", OrderStatus::Pending);
            OrderStatus::Pending
        }
        None => OrderStatus::Pending,
    };
    Ok(status)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default, deserialize_with = "opt_id")]
        id: Option<RecordId>,
        #[serde(default, deserialize_with = "amount")]
        amount: f64,
        #[serde(default, deserialize_with = "year")]
        year: i32,
        #[serde(default, deserialize_with = "opt_text")]
        note: Option<String>,
        #[serde(default, deserialize_with = "status")]
        status: OrderStatus,
    }

    fn sample(value: serde_json::Value) -> Sample {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ids_accept_numbers_and_padded_strings() {
        assert_eq!(sample(json!({"id": 12})).id, Some(12));
        assert_eq!(sample(json!({"id": "007"})).id, Some(7));
        assert_eq!(sample(json!({"id": "#003"})).id, Some(3));
        assert_eq!(sample(json!({"id": null})).id, None);
        assert_eq!(sample(json!({"id": ""})).id, None);
        assert_eq!(sample(json!({})).id, None);
    }

    #[test]
    fn test_ids_reject_garbage() {
        let result: Result<Sample, _> = serde_json::from_value(json!({"id": "abc"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_amounts_accept_strings() {
        assert_eq!(sample(json!({"amount": 125000})).amount, 125000.0);
        assert_eq!(sample(json!({"amount": "35000.50"})).amount, 35000.5);
        assert_eq!(sample(json!({"amount": null})).amount, 0.0);
    }

    #[test]
    fn test_year_and_text() {
        let p = sample(json!({"year": "2021", "note": "  "}));
        assert_eq!(p.year, 2021);
        assert_eq!(p.note, None);
        assert_eq!(sample(json!({"note": "VIP"})).note.as_deref(), Some("VIP"));
    }

    #[test]
    fn test_status_falls_back_to_pending() {
        assert_eq!(sample(json!({"status": "В работе"})).status, OrderStatus::InProgress);
        assert_eq!(sample(json!({"status": " Завершен "})).status, OrderStatus::Completed);
        assert_eq!(sample(json!({"status": null})).status, OrderStatus::Pending);
        assert_eq!(sample(json!({"status": "Отменен"})).status, OrderStatus::Pending);
        assert_eq!(sample(json!({"status": 3})).status, OrderStatus::Pending);
        assert_eq!(sample(json!({})).status, OrderStatus::Pending);
    }
}
