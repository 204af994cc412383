//! Form drafts
//!
//! A `Draft` is the value copy of a record held by an open dialog. Text
//! fields write straight into the copy; numeric fields keep the raw text
//! the user typed and are only parsed by [`Draft::submit`], which either
//! yields a complete record or one [`FieldError`] per offending field.
//! The record the draft was opened from is never touched.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tuning_core::{DashboardError, DashboardResult, RecordId};

use crate::record::Record;
use crate::reference::ReferenceLists;
use crate::schema::{FieldSchema, FieldValue, InputKind, find_field};

const MSG_REQUIRED: &str = "Обязательное поле";
const MSG_NOT_SELECTED: &str = "Выберите значение из списка";
const MSG_EMAIL: &str = "Некорректный email";
const MSG_INTEGER: &str = "Введите целое число";
const MSG_NUMBER: &str = "Введите число";
const MSG_NEGATIVE: &str = "Значение не может быть отрицательным";

// ============================================================================
// Field Error
// ============================================================================

/// A submit-time validation failure for one field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Schema field name
    pub field: &'static str,
    /// Message shown under the input
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// Message for `field` among `errors`, if any
    pub fn message_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
        errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

// ============================================================================
// Draft Mode
// ============================================================================

/// Whether submitting the draft creates or updates a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit(RecordId),
}

// ============================================================================
// Draft
// ============================================================================

/// Locally mutable copy of a record
#[derive(Debug, Clone, PartialEq)]
pub struct Draft<R: Record> {
    record: R,
    /// Raw text of numeric fields, parsed at submit
    inputs: HashMap<&'static str, String>,
}

impl<R: Record> Draft<R> {
    /// Open a draft: a copy of `existing` (edit) or the kind's defaults (create)
    pub fn open(existing: Option<&R>, refs: &ReferenceLists) -> Self {
        let record = match existing {
            Some(record) => record.clone(),
            None => R::defaults(refs),
        };
        let creating = record.id().is_none();

        let inputs = R::schema()
            .iter()
            .filter(|f| f.kind.is_numeric())
            .map(|f| {
                let raw = match record.get(f.name) {
                    // An empty input shows the placeholder on create
                    Ok(FieldValue::Decimal(n)) if creating && n == 0.0 => String::new(),
                    Ok(FieldValue::Integer(0)) if creating => String::new(),
                    Ok(value) => value.display(),
                    Err(_) => String::new(),
                };
                (f.name, raw)
            })
            .collect();

        Self { record, inputs }
    }

    pub fn mode(&self) -> DraftMode {
        match self.record.id() {
            Some(id) => DraftMode::Edit(id),
            None => DraftMode::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode(), DraftMode::Edit(_))
    }

    /// The draft's current record (numeric fields not yet applied)
    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn schema(&self) -> &'static [FieldSchema] {
        R::schema()
    }

    fn field(&self, name: &str) -> DashboardResult<&'static FieldSchema> {
        find_field(R::schema(), name).ok_or_else(|| DashboardError::unknown_field(R::KIND, name))
    }

    // ========================================================================
    // Binding
    // ========================================================================

    /// Text currently shown in the input bound to `field`
    pub fn text(&self, field: &str) -> String {
        if let Some(raw) = self.inputs.get(field) {
            return raw.clone();
        }
        self.record
            .get(field)
            .map(|v| v.display())
            .unwrap_or_default()
    }

    pub fn is_checked(&self, field: &str) -> bool {
        matches!(self.record.get(field), Ok(FieldValue::Flag(true)))
    }

    /// Selected id of a reference field, `0` when nothing is selected
    pub fn reference(&self, field: &str) -> RecordId {
        match self.record.get(field) {
            Ok(FieldValue::Reference(id)) => id,
            _ => 0,
        }
    }

    /// Write user input into a field
    pub fn set_text(&mut self, field: &str, value: &str) -> DashboardResult<()> {
        let schema = self.field(field)?;
        match schema.kind {
            InputKind::Integer | InputKind::Decimal => {
                self.inputs.insert(schema.name, value.to_string());
                Ok(())
            }
            InputKind::Text | InputKind::Email | InputKind::Phone | InputKind::MultiLine => {
                self.record.set(field, FieldValue::Text(value.to_string()))
            }
            InputKind::Choice(options) => {
                let value = value.trim();
                if !options.contains(&value) {
                    return Err(DashboardError::field_validation(
                        R::KIND,
                        field,
                        format!("'{value}' is not one of the offered values"),
                    ));
                }
                self.record.set(field, FieldValue::Text(value.to_string()))
            }
            InputKind::Reference(_) => {
                let value = value.trim();
                let id = if value.is_empty() {
                    0
                } else {
                    value
                        .parse::<RecordId>()
                        .map_err(|_| DashboardError::field_type(R::KIND, field, "a reference id"))?
                };
                self.record.set(field, FieldValue::Reference(id))
            }
            InputKind::Checkbox => Err(DashboardError::field_type(R::KIND, field, "a flag")),
        }
    }

    pub fn set_checked(&mut self, field: &str, checked: bool) -> DashboardResult<()> {
        self.field(field)?;
        self.record.set(field, FieldValue::Flag(checked))
    }

    pub fn select_reference(&mut self, field: &str, id: RecordId) -> DashboardResult<()> {
        self.field(field)?;
        self.record.set(field, FieldValue::Reference(id))
    }

    // ========================================================================
    // Submit
    // ========================================================================

    /// Parse and check every field.
    ///
    /// Returns the record to hand to the save callback, or all field errors.
    pub fn submit(&self) -> Result<R, Vec<FieldError>> {
        let mut record = self.record.clone();
        let mut errors = Vec::new();

        for field in R::schema() {
            if let Err(message) = self.check_field(field, &mut record) {
                errors.push(FieldError::new(field.name, message));
            }
        }

        if errors.is_empty() {
            Ok(record)
        } else {
            Err(errors)
        }
    }

    fn check_field(&self, field: &FieldSchema, record: &mut R) -> Result<(), String> {
        match field.kind {
            InputKind::Text | InputKind::Email | InputKind::Phone | InputKind::MultiLine => {
                let raw = record.get(field.name).map_err(|e| e.to_string())?.display();
                let value = raw.trim();
                if field.required && value.is_empty() {
                    return Err(MSG_REQUIRED.into());
                }
                if field.kind == InputKind::Email && !value.is_empty() && !is_valid_email(value) {
                    return Err(MSG_EMAIL.into());
                }
                record
                    .set(field.name, FieldValue::Text(value.to_string()))
                    .map_err(|e| e.to_string())
            }
            InputKind::Integer => {
                let raw = self.text(field.name);
                let raw = raw.trim();
                if raw.is_empty() {
                    return if field.required {
                        Err(MSG_REQUIRED.into())
                    } else {
                        record
                            .set(field.name, FieldValue::Integer(0))
                            .map_err(|e| e.to_string())
                    };
                }
                let value = raw.parse::<i64>().map_err(|_| MSG_INTEGER.to_string())?;
                if value < 0 {
                    return Err(MSG_NEGATIVE.into());
                }
                if let Some((min, max)) = field.bounds {
                    if !(min..=max).contains(&value) {
                        return Err(format!("Допустимо от {min} до {max}"));
                    }
                }
                record
                    .set(field.name, FieldValue::Integer(value))
                    .map_err(|e| e.to_string())
            }
            InputKind::Decimal => {
                let raw = self.text(field.name);
                let raw = raw.trim();
                if raw.is_empty() {
                    return if field.required {
                        Err(MSG_REQUIRED.into())
                    } else {
                        record
                            .set(field.name, FieldValue::Decimal(0.0))
                            .map_err(|e| e.to_string())
                    };
                }
                let value = parse_decimal(raw).ok_or_else(|| MSG_NUMBER.to_string())?;
                if value < 0.0 {
                    return Err(MSG_NEGATIVE.into());
                }
                record
                    .set(field.name, FieldValue::Decimal(value))
                    .map_err(|e| e.to_string())
            }
            InputKind::Reference(_) => match record.get(field.name) {
                Ok(FieldValue::Reference(id)) if id > 0 => Ok(()),
                _ if field.required => Err(MSG_NOT_SELECTED.into()),
                _ => Ok(()),
            },
            InputKind::Choice(_) | InputKind::Checkbox => Ok(()),
        }
    }
}

/// Parse a decimal typed with either `.` or `,` and optional spaces
fn parse_decimal(raw: &str) -> Option<f64> {
    let normalized: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    });
    regex.is_match(email)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Car, Client, Order, Service};
    use pretty_assertions::assert_eq;
    use tuning_core::OrderStatus;

    fn refs() -> ReferenceLists {
        ReferenceLists::new(
            &[Client::named(7, "A"), Client::named(8, "B")],
            &[Car {
                id: Some(3),
                brand: "BMW".into(),
                model: "M3".into(),
                ..Car::default()
            }],
        )
    }

    #[test]
    fn test_edit_draft_does_not_alias_original() {
        let original = Client {
            phone: "+7 900".into(),
            ..Client::named(1, "Петров")
        };
        let mut draft = Draft::open(Some(&original), &refs());
        assert_eq!(draft.record(), &original);
        assert_eq!(draft.mode(), DraftMode::Edit(1));

        draft.set_text("name", "Сидоров").unwrap();
        assert_eq!(original.name, "Петров");
        assert_eq!(draft.text("name"), "Сидоров");
    }

    #[test]
    fn test_car_create_defaults_to_first_client() {
        let refs = ReferenceLists::new(&[Client::named(7, "A")], &[]);
        let draft = Draft::<Car>::open(None, &refs);
        assert_eq!(draft.mode(), DraftMode::Create);
        assert_eq!(draft.reference("client_id"), 7);
    }

    #[test]
    fn test_invalid_amount_is_rejected() {
        let mut draft = Draft::<Order>::open(None, &refs());
        draft.set_text("total_amount", "abc").unwrap();

        let errors = draft.submit().unwrap_err();
        assert_eq!(FieldError::message_for(&errors, "total_amount"), Some(MSG_NUMBER));
    }

    #[test]
    fn test_order_submit() {
        let mut draft = Draft::<Order>::open(None, &refs());
        assert_eq!(draft.text("total_amount"), "");
        draft.set_text("total_amount", "125 000,50").unwrap();
        draft.set_text("status", "В работе").unwrap();

        let order = draft.submit().unwrap();
        assert_eq!(order.total_amount, 125000.5);
        assert_eq!(order.status, OrderStatus::InProgress);
        assert_eq!((order.client_id, order.car_id), (7, 3));
        assert_eq!(order.id, None);
    }

    #[test]
    fn test_required_and_email_checks() {
        let mut draft = Draft::<Client>::open(None, &refs());
        draft.set_text("email", "not-an-email").unwrap();

        let errors = draft.submit().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "phone", "email"]);

        draft.set_text("name", "  Иванов Иван  ").unwrap();
        draft.set_text("phone", "+7 (999) 123-45-67").unwrap();
        draft.set_text("email", "").unwrap();
        let client = draft.submit().unwrap();
        assert_eq!(client.name, "Иванов Иван");
        assert_eq!(client.email, None);
    }

    #[test]
    fn test_missing_reference_is_rejected() {
        let mut draft = Draft::<Order>::open(None, &ReferenceLists::default());
        draft.set_text("total_amount", "100").unwrap();
        let errors = draft.submit().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["client_id", "car_id"]);

        draft.set_text("client_id", "8").unwrap();
        draft.select_reference("car_id", 3).unwrap();
        assert!(draft.submit().is_ok());
    }

    #[test]
    fn test_negative_price_and_bad_year() {
        let mut service = Draft::<Service>::open(None, &refs());
        service.set_text("name", "Выхлоп").unwrap();
        service.set_text("price", "-5").unwrap();
        assert_eq!(
            service.submit().unwrap_err(),
            vec![FieldError::new("price", MSG_NEGATIVE)]
        );

        let mut car = Draft::<Car>::open(None, &refs());
        car.set_text("brand", "Audi").unwrap();
        car.set_text("model", "RS6").unwrap();
        car.set_text("year", "20.5").unwrap();
        assert_eq!(
            car.submit().unwrap_err(),
            vec![FieldError::new("year", MSG_INTEGER)]
        );
    }

    #[test]
    fn test_year_sign_and_range() {
        let mut car = Draft::<Car>::open(None, &refs());
        car.set_text("brand", "Audi").unwrap();
        car.set_text("model", "RS6").unwrap();

        car.set_text("year", "-5").unwrap();
        assert_eq!(
            car.submit().unwrap_err(),
            vec![FieldError::new("year", MSG_NEGATIVE)]
        );

        for year in ["0", "1899", "2101"] {
            car.set_text("year", year).unwrap();
            assert_eq!(
                car.submit().unwrap_err(),
                vec![FieldError::new("year", "Допустимо от 1900 до 2100")]
            );
        }

        car.set_text("year", "1900").unwrap();
        assert!(car.submit().is_ok());
    }

    #[test]
    fn test_edit_draft_shows_existing_numbers() {
        let service = Service {
            id: Some(4),
            name: "Stage 1".into(),
            price: 35000.0,
            popular: true,
            ..Service::default()
        };
        let mut draft = Draft::open(Some(&service), &refs());
        assert_eq!(draft.text("price"), "35000");
        assert!(draft.is_checked("popular"));

        draft.set_checked("popular", false).unwrap();
        let saved = draft.submit().unwrap();
        assert_eq!(saved.id, Some(4));
        assert!(!saved.popular);
        assert!(service.popular);
    }

    #[test]
    fn test_choice_and_unknown_fields() {
        let mut draft = Draft::<Order>::open(None, &refs());
        assert!(draft.set_text("status", "Отменен").is_err());
        assert!(draft.set_text("discount", "5").is_err());
        assert!(draft.set_text("client_id", "x").is_err());
    }
}
