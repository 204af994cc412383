//! Car records

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tuning_core::{DashboardError, DashboardResult, EntityKind, RecordId};

use crate::lenient;
use crate::record::{self, Record};
use crate::reference::ReferenceLists;
use crate::schema::{FieldSchema, FieldValue, InputKind, ReferenceSource};

/// A vehicle owned by a client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Car {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_id"
    )]
    pub id: Option<RecordId>,

    #[serde(default)]
    pub brand: String,

    #[serde(default)]
    pub model: String,

    #[serde(default, deserialize_with = "lenient::year")]
    pub year: i32,

    /// Registration plate
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub license_plate: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub vin: Option<String>,

    /// Owning client; `0` until selected or backfilled from `owner`
    #[serde(default, deserialize_with = "lenient::id_or_zero")]
    pub client_id: RecordId,

    /// Owner name (server summary, read-only)
    #[serde(default, skip_serializing, deserialize_with = "lenient::opt_text")]
    pub owner: Option<String>,

    /// Number of orders (server summary, read-only)
    #[serde(rename = "orders", default, skip_serializing, deserialize_with = "lenient::whole")]
    pub order_count: i64,
}

const SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("brand", "Марка", InputKind::Text)
        .required()
        .placeholder("BMW"),
    FieldSchema::new("model", "Модель", InputKind::Text)
        .required()
        .placeholder("M3"),
    FieldSchema::new("year", "Год", InputKind::Integer)
        .required()
        .between(1900, 2100),
    FieldSchema::new("license_plate", "Гос. номер", InputKind::Text).placeholder("А123ВС777"),
    FieldSchema::new("vin", "VIN", InputKind::Text).placeholder("WBS8M9C09NCJ12345"),
    FieldSchema::new(
        "client_id",
        "Владелец",
        InputKind::Reference(ReferenceSource::Clients),
    )
    .required()
    .placeholder("Выберите владельца"),
];

impl Car {
    /// "Brand Model", as shown in selection lists and order rows
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model).trim().to_string()
    }
}

impl Record for Car {
    const KIND: EntityKind = EntityKind::Cars;

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn schema() -> &'static [FieldSchema] {
        SCHEMA
    }

    fn defaults(refs: &ReferenceLists) -> Self {
        Self {
            year: chrono::Local::now().year(),
            client_id: refs.first_id(ReferenceSource::Clients).unwrap_or(0),
            ..Self::default()
        }
    }

    fn get(&self, field: &str) -> DashboardResult<FieldValue> {
        match field {
            "brand" => Ok(FieldValue::Text(self.brand.clone())),
            "model" => Ok(FieldValue::Text(self.model.clone())),
            "year" => Ok(FieldValue::Integer(i64::from(self.year))),
            "license_plate" => Ok(record::show(&self.license_plate)),
            "vin" => Ok(record::show(&self.vin)),
            "client_id" => Ok(FieldValue::Reference(self.client_id)),
            _ => Err(record::unknown(Self::KIND, field)),
        }
    }

    fn set(&mut self, field: &str, value: FieldValue) -> DashboardResult<()> {
        match field {
            "brand" => self.brand = record::text(Self::KIND, field, value)?,
            "model" => self.model = record::text(Self::KIND, field, value)?,
            "year" => {
                let year = record::integer(Self::KIND, field, value)?;
                self.year = i32::try_from(year).map_err(|_| {
                    DashboardError::field_validation(Self::KIND, field, "year out of range")
                })?;
            }
            "license_plate" => self.license_plate = record::opt_text(Self::KIND, field, value)?,
            "vin" => self.vin = record::opt_text(Self::KIND, field, value)?,
            "client_id" => self.client_id = record::reference(Self::KIND, field, value)?,
            _ => return Err(record::unknown(Self::KIND, field)),
        }
        Ok(())
    }

    fn label(&self) -> String {
        match &self.license_plate {
            Some(plate) => format!("{} ({plate})", self.display_name()),
            None => self.display_name(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
