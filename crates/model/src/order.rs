//! Order records

use serde::{Deserialize, Serialize};
use tuning_core::{DashboardResult, EntityKind, OrderStatus, RecordId, format_order_number};

use crate::lenient;
use crate::record::{self, Record};
use crate::reference::ReferenceLists;
use crate::schema::{FieldSchema, FieldValue, InputKind, ReferenceSource, STATUS_CHOICES};

/// A work order for one car of one client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Listings send this zero-padded (`"007"`)
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_id"
    )]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient::id_or_zero")]
    pub client_id: RecordId,

    #[serde(default, deserialize_with = "lenient::id_or_zero")]
    pub car_id: RecordId,

    #[serde(default, deserialize_with = "lenient::status")]
    pub status: OrderStatus,

    /// Order amount in rubles
    #[serde(default, alias = "total", deserialize_with = "lenient::amount")]
    pub total_amount: f64,

    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub notes: Option<String>,

    /// Client name (server summary, read-only)
    #[serde(rename = "client", default, skip_serializing, deserialize_with = "lenient::opt_text")]
    pub client_name: Option<String>,

    /// "Brand Model" (server summary, read-only)
    #[serde(rename = "car", default, skip_serializing, deserialize_with = "lenient::opt_text")]
    pub car_name: Option<String>,

    /// Creation date as `DD.MM.YYYY` (server summary, read-only)
    #[serde(default, skip_serializing, deserialize_with = "lenient::opt_text")]
    pub date: Option<String>,
}

const SCHEMA: &[FieldSchema] = &[
    FieldSchema::new(
        "client_id",
        "Клиент",
        InputKind::Reference(ReferenceSource::Clients),
    )
    .required()
    .placeholder("Выберите клиента"),
    FieldSchema::new("car_id", "Автомобиль", InputKind::Reference(ReferenceSource::Cars))
        .required()
        .placeholder("Выберите автомобиль"),
    FieldSchema::new("status", "Статус", InputKind::Choice(STATUS_CHOICES)).required(),
    FieldSchema::new("total_amount", "Сумма (₽)", InputKind::Decimal)
        .required()
        .placeholder("125000"),
    FieldSchema::new("notes", "Примечания", InputKind::MultiLine)
        .placeholder("Дополнительная информация о заказе"),
];

impl Order {
    /// Order number as shown in tables, empty while unsaved
    pub fn number(&self) -> String {
        self.id.map(format_order_number).unwrap_or_default()
    }
}

impl Record for Order {
    const KIND: EntityKind = EntityKind::Orders;

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
            client_id: refs.first_id(ReferenceSource::Clients).unwrap_or(0),
            car_id: refs.first_id(ReferenceSource::Cars).unwrap_or(0),
            status: OrderStatus::Pending,
            ..Self::default()
        }
    }

    fn get(&self, field: &str) -> DashboardResult<FieldValue> {
        match field {
            "client_id" => Ok(FieldValue::Reference(self.client_id)),
            "car_id" => Ok(FieldValue::Reference(self.car_id)),
            "status" => Ok(FieldValue::Text(self.status.label().to_string())),
            "total_amount" => Ok(FieldValue::Decimal(self.total_amount)),
            "notes" => Ok(record::show(&self.notes)),
            _ => Err(record::unknown(Self::KIND, field)),
        }
    }

    fn set(&mut self, field: &str, value: FieldValue) -> DashboardResult<()> {
        match field {
            "client_id" => self.client_id = record::reference(Self::KIND, field, value)?,
            "car_id" => self.car_id = record::reference(Self::KIND, field, value)?,
            "status" => self.status = record::text(Self::KIND, field, value)?.parse()?,
            "total_amount" => self.total_amount = record::decimal(Self::KIND, field, value)?,
            "notes" => self.notes = record::opt_text(Self::KIND, field, value)?,
            _ => return Err(record::unknown(Self::KIND, field)),
        }
        Ok(())
    }

    fn label(&self) -> String {
        match self.id {
            Some(id) => format!("заказ {}", format_order_number(id)),
            None => "новый заказ".to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
