//! Client records

use serde::{Deserialize, Serialize};
use tuning_core::{DashboardResult, EntityKind, RecordId};

use crate::lenient;
use crate::record::{self, Record};
use crate::reference::ReferenceLists;
use crate::schema::{FieldSchema, FieldValue, InputKind};

/// A customer of the shop
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Server id, absent until created
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_id"
    )]
    pub id: Option<RecordId>,

    /// Full name
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub email: Option<String>,

    /// Number of orders (server summary, read-only)
    #[serde(rename = "orders", default, skip_serializing, deserialize_with = "lenient::whole")]
    pub order_count: i64,

    /// Amount spent over all orders (server summary, read-only)
    #[serde(rename = "total", default, skip_serializing, deserialize_with = "lenient::amount")]
    pub total_spent: f64,
}

const SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("name", "ФИО", InputKind::Text)
        .required()
        .placeholder("Иванов Иван Иванович"),
    FieldSchema::new("phone", "Телефон", InputKind::Phone)
        .required()
        .placeholder("+7 (999) 123-45-67"),
    FieldSchema::new("email", "Email", InputKind::Email).placeholder("client@mail.ru"),
];

impl Client {
    /// A persisted client with just a name
    pub fn named(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Record for Client {
    const KIND: EntityKind = EntityKind::Clients;

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn schema() -> &'static [FieldSchema] {
        SCHEMA
    }

    fn defaults(_refs: &ReferenceLists) -> Self {
        Self::default()
    }

    fn get(&self, field: &str) -> DashboardResult<FieldValue> {
        match field {
            "name" => Ok(FieldValue::Text(self.name.clone())),
            "phone" => Ok(FieldValue::Text(self.phone.clone())),
            "email" => Ok(record::show(&self.email)),
            _ => Err(record::unknown(Self::KIND, field)),
        }
    }

    fn set(&mut self, field: &str, value: FieldValue) -> DashboardResult<()> {
        match field {
            "name" => self.name = record::text(Self::KIND, field, value)?,
            "phone" => self.phone = record::text(Self::KIND, field, value)?,
            "email" => self.email = record::opt_text(Self::KIND, field, value)?,
            _ => return Err(record::unknown(Self::KIND, field)),
        }
        Ok(())
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

// ============================================================================
// Tests
// ============================================================================
