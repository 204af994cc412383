//! Service catalogue records

use serde::{Deserialize, Serialize};
use tuning_core::{DashboardResult, EntityKind, RecordId};

use crate::lenient;
use crate::record::{self, Record};
use crate::reference::ReferenceLists;
use crate::schema::{FieldSchema, FieldValue, InputKind};

/// A tuning service offered by the shop
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_id"
    )]
    pub id: Option<RecordId>,

    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,

    /// Price in rubles
    #[serde(default, deserialize_with = "lenient::amount")]
    pub price: f64,

    /// Free-form duration ("2-3 дня")
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub duration: Option<String>,

    /// Read as `popular` (or `is_popular`), written as `is_popular`
    #[serde(
        default,
        rename(serialize = "is_popular", deserialize = "popular"),
        alias = "is_popular"
    )]
    pub popular: bool,
}

const SCHEMA: &[FieldSchema] = &[
    FieldSchema::new("name", "Название услуги", InputKind::Text)
        .required()
        .placeholder("Чип-тюнинг Stage 1"),
    FieldSchema::new("description", "Описание", InputKind::MultiLine)
        .placeholder("Краткое описание услуги"),
    FieldSchema::new("price", "Цена (₽)", InputKind::Decimal)
        .required()
        .placeholder("35000"),
    FieldSchema::new("duration", "Длительность", InputKind::Text).placeholder("2-3 дня"),
    FieldSchema::new("popular", "Популярная услуга", InputKind::Checkbox),
];

impl Record for Service {
    const KIND: EntityKind = EntityKind::Services;

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
            "description" => Ok(record::show(&self.description)),
            "price" => Ok(FieldValue::Decimal(self.price)),
            "duration" => Ok(record::show(&self.duration)),
            "popular" => Ok(FieldValue::Flag(self.popular)),
            _ => Err(record::unknown(Self::KIND, field)),
        }
    }

    fn set(&mut self, field: &str, value: FieldValue) -> DashboardResult<()> {
        match field {
            "name" => self.name = record::text(Self::KIND, field, value)?,
            "description" => self.description = record::opt_text(Self::KIND, field, value)?,
            "price" => self.price = record::decimal(Self::KIND, field, value)?,
            "duration" => self.duration = record::opt_text(Self::KIND, field, value)?,
            "popular" => self.popular = record::flag(Self::KIND, field, value)?,
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
