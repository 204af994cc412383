//! Kind-erased records and drafts
//!
//! The dialog overlay and the sync layer handle "some record of some kind".
//! `EntityRecord` and `EntityDraft` wrap the four concrete types and
//! dispatch to them, so a single dialog component edits every kind.

use tuning_core::{DashboardResult, EntityKind, RecordId};

use crate::car::Car;
use crate::client::Client;
use crate::draft::{Draft, FieldError};
use crate::order::Order;
use crate::record::Record;
use crate::reference::ReferenceLists;
use crate::schema::FieldSchema;
use crate::service::Service;

// ============================================================================
// Entity Record
// ============================================================================

/// A record of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum EntityRecord {
    Client(Client),
    Car(Car),
    Service(Service),
    Order(Order),
}

macro_rules! each_record {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            EntityRecord::Client($inner) => $body,
            EntityRecord::Car($inner) => $body,
            EntityRecord::Service($inner) => $body,
            EntityRecord::Order($inner) => $body,
        }
    };
}

impl EntityRecord {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRecord::Client(_) => EntityKind::Clients,
            EntityRecord::Car(_) => EntityKind::Cars,
            EntityRecord::Service(_) => EntityKind::Services,
            EntityRecord::Order(_) => EntityKind::Orders,
        }
    }

    pub fn id(&self) -> Option<RecordId> {
        each_record!(self, r => r.id())
    }

    pub fn set_id(&mut self, id: RecordId) {
        each_record!(self, r => r.set_id(id))
    }

    pub fn label(&self) -> String {
        each_record!(self, r => r.label())
    }

    /// The record as a JSON object, without the entity discriminator
    pub fn to_json(&self) -> DashboardResult<serde_json::Value> {
        Ok(each_record!(self, r => serde_json::to_value(r)?))
    }
}

impl From<Client> for EntityRecord {
    fn from(value: Client) -> Self {
        EntityRecord::Client(value)
    }
}

impl From<Car> for EntityRecord {
    fn from(value: Car) -> Self {
        EntityRecord::Car(value)
    }
}

impl From<Service> for EntityRecord {
    fn from(value: Service) -> Self {
        EntityRecord::Service(value)
    }
}

impl From<Order> for EntityRecord {
    fn from(value: Order) -> Self {
        EntityRecord::Order(value)
    }
}

// ============================================================================
// Editor Target
// ============================================================================

/// What an open dialog is editing
#[derive(Debug, Clone, PartialEq)]
pub enum EditorTarget {
    /// A new record of the given kind
    Create(EntityKind),
    /// A copy of an existing record
    Edit(EntityRecord),
}

impl EditorTarget {
    pub fn kind(&self) -> EntityKind {
        match self {
            EditorTarget::Create(kind) => *kind,
            EditorTarget::Edit(record) => record.kind(),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, EditorTarget::Edit(_))
    }
}

// ============================================================================
// Entity Draft
// ============================================================================

/// A draft of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum EntityDraft {
    Client(Draft<Client>),
    Car(Draft<Car>),
    Service(Draft<Service>),
    Order(Draft<Order>),
}

macro_rules! each_draft {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            EntityDraft::Client($inner) => $body,
            EntityDraft::Car($inner) => $body,
            EntityDraft::Service($inner) => $body,
            EntityDraft::Order($inner) => $body,
        }
    };
}

impl EntityDraft {
    /// Open a draft for the target: a copy in edit mode, defaults in create mode
    pub fn open(target: &EditorTarget, refs: &ReferenceLists) -> Self {
        match target {
            EditorTarget::Create(EntityKind::Clients) => EntityDraft::Client(Draft::open(None, refs)),
            EditorTarget::Create(EntityKind::Cars) => EntityDraft::Car(Draft::open(None, refs)),
            EditorTarget::Create(EntityKind::Services) => {
                EntityDraft::Service(Draft::open(None, refs))
            }
            EditorTarget::Create(EntityKind::Orders) => EntityDraft::Order(Draft::open(None, refs)),
            EditorTarget::Edit(EntityRecord::Client(r)) => {
                EntityDraft::Client(Draft::open(Some(r), refs))
            }
            EditorTarget::Edit(EntityRecord::Car(r)) => EntityDraft::Car(Draft::open(Some(r), refs)),
            EditorTarget::Edit(EntityRecord::Service(r)) => {
                EntityDraft::Service(Draft::open(Some(r), refs))
            }
            EditorTarget::Edit(EntityRecord::Order(r)) => {
                EntityDraft::Order(Draft::open(Some(r), refs))
            }
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            EntityDraft::Client(_) => EntityKind::Clients,
            EntityDraft::Car(_) => EntityKind::Cars,
            EntityDraft::Service(_) => EntityKind::Services,
            EntityDraft::Order(_) => EntityKind::Orders,
        }
    }

    pub fn is_edit(&self) -> bool {
        each_draft!(self, d => d.is_edit())
    }

    pub fn schema(&self) -> &'static [FieldSchema] {
        each_draft!(self, d => d.schema())
    }

    pub fn text(&self, field: &str) -> String {
        each_draft!(self, d => d.text(field))
    }

    pub fn is_checked(&self, field: &str) -> bool {
        each_draft!(self, d => d.is_checked(field))
    }

    pub fn reference(&self, field: &str) -> RecordId {
        each_draft!(self, d => d.reference(field))
    }

    pub fn set_text(&mut self, field: &str, value: &str) -> DashboardResult<()> {
        each_draft!(self, d => d.set_text(field, value))
    }

    pub fn set_checked(&mut self, field: &str, checked: bool) -> DashboardResult<()> {
        each_draft!(self, d => d.set_checked(field, checked))
    }

    pub fn select_reference(&mut self, field: &str, id: RecordId) -> DashboardResult<()> {
        each_draft!(self, d => d.select_reference(field, id))
    }

    /// Validate and produce the record for the save callback
    pub fn submit(&self) -> Result<EntityRecord, Vec<FieldError>> {
        each_draft!(self, d => d.submit().map(EntityRecord::from))
    }

    /// Dialog heading
    pub fn title(&self) -> String {
        let kind = self.kind();
        if self.is_edit() {
            format!("Редактировать {}", kind.singular_name())
        } else if kind == EntityKind::Orders {
            "Создать заказ".to_string()
        } else {
            format!("Добавить {}", kind.singular_name())
        }
    }

    /// Label of the submit button
    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() { "Сохранить" } else { "Создать" }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_titles() {
        let refs = ReferenceLists::default();
        let create_car = EntityDraft::open(&EditorTarget::Create(EntityKind::Cars), &refs);
        assert_eq!(create_car.title(), "Добавить автомобиль");
        assert_eq!(create_car.submit_label(), "Создать");

        let create_order = EntityDraft::open(&EditorTarget::Create(EntityKind::Orders), &refs);
        assert_eq!(create_order.title(), "Создать заказ");

        let edit = EntityDraft::open(
            &EditorTarget::Edit(Client::named(1, "A").into()),
            &refs,
        );
        assert_eq!(edit.title(), "Редактировать клиента");
        assert_eq!(edit.submit_label(), "Сохранить");
    }

    #[test]
    fn test_target_kind_matches_draft_kind() {
        let refs = ReferenceLists::default();
        for kind in EntityKind::ALL {
            let target = EditorTarget::Create(kind);
            assert_eq!(target.kind(), kind);
            assert_eq!(EntityDraft::open(&target, &refs).kind(), kind);
        }
    }

    #[test]
    fn test_submit_wraps_record() {
        let refs = ReferenceLists::default();
        let mut draft = EntityDraft::open(&EditorTarget::Create(EntityKind::Services), &refs);
        draft.set_text("name", "Stage 2").unwrap();
        draft.set_text("price", "55000").unwrap();
        draft.set_checked("popular", true).unwrap();

        let record = draft.submit().unwrap();
        assert_eq!(record.kind(), EntityKind::Services);
        assert_eq!(record.id(), None);
        let json = record.to_json().unwrap();
        assert_eq!(json["is_popular"], serde_json::json!(true));
        assert_eq!(json["price"], serde_json::json!(55000.0));
    }

    #[test]
    fn test_set_id() {
        let mut record = EntityRecord::from(Order::default());
        record.set_id(12);
        assert_eq!(record.id(), Some(12));
        assert_eq!(record.label(), "заказ #012");
    }
}
