//! Core types used throughout the dashboard
//!
//! Entity kinds double as the API discriminator, order statuses carry their
//! Russian wire strings, and views describe the tabs of the main window.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

// ============================================================================
// Identifiers
// ============================================================================

/// Server-assigned record identifier
pub type RecordId = i64;

// ============================================================================
// Entity Kind
// ============================================================================

/// The four record collections served by the API.
///
/// The serialized form (`"clients"`, `"cars"`, ...) is the value of the
/// `entity` query parameter on reads and the `entity` body field on writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Clients,
    Cars,
    Services,
    Orders,
}

impl EntityKind {
    /// All kinds, in load order
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Clients,
        EntityKind::Cars,
        EntityKind::Services,
        EntityKind::Orders,
    ];

    /// API discriminator string
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Clients => "clients",
            EntityKind::Cars => "cars",
            EntityKind::Services => "services",
            EntityKind::Orders => "orders",
        }
    }

    /// Singular display name (for dialog titles)
    pub fn singular_name(&self) -> &'static str {
        match self {
            EntityKind::Clients => "клиента",
            EntityKind::Cars => "автомобиль",
            EntityKind::Services => "услугу",
            EntityKind::Orders => "заказ",
        }
    }

    /// Plural display name
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Clients => "Клиенты",
            EntityKind::Cars => "Автомобили",
            EntityKind::Services => "Услуги",
            EntityKind::Orders => "Заказы",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Order Status
// ============================================================================

/// Lifecycle status of an order.
///
/// Serialized as the Russian label the backend stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Ожидание")]
    Pending,
    #[serde(rename = "В работе")]
    InProgress,
    #[serde(rename = "Завершен")]
    Completed,
}

impl OrderStatus {
    /// All statuses, in workflow order
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Completed,
    ];

    /// Wire and display label
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Ожидание",
            OrderStatus::InProgress => "В работе",
            OrderStatus::Completed => "Завершен",
        }
    }

    /// Whether the order counts as active work on the dashboard
    pub fn is_active(&self) -> bool {
        matches!(self, OrderStatus::InProgress)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.label() == s.trim())
            .ok_or_else(|| DashboardError::UnknownStatus(s.to_string()))
    }
}

// ============================================================================
// Views
// ============================================================================

/// Tabs of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Summary cards, recent orders and popular services
    #[default]
    Dashboard,
    Orders,
    Cars,
    Clients,
    Services,
}

impl View {
    /// All views, in sidebar order
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Orders,
        View::Cars,
        View::Clients,
        View::Services,
    ];

    /// Sidebar label
    pub fn display_name(&self) -> &'static str {
        match self {
            View::Dashboard => "Дашборд",
            View::Orders => "Заказы",
            View::Cars => "Автомобили",
            View::Clients => "Клиенты",
            View::Services => "Услуги",
        }
    }

    /// Page heading
    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Панель управления",
            other => other.display_name(),
        }
    }

    /// Page subheading
    pub fn subtitle(&self) -> &'static str {
        match self {
            View::Dashboard => "Обзор ключевых показателей",
            View::Orders => "Управление заказами клиентов",
            View::Cars => "База автомобилей в работе",
            View::Clients => "База клиентов салона",
            View::Services => "Каталог услуг тюнинга",
        }
    }

    /// Icon for the sidebar
    pub fn icon(&self) -> &'static str {
        match self {
            View::Dashboard => "📊",
            View::Orders => "📋",
            View::Cars => "🚗",
            View::Clients => "👥",
            View::Services => "🔧",
        }
    }

    /// The collection this view lists, if any
    pub fn entity_kind(&self) -> Option<EntityKind> {
        match self {
            View::Dashboard => None,
            View::Orders => Some(EntityKind::Orders),
            View::Cars => Some(EntityKind::Cars),
            View::Clients => Some(EntityKind::Clients),
            View::Services => Some(EntityKind::Services),
        }
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
    fn test_entity_kind_wire_names() {
        assert_eq!(EntityKind::Clients.as_str(), "clients");
        assert_eq!(EntityKind::Orders.to_string(), "orders");
        assert_eq!(
            serde_json::to_string(&EntityKind::Services).unwrap(),
            "\"services\""
        );
    }

    #[test]
    fn test_order_status_serde() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).unwrap(),
            "\"В работе\""
        );
        let status: OrderStatus = serde_json::from_str("\"Завершен\"").unwrap();
        assert_eq!(status, OrderStatus::Completed);
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_order_status_from_str() {
        assert_eq!("Ожидание".parse::<OrderStatus>().unwrap(), OrderStatus::Pending);
        assert_eq!(" В работе ".parse::<OrderStatus>().unwrap(), OrderStatus::InProgress);
        assert!("Отменен".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_only_in_progress_is_active() {
        assert!(OrderStatus::InProgress.is_active());
        assert!(!OrderStatus::Pending.is_active());
        assert!(!OrderStatus::Completed.is_active());
    }

    #[test]
    fn test_view_properties() {
        assert_eq!(View::default(), View::Dashboard);
        assert_eq!(View::Dashboard.entity_kind(), None);
        assert_eq!(View::Cars.entity_kind(), Some(EntityKind::Cars));
        assert_eq!(View::Dashboard.title(), "Панель управления");
        assert_eq!(View::Clients.title(), "Клиенты");
    }
}
