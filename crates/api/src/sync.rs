//! In-memory collections and the load / save / reconcile cycle
//!
//! The four collections are replaced independently when a load resolves, so
//! one failing fetch never blanks the others. Loads are ticketed: a result
//! is applied only if no newer load has been applied already.
//!
//! Nothing here holds a lock or a borrow across an `await`. Callers take a
//! ticket, await [`fetch_all`] with no state borrowed, then hand the result
//! back to [`DashboardData::apply_load`].

use tuning_core::{EntityKind, RecordId};
use tuning_model::{Car, Client, EntityRecord, Order, Record, ReferenceLists, Service};

use crate::backend::Backend;
use crate::error::ClientResult;

// ============================================================================
// Load Tickets
// ============================================================================

/// Issued when a load starts; orders overlapping loads
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Results of one concurrent fetch of all four collections
#[derive(Debug)]
pub struct FetchAll {
    pub clients: ClientResult<Vec<Client>>,
    pub cars: ClientResult<Vec<Car>>,
    pub services: ClientResult<Vec<Service>>,
    pub orders: ClientResult<Vec<Order>>,
}

/// A collection that failed to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: EntityKind,
    /// Message for the status bar
    pub message: String,
}

/// Outcome of applying a load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// A newer load had already been applied; nothing changed
    pub stale: bool,
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    /// Applied, and every collection loaded
    pub fn is_complete(&self) -> bool {
        !self.stale && self.failures.is_empty()
    }

    /// One-line summary of the failures for the status bar
    pub fn failure_summary(&self) -> Option<String> {
        if self.failures.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .failures
            .iter()
            .map(|f| format!("{}: {}", f.kind.display_name(), f.message))
            .collect();
        Some(format!("Не удалось загрузить данные. {}", parts.join("; ")))
    }
}

/// Fetch all four collections concurrently. Each result stands alone.
pub async fn fetch_all<B: Backend>(backend: &B) -> FetchAll {
    let (clients, cars, services, orders) = futures::join!(
        backend.list::<Client>(),
        backend.list::<Car>(),
        backend.list::<Service>(),
        backend.list::<Order>(),
    );
    FetchAll {
        clients,
        cars,
        services,
        orders,
    }
}

/// Send one record to the backend: update when it has an id, create otherwise.
///
/// Returns the record as persisted (with the new id after a create).
pub async fn persist<B: Backend>(backend: &B, mut record: EntityRecord) -> ClientResult<EntityRecord> {
    match record.id() {
        Some(id) => {
            backend.update(&record).await?;
            tracing::info!("Updated {} {} ({})", record.kind(), id, record.label());
        }
        None => {
            let id = backend.create(&record).await?;
            record.set_id(id);
            tracing::info!("Created {} {} ({})", record.kind(), id, record.label());
        }
    }
    Ok(record)
}

// ============================================================================
// Dashboard Data
// ============================================================================

/// The four collections plus load bookkeeping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub clients: Vec<Client>,
    pub cars: Vec<Car>,
    pub services: Vec<Service>,
    pub orders: Vec<Order>,
    /// A load is in flight
    pub loading: bool,
    issued: u64,
    applied: u64,
}

impl DashboardData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load and take its ticket
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        self.loading = true;
        LoadTicket(self.issued)
    }

    /// Apply fetched collections if the ticket is not older than the last applied load
    pub fn apply_load(&mut self, ticket: LoadTicket, fetched: FetchAll) -> LoadReport {
        if ticket.0 < self.applied {
            tracing::debug!(
                "Discarding stale load {} (already applied {})",
                ticket.0,
                self.applied
            );
            return LoadReport {
                stale: true,
                failures: Vec::new(),
            };
        }
        self.applied = ticket.0;
        self.loading = self.issued > ticket.0;

        let mut failures = Vec::new();
        replace_or_keep(&mut self.clients, fetched.clients, &mut failures);
        replace_or_keep(&mut self.cars, fetched.cars, &mut failures);
        replace_or_keep(&mut self.services, fetched.services, &mut failures);
        replace_or_keep(&mut self.orders, fetched.orders, &mut failures);

        self.backfill_references();

        tracing::info!(
            "Loaded {} clients, {} cars, {} services, {} orders",
            self.clients.len(),
            self.cars.len(),
            self.services.len(),
            self.orders.len()
        );
        LoadReport {
            stale: false,
            failures,
        }
    }

    /// Put a persisted record into its collection: replace by id, or append
    pub fn apply_saved(&mut self, record: EntityRecord) {
        match record {
            EntityRecord::Client(r) => upsert(&mut self.clients, r),
            EntityRecord::Car(r) => upsert(&mut self.cars, r),
            EntityRecord::Service(r) => upsert(&mut self.services, r),
            EntityRecord::Order(r) => upsert(&mut self.orders, r),
        }
    }

    /// Fill missing foreign keys from the name summaries listings carry
    fn backfill_references(&mut self) {
        let client_by_name = |name: &str| {
            self.clients
                .iter()
                .find(|c| c.name == name)
                .and_then(|c| c.id)
        };

        for car in self.cars.iter_mut().filter(|c| c.client_id == 0) {
            if let Some(id) = car.owner.as_deref().and_then(client_by_name) {
                car.client_id = id;
            }
        }

        for order in self.orders.iter_mut() {
            if order.client_id == 0 {
                if let Some(id) = order.client_name.as_deref().and_then(client_by_name) {
                    order.client_id = id;
                }
            }
            if order.car_id == 0 {
                if let Some(name) = order.car_name.as_deref() {
                    // Prefer the client's own car when several share a name
                    let matching = |c: &&Car| c.display_name() == name;
                    let car = self
                        .cars
                        .iter()
                        .filter(matching)
                        .find(|c| c.client_id == order.client_id)
                        .or_else(|| self.cars.iter().find(matching));
                    if let Some(id) = car.and_then(|c| c.id) {
                        order.car_id = id;
                    }
                }
            }
        }
    }

    // ========================================================================
    // Derived values
    // ========================================================================

    /// Orders currently in work
    pub fn active_order_count(&self) -> usize {
        self.orders.iter().filter(|o| o.status.is_active()).count()
    }

    /// Sum of all order amounts
    pub fn total_revenue(&self) -> f64 {
        self.orders.iter().map(|o| o.total_amount).sum()
    }

    /// The first `n` orders (the backend lists newest first)
    pub fn recent_orders(&self, n: usize) -> &[Order] {
        &self.orders[..n.min(self.orders.len())]
    }

    pub fn popular_services(&self) -> impl Iterator<Item = &Service> {
        self.services.iter().filter(|s| s.popular)
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Clients => self.clients.len(),
            EntityKind::Cars => self.cars.len(),
            EntityKind::Services => self.services.len(),
            EntityKind::Orders => self.orders.len(),
        }
    }

    pub fn client_name(&self, id: RecordId) -> Option<&str> {
        self.clients
            .iter()
            .find(|c| c.id == Some(id))
            .map(|c| c.name.as_str())
    }

    pub fn car_label(&self, id: RecordId) -> Option<String> {
        self.cars
            .iter()
            .find(|c| c.id == Some(id))
            .map(Car::display_name)
    }

    /// Owner shown in the cars table
    pub fn owner_of(&self, car: &Car) -> String {
        self.client_name(car.client_id)
            .map(str::to_string)
            .or_else(|| car.owner.clone())
            .unwrap_or_default()
    }

    /// Client shown in order rows
    pub fn client_of(&self, order: &Order) -> String {
        self.client_name(order.client_id)
            .map(str::to_string)
            .or_else(|| order.client_name.clone())
            .unwrap_or_default()
    }

    /// Car shown in order rows
    pub fn car_of(&self, order: &Order) -> String {
        self.car_label(order.car_id)
            .or_else(|| order.car_name.clone())
            .unwrap_or_default()
    }

    /// Options for the reference selectors of the edit dialogs
    pub fn reference_lists(&self) -> ReferenceLists {
        ReferenceLists::new(&self.clients, &self.cars)
    }
}

fn replace_or_keep<R: Record>(
    target: &mut Vec<R>,
    result: ClientResult<Vec<R>>,
    failures: &mut Vec<LoadFailure>,
) {
    match result {
        Ok(records) => *target = records,
        Err(e) => {
            tracing::warn!("Failed to load {}: {}", R::KIND, e);
            failures.push(LoadFailure {
                kind: R::KIND,
                message: e.user_message(),
            });
        }
    }
}

fn upsert<R: Record>(target: &mut Vec<R>, record: R) {
    let existing = record
        .id()
        .and_then(|id| target.iter().position(|r| r.id() == Some(id)));
    match existing {
        Some(index) => target[index] = record,
        None => target.push(record),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use pretty_assertions::assert_eq;
    use tuning_core::OrderStatus;

    fn order(id: RecordId, status: OrderStatus, total: f64) -> Order {
        Order {
            id: Some(id),
            status,
            total_amount: total,
            ..Order::default()
        }
    }

    fn fetched() -> FetchAll {
        FetchAll {
            clients: Ok(vec![Client::named(1, "Петров Алексей")]),
            cars: Ok(vec![Car {
                id: Some(2),
                brand: "BMW".into(),
                model: "M5".into(),
                owner: Some("Петров Алексей".into()),
                ..Car::default()
            }]),
            services: Ok(vec![]),
            orders: Ok(vec![Order {
                id: Some(3),
                client_name: Some("Петров Алексей".into()),
                car_name: Some("BMW M5".into()),
                ..Order::default()
            }]),
        }
    }

    #[test]
    fn test_derived_values() {
        let data = DashboardData {
            orders: vec![
                order(1, OrderStatus::InProgress, 125000.0),
                order(2, OrderStatus::Completed, 85000.0),
                order(3, OrderStatus::InProgress, 40000.5),
                order(4, OrderStatus::Pending, 0.0),
            ],
            ..DashboardData::default()
        };
        assert_eq!(data.active_order_count(), 2);
        assert_eq!(data.total_revenue(), 250000.5);
        assert_eq!(data.recent_orders(3).len(), 3);
        assert_eq!(data.recent_orders(10).len(), 4);
    }

    #[test]
    fn test_failed_collection_keeps_previous_state() {
        let mut data = DashboardData {
            cars: vec![Car {
                id: Some(9),
                ..Car::default()
            }],
            ..DashboardData::default()
        };
        let ticket = data.begin_load();
        let mut result = fetched();
        result.cars = Err(ClientError::api(500, Some("boom".into())));

        let report = data.apply_load(ticket, result);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].kind, EntityKind::Cars);
        assert_eq!(data.cars[0].id, Some(9));
        assert_eq!(data.clients.len(), 1);
        assert_eq!(data.orders.len(), 1);
        assert!(!data.loading);
        assert!(report.failure_summary().unwrap().contains("Автомобили"));
    }

    #[test]
    fn test_stale_load_is_ignored() {
        let mut data = DashboardData::default();
        let first = data.begin_load();
        let second = data.begin_load();

        let report = data.apply_load(second, fetched());
        assert!(report.is_complete());
        assert!(!data.loading);

        let empty = FetchAll {
            clients: Ok(vec![]),
            cars: Ok(vec![]),
            services: Ok(vec![]),
            orders: Ok(vec![]),
        };
        let report = data.apply_load(first, empty);
        assert!(report.stale);
        assert_eq!(data.clients.len(), 1);
    }

    #[test]
    fn test_older_load_applies_while_newer_pending() {
        let mut data = DashboardData::default();
        let first = data.begin_load();
        let _second = data.begin_load();
        data.apply_load(first, fetched());
        assert_eq!(data.clients.len(), 1);
        assert!(data.loading);
    }

    #[test]
    fn test_backfills_references_from_names() {
        let mut data = DashboardData::default();
        let ticket = data.begin_load();
        data.apply_load(ticket, fetched());

        assert_eq!(data.cars[0].client_id, 1);
        assert_eq!((data.orders[0].client_id, data.orders[0].car_id), (1, 2));
        assert_eq!(data.client_of(&data.orders[0]), "Петров Алексей");
        assert_eq!(data.car_of(&data.orders[0]), "BMW M5");
    }

    #[test]
    fn test_apply_saved_upserts() {
        let mut data = DashboardData {
            clients: vec![Client::named(1, "A")],
            ..DashboardData::default()
        };
        data.apply_saved(Client::named(1, "A2").into());
        data.apply_saved(Client::named(2, "B").into());

        let names: Vec<&str> = data.clients.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A2", "B"]);
    }
}
