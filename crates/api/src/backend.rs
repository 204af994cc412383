//! The seam between the sync layer and the network
//!
//! `DashboardSession` and the UI talk to a `Backend`; `ApiClient` is the real
//! one, tests plug in an in-memory fake.

use async_trait::async_trait;
use tuning_core::RecordId;
use tuning_model::{EntityRecord, Record};

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Read and write access to the four collections
#[async_trait]
pub trait Backend: Send + Sync {
    /// Fetch one collection
    async fn list<R: Record>(&self) -> ClientResult<Vec<R>>;

    /// Create a record, returning the server-assigned id
    async fn create(&self, record: &EntityRecord) -> ClientResult<RecordId>;

    /// Update a record that already has an id
    async fn update(&self, record: &EntityRecord) -> ClientResult<()>;
}

#[async_trait]
impl Backend for ApiClient {
    async fn list<R: Record>(&self) -> ClientResult<Vec<R>> {
        ApiClient::list(self).await
    }

    async fn create(&self, record: &EntityRecord) -> ClientResult<RecordId> {
        ApiClient::create(self, record).await
    }

    async fn update(&self, record: &EntityRecord) -> ClientResult<()> {
        ApiClient::update(self, record).await
    }
}
