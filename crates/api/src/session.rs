//! Headless dashboard session
//!
//! Owns a backend and the dashboard state, and runs the same load and save
//! cycle the desktop UI runs through its signals.

use tuning_core::View;
use tuning_model::EntityRecord;

use crate::backend::Backend;
use crate::error::ClientResult;
use crate::sync::{self, DashboardData, LoadReport};

/// Page-level state driven without a UI
#[derive(Debug)]
pub struct DashboardSession<B: Backend> {
    backend: B,
    data: DashboardData,
    view: View,
    search: String,
}

impl<B: Backend> DashboardSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            data: DashboardData::new(),
            view: View::default(),
            search: String::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Fetch all four collections
    pub async fn load(&mut self) -> LoadReport {
        let ticket = self.data.begin_load();
        let fetched = sync::fetch_all(&self.backend).await;
        self.data.apply_load(ticket, fetched)
    }

    /// Persist a record, apply it locally, then reload everything.
    ///
    /// The reload runs whether or not the write succeeded; a failed write is
    /// never patched into the local collections.
    pub async fn save(&mut self, record: EntityRecord) -> ClientResult<EntityRecord> {
        let result = sync::persist(&self.backend, record).await;
        match &result {
            Ok(saved) => self.data.apply_saved(saved.clone()),
            Err(e) => tracing::error!("Save failed: {}", e),
        }
        self.load().await;
        result
    }

    /// Switch the rendered collection; never touches the network
    pub fn select_view(&mut self, view: View) {
        self.view = view;
    }

    /// Header search text (bound, not applied)
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }
}

// ============================================================================
// Tests
// ============================================================================
