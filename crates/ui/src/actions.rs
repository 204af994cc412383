//! Async actions that talk to the backend
//!
//! The client is installed once at launch. Each action writes the global
//! state in short bursts around its `.await` points.

use std::sync::OnceLock;

use tracing::{error, info, warn};
use tuning_api::{ApiClient, fetch_all, persist};
use tuning_core::EntityKind;
use tuning_model::EntityRecord;

use crate::state::{APP_STATE, StatusLevel};

static BACKEND: OnceLock<ApiClient> = OnceLock::new();

/// Install the API client used by every action.
///
/// Returns `false` if a client was already installed.
pub fn install_backend(client: ApiClient) -> bool {
    BACKEND.set(client).is_ok()
}

fn backend() -> Option<&'static ApiClient> {
    let client = BACKEND.get();
    if client.is_none() {
        error!("No API client installed");
    }
    client
}

/// Fetch all four collections and apply whatever arrived.
///
/// Overlapping calls are safe: only the most recently issued load is applied.
pub async fn reload() {
    load(true).await;
}

/// Run one ticketed load. `clear_failure` drops a leftover error or warning
/// once every collection arrives.
async fn load(clear_failure: bool) {
    let Some(api) = backend() else { return };

    let ticket = APP_STATE.write().data.begin_load();
    let fetched = fetch_all(api).await;

    let mut state = APP_STATE.write();
    let report = state.data.apply_load(ticket, fetched);
    if report.stale {
        return;
    }
    match report.failure_summary() {
        Some(summary) => {
            warn!("{}", summary);
            // Some collections still loaded unless every fetch failed
            let level = if report.failures.len() == EntityKind::ALL.len() {
                StatusLevel::Error
            } else {
                StatusLevel::Warning
            };
            state.ui.set_status(summary, level);
        }
        None => {
            let stale_failure = state
                .ui
                .status_message
                .as_ref()
                .is_some_and(|m| matches!(m.level, StatusLevel::Error | StatusLevel::Warning));
            if clear_failure && stale_failure {
                state.ui.clear_status();
            }
        }
    }
}

/// Persist a submitted record, then reload.
///
/// The reload runs even when the write fails. A failed write is reported in
/// the status bar and never patched into the local collections.
pub async fn save(record: EntityRecord) {
    let Some(api) = backend() else { return };

    let label = record.label();
    APP_STATE.write().ui.begin_save();
    let result = persist(api, record).await;
    let saved_ok = result.is_ok();

    {
        let mut state = APP_STATE.write();
        state.ui.finish_save();
        match result {
            Ok(saved) => {
                info!("Saved {}", saved.label());
                state.data.apply_saved(saved);
                state.ui.set_status(format!("Сохранено: {}", label), StatusLevel::Success);
            }
            Err(e) => {
                error!("Failed to save {}: {}", label, e);
                state.ui.set_status(e.user_message(), StatusLevel::Error);
            }
        }
    }

    // Keep the save error visible through the follow-up load
    load(saved_ok).await;
}
