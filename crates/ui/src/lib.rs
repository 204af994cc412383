//! # Tuning UI
//!
//! Dioxus desktop UI for the TuningPro dashboard.
//!
//! ## Features
//!
//! - Summary dashboard with live figures
//! - Orders, cars and clients tables; service catalogue cards
//! - One modal editor for creating and editing every record kind
//! - Status bar reporting load and save failures
//!

// ============================================================================
// Modules
// ============================================================================

pub mod actions;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use app::App;
pub use components::{EntityDialog, StatCard, StatusBadge};
pub use pages::{CarsPage, ClientsPage, DashboardPage, OrdersPage, ServicesPage};
pub use state::{APP_STATE, AppState, StatusLevel, StatusMessage, UiState};

use tuning_api::{ApiClient, ClientResult};
use tuning_core::DashboardConfig;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "TuningPro";

/// Window title
pub const TITLE: &str = "TuningPro - Панель управления";

/// Stylesheet embedded into the window head
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the desktop dashboard against the configured endpoint.
///
/// Fails only if the HTTP client cannot be built; everything after that is
/// reported inside the window.
///
/// # Example
///
/// ```rust,ignore
/// let config = DashboardConfig::from_env()?;
/// tuning_ui::launch(config)?;
/// ```
pub fn launch(config: DashboardConfig) -> ClientResult<()> {
    tracing::info!("Starting {} v{} against {}", NAME, VERSION, config.api_url);

    let client = ApiClient::from_config(&config)?;
    if !actions::install_backend(client) {
        tracing::warn!("API client already installed, keeping the first one");
    }

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1400.0, 900.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(900.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
