//! Page components for the dashboard
//!
//! One page per sidebar view. Every page reads the global state, clones what
//! it renders and releases the guard before building its tree.
//!
//! - **DashboardPage**: stat cards, recent orders, popular services
//! - **OrdersPage**, **CarsPage**, **ClientsPage**: tables with an edit action
//! - **ServicesPage**: service cards with an edit action
//!

pub mod cars;
pub mod clients;
pub mod dashboard;
pub mod orders;
pub mod services;

pub use cars::CarsPage;
pub use clients::ClientsPage;
pub use dashboard::DashboardPage;
pub use orders::OrdersPage;
pub use services::ServicesPage;

use dioxus::prelude::*;
use tuning_model::RecordId;

/// Stable list key: the record id, or the position for unsaved records
pub(crate) fn row_key(id: Option<RecordId>, index: usize) -> String {
    id.map_or_else(|| format!("new-{index}"), |id| id.to_string())
}

/// Placeholder row shown when a collection is empty
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div { class: "empty-state", "{message}" }
    }
}

/// Pencil button that opens the editor for one record
#[component]
pub fn EditButton(on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "btn-icon",
            title: "Редактировать",
            onclick: move |_| on_click.call(()),
            "✎"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_key() {
        assert_eq!(row_key(Some(7), 0), "7");
        assert_eq!(row_key(None, 3), "new-3");
    }
}
