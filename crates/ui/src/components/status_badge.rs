//! Colored order status label

use dioxus::prelude::*;
use tuning_core::OrderStatus;

/// CSS modifier for a status
pub fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge-pending",
        OrderStatus::InProgress => "badge-progress",
        OrderStatus::Completed => "badge-completed",
    }
}

#[component]
pub fn StatusBadge(status: OrderStatus) -> Element {
    let class = status_class(status);
    let label = status.label();

    rsx! {
        span { class: "badge {class}", "{label}" }
    }
}
