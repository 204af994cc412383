//! Services Page Component
//!
//! The service catalogue, rendered as cards rather than a table.

use dioxus::prelude::*;
use tuning_core::format_rub;
use tuning_model::Service;

use super::{EditButton, EmptyState, row_key};
use crate::state::APP_STATE;

#[component]
pub fn ServicesPage() -> Element {
    let services: Vec<Service> = APP_STATE.read().data.services.clone();

    if services.is_empty() {
        return rsx! { EmptyState { message: "Услуг пока нет" } };
    }

    rsx! {
        div {
            class: "card-grid",
            for (key, service) in services.into_iter().enumerate().map(|(i, s)| (row_key(s.id, i), s)) {
                ServiceCard { key: "{key}", service }
            }
        }
    }
}

#[component]
fn ServiceCard(service: Service) -> Element {
    let price = format_rub(service.price);
    let duration = service.duration.clone().unwrap_or_default();
    let description = service.description.clone().unwrap_or_default();
    let record = service.clone();

    rsx! {
        div {
            class: "service-card",
            div {
                class: "service-card-header",
                h4 { class: "row-title", "{service.name}" }
                if service.popular {
                    span { class: "badge badge-popular", "Популярная" }
                }
            }
            if !description.is_empty() {
                p { class: "muted", "{description}" }
            }
            if !duration.is_empty() {
                p { class: "muted", "⏱ {duration}" }
            }
            div {
                class: "service-card-footer",
                span { class: "price-large", "{price}" }
                EditButton {
                    on_click: move |_| APP_STATE.write().ui.open_edit(record.clone()),
                }
            }
        }
    }
}
