//! Clients Page Component

use dioxus::prelude::*;
use tuning_core::format_rub;
use tuning_model::EntityRecord;

use super::{EditButton, EmptyState, row_key};
use crate::state::APP_STATE;

#[derive(Clone, PartialEq)]
struct ClientRow {
    key: String,
    name: String,
    phone: String,
    email: String,
    orders: i64,
    spent: String,
    record: EntityRecord,
}

#[component]
pub fn ClientsPage() -> Element {
    let rows: Vec<ClientRow> = APP_STATE
        .read()
        .data
        .clients
        .iter()
        .enumerate()
        .map(|(i, client)| ClientRow {
            key: row_key(client.id, i),
            name: client.name.clone(),
            phone: client.phone.clone(),
            email: client.email.clone().unwrap_or_default(),
            orders: client.order_count,
            spent: format_rub(client.total_spent),
            record: client.clone().into(),
        })
        .collect();

    if rows.is_empty() {
        return rsx! { EmptyState { message: "Клиентов пока нет" } };
    }

    rsx! {
        div {
            class: "table-card",
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "ФИО" }
                        th { "Телефон" }
                        th { "Email" }
                        th { "Заказов" }
                        th { "Всего потрачено" }
                        th { class: "align-right", "Действия" }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            key: "{row.key}",
                            td { class: "strong", "{row.name}" }
                            td { "{row.phone}" }
                            td { class: "muted", "{row.email}" }
                            td { "{row.orders}" }
                            td { "{row.spent}" }
                            td {
                                class: "align-right",
                                EditButton {
                                    on_click: move |_| APP_STATE.write().ui.open_edit(row.record.clone()),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
