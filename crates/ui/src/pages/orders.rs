//! Orders Page Component

use dioxus::prelude::*;
use tuning_core::{OrderStatus, format_rub};
use tuning_model::EntityRecord;

use super::{EditButton, EmptyState, row_key};
use crate::components::StatusBadge;
use crate::state::APP_STATE;

#[derive(Clone, PartialEq)]
struct OrderRow {
    key: String,
    number: String,
    client: String,
    car: String,
    status: OrderStatus,
    total: String,
    date: String,
    record: EntityRecord,
}

#[component]
pub fn OrdersPage() -> Element {
    let state = APP_STATE.read();
    let data = &state.data;
    let rows: Vec<OrderRow> = data
        .orders
        .iter()
        .enumerate()
        .map(|(i, order)| OrderRow {
            key: row_key(order.id, i),
            number: order.number(),
            client: data.client_of(order),
            car: data.car_of(order),
            status: order.status,
            total: format_rub(order.total_amount),
            date: order.date.clone().unwrap_or_default(),
            record: order.clone().into(),
        })
        .collect();
    drop(state);

    if rows.is_empty() {
        return rsx! { EmptyState { message: "Заказов пока нет" } };
    }

    rsx! {
        div {
            class: "table-card",
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "№ Заказа" }
                        th { "Клиент" }
                        th { "Автомобиль" }
                        th { "Статус" }
                        th { "Сумма" }
                        th { "Дата" }
                        th { class: "align-right", "Действия" }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            key: "{row.key}",
                            td { class: "mono", "{row.number}" }
                            td { "{row.client}" }
                            td { "{row.car}" }
                            td { StatusBadge { status: row.status } }
                            td { class: "strong", "{row.total}" }
                            td { class: "muted", "{row.date}" }
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
