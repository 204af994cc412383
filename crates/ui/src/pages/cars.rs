//! Cars Page Component

use dioxus::prelude::*;
use tuning_model::EntityRecord;

use super::{EditButton, EmptyState, row_key};
use crate::state::APP_STATE;

#[derive(Clone, PartialEq)]
struct CarRow {
    key: String,
    brand: String,
    model: String,
    year: i32,
    plate: String,
    owner: String,
    orders: i64,
    record: EntityRecord,
}

#[component]
pub fn CarsPage() -> Element {
    let state = APP_STATE.read();
    let data = &state.data;
    let rows: Vec<CarRow> = data
        .cars
        .iter()
        .enumerate()
        .map(|(i, car)| CarRow {
            key: row_key(car.id, i),
            brand: car.brand.clone(),
            model: car.model.clone(),
            year: car.year,
            plate: car.license_plate.clone().unwrap_or_default(),
            owner: data.owner_of(car),
            orders: car.order_count,
            record: car.clone().into(),
        })
        .collect();
    drop(state);

    if rows.is_empty() {
        return rsx! { EmptyState { message: "Автомобилей пока нет" } };
    }

    rsx! {
        div {
            class: "table-card",
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Марка" }
                        th { "Модель" }
                        th { "Год" }
                        th { "Гос. номер" }
                        th { "Владелец" }
                        th { "Заказов" }
                        th { class: "align-right", "Действия" }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            key: "{row.key}",
                            td { class: "strong", "{row.brand}" }
                            td { "{row.model}" }
                            td { "{row.year}" }
                            td { class: "mono", "{row.plate}" }
                            td { "{row.owner}" }
                            td { "{row.orders}" }
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
