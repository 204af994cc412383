//! Dashboard Page Component
//!
//! Summary view: four stat cards, the three most recent orders and the
//! popular services. All figures are recomputed from the in-memory
//! collections on every render.

use dioxus::prelude::*;
use tuning_core::{EntityKind, OrderStatus, format_compact_rub, format_rub};

use super::row_key;
use crate::components::{StatCard, StatusBadge};
use crate::state::APP_STATE;

/// Number of orders listed under "Последние заказы"
const RECENT_ORDERS: usize = 3;

#[derive(Clone, PartialEq)]
struct RecentOrder {
    key: String,
    client: String,
    car: String,
    status: OrderStatus,
    total: String,
}

#[derive(Clone, PartialEq)]
struct PopularService {
    key: String,
    name: String,
    duration: String,
    price: String,
}

#[component]
pub fn DashboardPage() -> Element {
    let state = APP_STATE.read();
    let data = &state.data;

    let active = data.active_order_count().to_string();
    let revenue = format_compact_rub(data.total_revenue());
    let clients = data.count(EntityKind::Clients).to_string();
    let cars = data.count(EntityKind::Cars).to_string();

    let recent: Vec<RecentOrder> = data
        .recent_orders(RECENT_ORDERS)
        .iter()
        .enumerate()
        .map(|(i, order)| RecentOrder {
            key: row_key(order.id, i),
            client: data.client_of(order),
            car: data.car_of(order),
            status: order.status,
            total: format_rub(order.total_amount),
        })
        .collect();

    let popular: Vec<PopularService> = data
        .popular_services()
        .enumerate()
        .map(|(i, service)| PopularService {
            key: row_key(service.id, i),
            name: service.name.clone(),
            duration: service.duration.clone().unwrap_or_default(),
            price: format_rub(service.price),
        })
        .collect();

    drop(state);

    rsx! {
        div {
            class: "dashboard-page",

            div {
                class: "stat-grid",
                StatCard { label: "Активных заказов", value: active, icon: "📋", accent: "accent-blue" }
                StatCard { label: "Выручка", value: revenue, icon: "💰", accent: "accent-green" }
                StatCard { label: "Клиентов", value: clients, icon: "👥", accent: "accent-purple" }
                StatCard { label: "Автомобилей", value: cars, icon: "🚗", accent: "accent-orange" }
            }

            div {
                class: "panel-grid",

                section {
                    class: "panel",
                    h3 { class: "panel-title", "Последние заказы" }
                    if recent.is_empty() {
                        p { class: "muted", "Заказов пока нет" }
                    }
                    for order in recent {
                        div {
                            key: "{order.key}",
                            class: "list-row",
                            div {
                                p { class: "row-title", "{order.client}" }
                                p { class: "muted", "{order.car}" }
                            }
                            div {
                                class: "row-end",
                                StatusBadge { status: order.status }
                                p { class: "muted", "{order.total}" }
                            }
                        }
                    }
                }

                section {
                    class: "panel",
                    h3 { class: "panel-title", "Популярные услуги" }
                    if popular.is_empty() {
                        p { class: "muted", "Нет популярных услуг" }
                    }
                    for service in popular {
                        div {
                            key: "{service.key}",
                            class: "list-row",
                            div {
                                p { class: "row-title", "{service.name}" }
                                p { class: "muted", "{service.duration}" }
                            }
                            p { class: "price", "{service.price}" }
                        }
                    }
                }
            }
        }
    }
}
