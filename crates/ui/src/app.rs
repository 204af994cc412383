//! Main Application Component for the dashboard
//!
//! Root Dioxus component: sidebar navigation, page header with search and
//! the add action, the active view, the status bar and the dialog overlay.

use dioxus::prelude::*;
use tuning_core::View;
use tuning_model::{EditorTarget, EntityRecord};

use crate::actions;
use crate::components::dialogs::EntityDialog;
use crate::pages::{CarsPage, ClientsPage, DashboardPage, OrdersPage, ServicesPage};
use crate::state::{APP_STATE, use_current_view, use_is_loading};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    // Initial load, once per mount
    use_hook(|| {
        tracing::info!("Dashboard UI initialized");
        spawn(actions::reload())
    });

    rsx! {
        div {
            class: "app-container",

            Sidebar {}

            main {
                class: "main-column",
                PageHeader {}
                MainContent {}
                StatusBar {}
            }

            DialogOverlay {}
        }
    }
}

// ============================================================================
// Sidebar Component
// ============================================================================

/// Left sidebar with navigation
#[component]
fn Sidebar() -> Element {
    let state = APP_STATE.read();
    let collapsed = state.ui.sidebar_collapsed;
    let current = state.ui.active_view;
    drop(state);

    rsx! {
        aside {
            class: if collapsed { "sidebar sidebar--collapsed" } else { "sidebar" },

            div {
                class: "sidebar-brand",
                if !collapsed {
                    span { class: "brand-logo", "⚡" }
                    h1 { class: "brand-name", "TuningPro" }
                }
                button {
                    class: "sidebar-toggle",
                    title: if collapsed { "Развернуть меню" } else { "Свернуть меню" },
                    onclick: move |_| APP_STATE.write().ui.toggle_sidebar(),
                    if collapsed { "☰" } else { "‹" }
                }
            }

            nav {
                class: "sidebar-nav",
                for view in View::ALL {
                    SidebarItem { key: "{view:?}", view, current, collapsed }
                }
            }
        }
    }
}

/// Sidebar navigation item
#[component]
fn SidebarItem(view: View, current: View, collapsed: bool) -> Element {
    let class = if view == current {
        "sidebar-item sidebar-item--active"
    } else {
        "sidebar-item"
    };
    let icon = view.icon();
    let name = view.display_name();

    rsx! {
        button {
            class: "{class}",
            title: "{name}",
            onclick: move |_| APP_STATE.write().ui.navigate(view),
            span { class: "sidebar-icon", "{icon}" }
            if !collapsed {
                span { "{name}" }
            }
        }
    }
}

// ============================================================================
// Page Header
// ============================================================================

/// Title, subtitle, and for collection views the search box and add button
#[component]
fn PageHeader() -> Element {
    let state = APP_STATE.read();
    let view = state.ui.active_view;
    let search = state.ui.search.clone();
    let add_target = state.add_target();
    drop(state);

    let title = view.title();
    let subtitle = view.subtitle();

    rsx! {
        header {
            class: "page-header",
            div {
                h2 { class: "page-title", "{title}" }
                p { class: "page-subtitle", "{subtitle}" }
            }

            if let Some(kind) = add_target {
                div {
                    class: "header-actions",
                    input {
                        class: "form-input search-input",
                        r#type: "search",
                        placeholder: "Поиск...",
                        value: "{search}",
                        oninput: move |e| APP_STATE.write().ui.set_search(e.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| APP_STATE.write().ui.open_create(kind),
                        "+ Добавить"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Main Content
// ============================================================================

/// Renders the active view
#[component]
fn MainContent() -> Element {
    let view = use_current_view();
    let loading = use_is_loading();

    rsx! {
        section {
            class: "content",
            if loading {
                div { class: "loading-bar" }
            }
            match view {
                View::Dashboard => rsx! { DashboardPage {} },
                View::Orders => rsx! { OrdersPage {} },
                View::Cars => rsx! { CarsPage {} },
                View::Clients => rsx! { ClientsPage {} },
                View::Services => rsx! { ServicesPage {} },
            }
        }
    }
}

// ============================================================================
// Status Bar
// ============================================================================

#[component]
fn StatusBar() -> Element {
    let state = APP_STATE.read();
    let status = state.ui.status_message.clone();
    let loading = state.data.loading;
    let saving = state.ui.is_saving();
    let counts = format!(
        "Клиентов: {} · Автомобилей: {} · Заказов: {}",
        state.data.clients.len(),
        state.data.cars.len(),
        state.data.orders.len()
    );
    drop(state);

    rsx! {
        footer {
            class: "status-bar",

            if saving {
                span { "Сохранение..." }
            } else if loading {
                span { "Загрузка..." }
            } else if let Some(msg) = status {
                span { class: msg.level.css_class(), "{msg.text}" }
                button {
                    class: "status-dismiss",
                    title: "Скрыть",
                    onclick: move |_| APP_STATE.write().ui.clear_status(),
                    "×"
                }
            } else {
                span { "Готово" }
            }

            div { class: "spacer" }

            span { class: "muted", "{counts}" }
        }
    }
}

// ============================================================================
// Dialog Overlay
// ============================================================================

/// Key that remounts the editor whenever it targets a different record
fn dialog_key(target: &EditorTarget) -> String {
    match target {
        EditorTarget::Create(kind) => format!("{}-new", kind.as_str()),
        EditorTarget::Edit(record) => format!(
            "{}-{}",
            record.kind().as_str(),
            record.id().map_or_else(|| "draft".to_string(), |id| id.to_string())
        ),
    }
}

#[component]
fn DialogOverlay() -> Element {
    let state = APP_STATE.read();
    let target = state.ui.active_dialog.clone();
    let references = state.data.reference_lists();
    let saving = state.ui.is_saving();
    drop(state);

    let Some(target) = target else {
        return rsx! {};
    };
    let key = dialog_key(&target);

    rsx! {
        div {
            class: "dialog-overlay",

            // Backdrop
            div {
                class: "dialog-backdrop",
                onclick: move |_| APP_STATE.write().ui.close_dialog(),
            }

            div {
                class: "dialog-panel",
                onclick: move |e| e.stop_propagation(),

                EntityDialog {
                    key: "{key}",
                    target,
                    references,
                    saving,
                    on_save: move |record: EntityRecord| {
                        spawn(actions::save(record));
                    },
                    on_close: move |_| APP_STATE.write().ui.close_dialog(),
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
