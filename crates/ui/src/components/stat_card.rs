//! Summary figure shown on the dashboard

use dioxus::prelude::*;

#[component]
pub fn StatCard(
    /// Figure caption
    label: String,
    /// Formatted value
    value: String,
    /// Leading icon
    icon: String,
    /// Accent color modifier
    #[props(default = "accent-blue".to_string())]
    accent: String,
) -> Element {
    rsx! {
        div {
            class: "stat-card {accent}",
            div { class: "stat-icon", "{icon}" }
            div {
                class: "stat-body",
                p { class: "stat-label", "{label}" }
                p { class: "stat-value", "{value}" }
            }
        }
    }
}
