//! # Input Components
//!
//! Form inputs used by the entity editor:
//! - **TextInput**: Single-line text, email, phone and number entry
//! - **TextArea**: Multi-line text
//! - **Select**: Dropdown over a fixed or reference list
//! - **Checkbox**: Boolean flag
//!
//! Each input renders its label, a required marker and an inline error.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    /// HTML input type
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// HTML inputmode hint
    #[props(default = "text".to_string())]
    pub input_mode: String,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                FieldLabel { text: label.clone(), required: props.required }
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                inputmode: "{props.input_mode}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
            }

            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    pub value: String,

    #[props(default)]
    pub label: Option<String>,

    #[props(default)]
    pub placeholder: Option<String>,

    #[props(default)]
    pub error: Option<String>,

    /// Number of visible rows
    #[props(default = 3)]
    pub rows: usize,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = build_textarea_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                FieldLabel { text: label.clone(), required: props.required }
            }

            textarea {
                class: "{textarea_class}",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
            }

            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// One option of a Select
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value; empty selects the placeholder
    pub value: String,

    pub options: Vec<SelectOption>,

    #[props(default)]
    pub label: Option<String>,

    /// Disabled first option shown while nothing is selected
    #[props(default)]
    pub placeholder: Option<String>,

    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown selection component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = build_select_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                FieldLabel { text: label.clone(), required: props.required }
            }

            select {
                class: "{select_class}",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        disabled: true,
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }

            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    pub checked: bool,

    /// Text shown next to the box
    pub label: String,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Boolean checkbox component
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let checked = props.checked;

    rsx! {
        label {
            class: "checkbox-row",
            input {
                r#type: "checkbox",
                class: "form-checkbox",
                checked: checked,
                disabled: props.disabled,
                onchange: move |_| props.on_change.call(!checked),
            }
            span { "{props.label}" }
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

#[component]
fn FieldLabel(text: String, required: bool) -> Element {
    rsx! {
        label {
            class: "field-label",
            "{text}"
            if required {
                span { class: "required-mark", "*" }
            }
        }
    }
}

fn build_input_class(has_error: bool, disabled: bool) -> String {
    let mut classes = vec!["form-input"];
    if has_error {
        classes.push("form-input--error");
    }
    if disabled {
        classes.push("form-input--disabled");
    }
    classes.join(" ")
}

fn build_textarea_class(has_error: bool, disabled: bool) -> String {
    format!("{} form-textarea", build_input_class(has_error, disabled))
}

fn build_select_class(has_error: bool, disabled: bool) -> String {
    format!("{} form-select", build_input_class(has_error, disabled))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_class() {
        let class = build_input_class(false, false);
        assert_eq!(class, "form-input");
    }

    #[test]
    fn test_build_input_class_error() {
        let class = build_input_class(true, false);
        assert!(class.contains("form-input--error"));
        assert!(!class.contains("form-input--disabled"));
    }

    #[test]
    fn test_build_input_class_disabled() {
        let class = build_input_class(false, true);
        assert!(class.contains("form-input--disabled"));
    }

    #[test]
    fn test_textarea_and_select_extend_input() {
        assert!(build_textarea_class(true, false).starts_with("form-input form-input--error"));
        assert!(build_select_class(false, false).ends_with("form-select"));
    }

    #[test]
    fn test_select_option_new() {
        let opt = SelectOption::new("7", "Петров Алексей");
        assert_eq!(opt.value, "7");
        assert_eq!(opt.label, "Петров Алексей");
    }
}
