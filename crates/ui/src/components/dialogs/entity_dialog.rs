//! # Entity Dialog Component
//!
//! One modal form for all four record kinds. Fields are rendered from the
//! draft's schema; the draft is local to the dialog and only leaves it
//! through `on_save` after validation passes.

use dioxus::prelude::*;
use tuning_model::{
    EditorTarget, EntityDraft, EntityRecord, FieldError, FieldSchema, InputKind, RecordId,
    ReferenceLists,
};

use crate::components::inputs::{Checkbox, Select, SelectOption, TextArea, TextInput};

// ============================================================================
// Entity Dialog
// ============================================================================

/// Properties for EntityDialog
#[derive(Props, Clone, PartialEq)]
pub struct EntityDialogProps {
    /// Record to edit, or the kind to create
    pub target: EditorTarget,

    /// Client and car options for reference fields
    pub references: ReferenceLists,

    /// Disable the buttons while a save is in flight
    #[props(default = false)]
    pub saving: bool,

    /// Called with the validated record
    pub on_save: EventHandler<EntityRecord>,

    /// Called when the dialog should close
    pub on_close: EventHandler<()>,
}

/// Create/edit form for any record kind
#[component]
pub fn EntityDialog(props: EntityDialogProps) -> Element {
    let draft = use_signal(|| EntityDraft::open(&props.target, &props.references));
    let mut errors = use_signal(Vec::<FieldError>::new);

    let mut handle = move |action: DialogAction| {
        let result = {
            let current = draft.read();
            resolve_action(
                action,
                &current,
                |record| props.on_save.call(record),
                || props.on_close.call(()),
            )
        };
        match result {
            Ok(()) => errors.write().clear(),
            Err(field_errors) => {
                tracing::debug!("Form rejected with {} error(s)", field_errors.len());
                errors.set(field_errors);
            }
        }
    };

    let current = draft.read();
    let title = current.title();
    let submit_label = current.submit_label();
    let schema = current.schema();
    drop(current);

    rsx! {
        div {
            class: "entity-dialog",

            div {
                class: "dialog-header",
                h2 { class: "dialog-title", "{title}" }
                button {
                    r#type: "button",
                    class: "dialog-close",
                    title: "Закрыть",
                    onclick: move |_| handle(DialogAction::Dismiss),
                    "×"
                }
            }

            form {
                class: "dialog-form",
                novalidate: true,
                onsubmit: move |e| {
                    e.prevent_default();
                    handle(DialogAction::Submit);
                },

                for field in schema.iter() {
                    DraftField {
                        key: "{field.name}",
                        field: *field,
                        draft,
                        errors,
                        references: props.references.clone(),
                    }
                }

                div {
                    class: "dialog-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        disabled: props.saving,
                        onclick: move |_| handle(DialogAction::Dismiss),
                        "Отмена"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: props.saving,
                        "{submit_label}"
                    }
                }
            }
        }
    }
}

/// What the user asked the dialog to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogAction {
    Submit,
    /// Cancel button or the close cross
    Dismiss,
}

/// Route a dialog action to the callbacks.
///
/// A valid submit calls `on_save` and then `on_close`. A rejected submit calls
/// neither and returns the field errors. Dismissing only closes.
fn resolve_action(
    action: DialogAction,
    draft: &EntityDraft,
    on_save: impl FnOnce(EntityRecord),
    on_close: impl FnOnce(),
) -> Result<(), Vec<FieldError>> {
    if action == DialogAction::Submit {
        on_save(draft.submit()?);
    }
    on_close();
    Ok(())
}

// ============================================================================
// Field Rendering
// ============================================================================

#[component]
fn DraftField(
    field: FieldSchema,
    draft: Signal<EntityDraft>,
    errors: Signal<Vec<FieldError>>,
    references: ReferenceLists,
) -> Element {
    let mut draft = draft;
    let mut errors = errors;
    let name = field.name;
    let error = FieldError::message_for(&errors.read(), name).map(str::to_string);
    let placeholder = (!field.placeholder.is_empty()).then(|| field.placeholder.to_string());

    // Edits clear the field's error until the next submit
    let mut clear_error = move || errors.write().retain(|e| e.field != name);

    let on_text = move |value: String| {
        if let Err(e) = draft.write().set_text(name, &value) {
            tracing::warn!("Rejected input for '{}': {}", name, e);
        }
        clear_error();
    };

    match field.kind {
        InputKind::Checkbox => rsx! {
            Checkbox {
                checked: draft.read().is_checked(name),
                label: field.label.to_string(),
                on_change: move |checked: bool| {
                    if let Err(e) = draft.write().set_checked(name, checked) {
                        tracing::warn!("Rejected flag for '{}': {}", name, e);
                    }
                },
            }
        },
        InputKind::MultiLine => rsx! {
            TextArea {
                value: draft.read().text(name),
                label: field.label.to_string(),
                placeholder,
                error,
                required: field.required,
                on_change: on_text,
            }
        },
        InputKind::Choice(choices) => rsx! {
            Select {
                value: draft.read().text(name),
                options: choices.iter().map(|c| SelectOption::new(*c, *c)).collect::<Vec<_>>(),
                label: field.label.to_string(),
                error,
                required: field.required,
                on_change: on_text,
            }
        },
        InputKind::Reference(source) => {
            let selected = draft.read().reference(name);
            let options: Vec<SelectOption> = references
                .options(source)
                .iter()
                .map(|o| SelectOption::new(o.id.to_string(), o.label.clone()))
                .collect();
            let placeholder = if field.placeholder.is_empty() {
                source.placeholder()
            } else {
                field.placeholder
            };

            rsx! {
                Select {
                    value: selected_value(selected),
                    options,
                    label: field.label.to_string(),
                    placeholder: placeholder.to_string(),
                    error,
                    required: field.required,
                    on_change: move |value: String| {
                        let id = value.parse::<RecordId>().unwrap_or(0);
                        if let Err(e) = draft.write().select_reference(name, id) {
                            tracing::warn!("Rejected selection for '{}': {}", name, e);
                        }
                        clear_error();
                    },
                }
            }
        }
        kind => rsx! {
            TextInput {
                value: draft.read().text(name),
                label: field.label.to_string(),
                placeholder,
                error,
                required: field.required,
                input_type: kind.html_type().to_string(),
                input_mode: kind.input_mode().to_string(),
                on_change: on_text,
            }
        },
    }
}

/// `<select>` value for a reference id; `0` selects the placeholder
fn selected_value(id: RecordId) -> String {
    if id == 0 { String::new() } else { id.to_string() }
}
