//! Declarative form schemas
//!
//! Each record type publishes a static list of `FieldSchema`s. The editor
//! renders, binds and validates purely from that list, so the four entity
//! forms share one implementation.

use tuning_core::{OrderStatus, RecordId};

// ============================================================================
// Reference Source
// ============================================================================

/// Which caller-supplied list a reference field selects from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceSource {
    Clients,
    Cars,
}

impl ReferenceSource {
    /// Placeholder shown while nothing is selected
    pub fn placeholder(&self) -> &'static str {
        match self {
            ReferenceSource::Clients => "Выберите клиента",
            ReferenceSource::Cars => "Выберите автомобиль",
        }
    }
}

// ============================================================================
// Input Kind
// ============================================================================

/// Status labels offered by the order status choice field
pub const STATUS_CHOICES: &[&str] = &[
    OrderStatus::Pending.label(),
    OrderStatus::InProgress.label(),
    OrderStatus::Completed.label(),
];

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Single-line free text
    Text,
    /// Single-line text checked as an email address when non-empty
    Email,
    /// Telephone number
    Phone,
    /// Multi-line free text
    MultiLine,
    /// Whole number, parsed at submit
    Integer,
    /// Decimal number, parsed at submit
    Decimal,
    /// Boolean flag
    Checkbox,
    /// One of a fixed set of labels
    Choice(&'static [&'static str]),
    /// Numeric id picked from a reference list
    Reference(ReferenceSource),
}

impl InputKind {
    /// Whether the raw text is kept until submit and parsed there
    pub fn is_numeric(&self) -> bool {
        matches!(self, InputKind::Integer | InputKind::Decimal)
    }

    /// Whether the field is a free-text input
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            InputKind::Text | InputKind::Email | InputKind::Phone | InputKind::MultiLine
        )
    }

    /// HTML `type` attribute for single-line inputs.
    ///
    /// Numbers stay `text` so a comma decimal or a stray letter reaches the
    /// submit-time parser instead of being dropped by the webview.
    pub fn html_type(&self) -> &'static str {
        match self {
            InputKind::Email => "email",
            InputKind::Phone => "tel",
            _ => "text",
        }
    }

    /// HTML `inputmode` hint for the on-screen keyboard
    pub fn input_mode(&self) -> &'static str {
        match self {
            InputKind::Integer => "numeric",
            InputKind::Decimal => "decimal",
            InputKind::Email => "email",
            InputKind::Phone => "tel",
            _ => "text",
        }
    }
}

// ============================================================================
// Field Schema
// ============================================================================

/// Description of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Record field name (also the JSON key)
    pub name: &'static str,
    /// Form label
    pub label: &'static str,
    /// Input kind
    pub kind: InputKind,
    /// Whether an empty value blocks submit
    pub required: bool,
    /// Placeholder text
    pub placeholder: &'static str,
    /// Inclusive range for integer fields
    pub bounds: Option<(i64, i64)>,
}

impl FieldSchema {
    /// Create an optional field with no placeholder
    pub const fn new(name: &'static str, label: &'static str, kind: InputKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: "",
            bounds: None,
        }
    }

    /// Mark the field as required
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the placeholder
    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Limit an integer field to `min..=max`
    pub const fn between(mut self, min: i64, max: i64) -> Self {
        self.bounds = Some((min, max));
        self
    }

    /// Reference source, for reference fields
    pub fn reference_source(&self) -> Option<ReferenceSource> {
        match self.kind {
            InputKind::Reference(source) => Some(source),
            _ => None,
        }
    }
}

/// Look up a field by name in a schema
pub fn find_field(schema: &'static [FieldSchema], name: &str) -> Option<&'static FieldSchema> {
    schema.iter().find(|f| f.name == name)
}

// ============================================================================
// Field Value
// ============================================================================

/// A typed field value read from or written into a record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text; an empty string clears optional fields
    Text(String),
    Integer(i64),
    Decimal(f64),
    Flag(bool),
    /// Referenced record id; `0` means nothing is selected
    Reference(RecordId),
}

impl FieldValue {
    /// Text shown in an input bound to this value
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::Decimal(n) => format_decimal(*n),
            FieldValue::Flag(b) => b.to_string(),
            FieldValue::Reference(0) => String::new(),
            FieldValue::Reference(id) => id.to_string(),
        }
    }
}

/// Render a decimal without a trailing `.0` for whole numbers
fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
