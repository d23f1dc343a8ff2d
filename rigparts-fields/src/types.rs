//! Field and record types for the inventory schema.
//!
//! `FieldSpec` describes one form/display field for a category. Records come
//! in three shapes: `RawRecord` is untyped form capture, `CoercedRecord` is
//! the validated, typed output, and `ComponentRecord` is a persisted record
//! with its store-assigned identity and timestamps.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// The kind of a field — determines the input widget and what shape the
/// coerced value takes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Number {
        /// Whole-number fields (core counts, slot counts) coerce via `i64`;
        /// everything else (price) via `f64`.
        #[serde(default)]
        integer: bool,
    },
    Url,
    Textarea,
    Select {
        options: Vec<String>,
    },
}

/// Declarative description of one field within a category's schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
}

impl FieldSpec {
    fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
        }
    }

    /// A single-line text field.
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// A decimal number field.
    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Number { integer: false })
    }

    /// A whole-number field.
    pub fn integer(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Number { integer: true })
    }

    /// A URL field.
    pub fn url(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Url)
    }

    /// A multi-line text field.
    pub fn textarea(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    /// A select field with a fixed option list.
    pub fn select<I, S>(name: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            label,
            FieldKind::Select {
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Mark the field required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Whether values for this field coerce to a number before persistence.
    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, FieldKind::Number { .. })
    }
}

/// A typed field value as persisted in the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Render the value back to form-input text (for pre-filling an edit form).
    pub fn to_input(&self) -> String {
        match self {
            FieldValue::Int(n) => n.to_string(),
            FieldValue::Float(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(n) => Some(*n as f64),
            FieldValue::Float(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(*n),
            _ => None,
        }
    }
}

/// Untyped form capture: field name to entered text, in entry order.
///
/// Absent keys and empty strings both mean "not filled in".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    values: IndexMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's raw input, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field's raw input.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pre-fill form input from a persisted record (the edit flow).
    pub fn from_values(values: &CoercedRecord) -> Self {
        let mut raw = Self::new();
        for (name, value) in values.iter() {
            raw.set(name, value.to_input());
        }
        raw
    }
}

/// Validated, typed record content ready for persistence. Field order
/// follows the category schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CoercedRecord {
    values: IndexMap<String, FieldValue>,
}

impl CoercedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter()
    }
}

/// Store-assigned record identifier (ULID).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct RecordId(Ulid);

impl RecordId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn parse(s: &str) -> Option<Self> {
        Ulid::from_string(s).ok().map(Self)
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A persisted component record: validated values plus store-assigned
/// identity and timestamps. The store owns the authoritative copy; anything
/// held by a client is a possibly-stale snapshot for display and editing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComponentRecord {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub values: CoercedRecord,
}

impl ComponentRecord {
    /// Mint a new record around validated values, stamping identity and
    /// creation time. Called by store implementations on insert.
    pub fn create(values: CoercedRecord) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            created_at: now,
            updated_at: now,
            values,
        }
    }

    /// Shortcut to a single field value.
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }
}
