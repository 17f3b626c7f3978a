//! Field data model: typed fields, scalar values, and per-type defaults.
//!
//! A [`Field`] is one named piece of collected data. Its value slot is a
//! tagged union keyed by the field's declared [`FieldType`], so scalar fields
//! can never silently hold a list and vice versa.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Field type, mirroring the control kinds of an HTML form.
///
/// `KEY_VALUE` is a non-standard addition: a string-keyed mapping collected
/// under a single field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    /// Single-choice selection (dropdown)
    Select,
    /// Multi-choice selection (list box); ordered, duplicates permitted
    MultiSelect,
    /// Free text input
    Text,
    /// Numeric input
    Number,
    /// Radio button group (one selection per group)
    Radio,
    /// Checkbox
    Checkbox,
    /// Non-standard string-keyed mapping
    KeyValue,
}

impl FieldType {
    /// Stable string name of this field type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Select => "SELECT",
            FieldType::MultiSelect => "MULTI_SELECT",
            FieldType::Text => "TEXT",
            FieldType::Number => "NUMBER",
            FieldType::Radio => "RADIO",
            FieldType::Checkbox => "CHECKBOX",
            FieldType::KeyValue => "KEY_VALUE",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar field value: text, number, or boolean.
///
/// The derived `PartialEq` is *strict*: values of different variants never
/// compare equal. Multi-select membership tests use strict equality, while
/// select and key-value toggle detection use [`Scalar::loose_eq`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
}

impl Scalar {
    /// Coercive equality in the style of JavaScript `==`.
    ///
    /// Same-variant values compare directly. Across variants, both sides are
    /// coerced to numbers: booleans become 0/1, text is parsed as a float
    /// (empty or whitespace-only text coerces to 0). Text that does not parse
    /// as a number compares unequal to everything but identical text.
    pub fn loose_eq(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Text(a), Scalar::Text(b)) => a == b,
            (Scalar::Number(a), Scalar::Number(b)) => a == b,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            _ => match (self.coerce_number(), other.coerce_number()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Numeric coercion used by [`Scalar::loose_eq`].
    fn coerce_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Scalar::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse().ok()
                }
            },
        }
    }

    /// Get as text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as number, if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as boolean, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Number(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value as f64)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Number(value as f64)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// Field value union, keyed by the field's declared type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Single scalar slot; `None` means "no selection" (SELECT, TEXT, NUMBER,
    /// RADIO, CHECKBOX)
    Scalar(Option<Scalar>),
    /// Ordered sequence of scalars (MULTI_SELECT)
    List(Vec<Scalar>),
    /// String-keyed mapping of scalars (KEY_VALUE); insertion-ordered so
    /// exports are deterministic
    Map(IndexMap<String, Scalar>),
}

impl FieldValue {
    /// The default value a freshly created field of `field_type` holds.
    pub fn default_for(field_type: FieldType) -> FieldValue {
        match field_type {
            FieldType::MultiSelect => FieldValue::List(Vec::new()),
            FieldType::KeyValue => FieldValue::Map(IndexMap::new()),
            _ => FieldValue::Scalar(None),
        }
    }

    /// Get the scalar slot, if this is a scalar value.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            FieldValue::Scalar(s) => s.as_ref(),
            _ => None,
        }
    }

    /// Get as a sequence, if this is a list value.
    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            FieldValue::List(v) => Some(v),
            _ => None,
        }
    }

    /// Get as a mapping, if this is a map value.
    pub fn as_map(&self) -> Option<&IndexMap<String, Scalar>> {
        match self {
            FieldValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

/// A named, typed unit of collected data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Field name, unique key in the registry
    pub name: String,
    /// Declared type, immutable once the field exists
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Current value
    pub value: FieldValue,
}

impl Field {
    /// Create a field of the given type, initialized to the type's default.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            value: FieldValue::default_for(field_type),
        }
    }
}
