//! Serialization of collected form data.
//!
//! Two independent projections over a collector's current state:
//!
//! - [`FormExporter::flat_pairs`]: a flat name/value pair list, the shape an
//!   HTML form submission produces (sequences exploded one pair per element
//!   under `name[]`).
//! - [`FormExporter::nested_object`]: a JSON-friendly object with one key per
//!   field, container values preserved as containers.
//!
//! Both are read-only and side-effect-free; output order follows the
//! registry's field iteration order.
//!
//! Two behaviours of the flat projection are inherited quirks, kept on
//! purpose and covered by tests: a non-empty KEY_VALUE mapping is not
//! flattened by key but emitted as a single pair whose value is the whole
//! mapping object, and the nested projection includes empty containers that
//! the flat projection omits.

use crate::collector::FormCollector;
use crate::field::{Field, FieldValue, Scalar};
use serde::Serialize;
use serde_json::Value;

/// Marker appended to a field name when its sequence value is exploded into
/// one pair per element (`colors` becomes `colors[]`).
const ARRAY_SUFFIX: &str = "[]";

/// One entry of the flat projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatPair {
    /// Field name, suffixed with `[]` for sequence elements
    pub name: String,
    /// Element, scalar, or (for KEY_VALUE fields) whole-mapping value
    pub value: Value,
}

impl FlatPair {
    fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Form data exporter.
pub struct FormExporter;

impl FormExporter {
    /// Project the collector's state as a flat name/value pair list.
    ///
    /// For each field, in registry order:
    /// - a sequence value emits one pair per element under `name[]`,
    ///   preserving element order;
    /// - a present scalar emits a single pair under the field's own name;
    /// - an absent scalar emits nothing;
    /// - a non-empty mapping emits a single pair whose value is the mapping
    ///   as a JSON object (KEY_VALUE fields are not flattened by key); an
    ///   empty mapping emits nothing.
    pub fn flat_pairs(collector: &FormCollector) -> Vec<FlatPair> {
        let mut pairs = Vec::new();
        for field in collector.fields() {
            Self::field_to_pairs(field, &mut pairs);
        }
        pairs
    }

    /// Project the collector's state as a JSON-friendly nested object.
    ///
    /// One entry per field, in registry order. Sequences are copied into
    /// fresh JSON arrays, mappings become JSON objects, and present scalars
    /// are included as-is. Only a field whose scalar slot is absent is
    /// omitted; empty sequences and mappings are still included as empty
    /// containers, unlike the flat projection.
    pub fn nested_object(collector: &FormCollector) -> serde_json::Map<String, Value> {
        let mut object = serde_json::Map::new();
        for field in collector.fields() {
            match &field.value {
                FieldValue::List(values) => {
                    let array = values.iter().map(Value::from).collect();
                    object.insert(field.name.clone(), Value::Array(array));
                },
                FieldValue::Map(entries) => {
                    object.insert(field.name.clone(), map_to_value(entries));
                },
                FieldValue::Scalar(Some(scalar)) => {
                    object.insert(field.name.clone(), Value::from(scalar));
                },
                FieldValue::Scalar(None) => {},
            }
        }
        object
    }

    /// Append the flat pairs one field contributes.
    fn field_to_pairs(field: &Field, pairs: &mut Vec<FlatPair>) {
        match &field.value {
            FieldValue::List(values) => {
                let name = format!("{}{}", field.name, ARRAY_SUFFIX);
                for value in values {
                    pairs.push(FlatPair::new(name.clone(), Value::from(value)));
                }
            },
            FieldValue::Map(entries) if !entries.is_empty() => {
                pairs.push(FlatPair::new(field.name.clone(), map_to_value(entries)));
            },
            FieldValue::Map(_) => {},
            FieldValue::Scalar(Some(scalar)) => {
                pairs.push(FlatPair::new(field.name.clone(), Value::from(scalar)));
            },
            FieldValue::Scalar(None) => {},
        }
    }
}

impl From<&Scalar> for Value {
    fn from(scalar: &Scalar) -> Self {
        match scalar {
            Scalar::Text(s) => Value::String(s.clone()),
            // Non-finite numbers have no JSON representation
            Scalar::Number(n) => serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number),
            Scalar::Bool(b) => Value::Bool(*b),
        }
    }
}

fn map_to_value(entries: &indexmap::IndexMap<String, Scalar>) -> Value {
    Value::Object(
        entries
            .iter()
            .map(|(key, value)| (key.clone(), Value::from(value)))
            .collect(),
    )
}
