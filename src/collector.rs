//! The field registry: lazy field creation and per-type mutation semantics.
//!
//! [`FormCollector`] mimics how a browser form accumulates state while a user
//! interacts with its controls: the first mutation naming a field creates it
//! with the type's default value, and subsequent mutations follow that
//! control's behaviour (a select replaces its selection, a multi-select
//! appends, toggling an already-set value clears or removes it).
//!
//! # Example
//!
//! ```
//! use form_collector::FormCollector;
//!
//! let mut form = FormCollector::new();
//! form.set_select("size", "M", false)?;
//! form.set_multi_select("colors", "red", false)?;
//! form.set_multi_select("colors", "blue", false)?;
//!
//! let pairs = form.to_flat_pairs();
//! assert_eq!(pairs.len(), 3);
//! # Ok::<(), form_collector::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::export::{FlatPair, FormExporter};
use crate::field::{Field, FieldType, FieldValue, Scalar};
use crate::observer::FieldObserver;
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::fmt;

/// In-memory form data accumulator.
///
/// Owns a registry of named, typed fields. Fields are created lazily by the
/// first mutation that names them; a field's type is immutable once created
/// and reusing a name with a different type fails with
/// [`Error::TypeConflict`].
///
/// The collector is a single-owner, single-threaded structure: operations are
/// synchronous and never block, and a multi-threaded host must gate access
/// externally.
#[derive(Default)]
pub struct FormCollector {
    /// Field registry; iteration order is insertion order of first-touched
    /// names
    fields: IndexMap<String, Field>,
    /// Diagnostic observer, notified after every successful mutation
    observer: Option<Box<dyn FieldObserver>>,
}

impl fmt::Debug for FormCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormCollector")
            .field("fields", &self.fields)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl FormCollector {
    /// Create a fresh, empty collector with no observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh, empty collector that reports every mutation to
    /// `observer`.
    ///
    /// See [`LogObserver`](crate::observer::LogObserver) for an observer that
    /// emits `log::debug!` traces. Observer presence never changes the
    /// collector's functional behaviour.
    pub fn with_observer(observer: Box<dyn FieldObserver>) -> Self {
        Self {
            fields: IndexMap::new(),
            observer: Some(observer),
        }
    }

    /// Set the value of a SELECT field, creating the field if absent.
    ///
    /// Replaces the current selection when it differs (loosely) from `value`.
    /// When the selection already equals `value` and `toggle` is true, the
    /// selection is cleared; with `toggle` false it is left as is.
    pub fn set_select(&mut self, name: &str, value: impl Into<Scalar>, toggle: bool) -> Result<()> {
        self.set_scalar_toggled(name, FieldType::Select, value.into(), toggle)
    }

    /// Set the selection of a RADIO group, creating the field if absent.
    ///
    /// A radio group holds a single selection, so the semantics match
    /// [`set_select`](Self::set_select): toggling an already-selected value
    /// clears the group.
    pub fn set_radio(&mut self, name: &str, value: impl Into<Scalar>, toggle: bool) -> Result<()> {
        self.set_scalar_toggled(name, FieldType::Radio, value.into(), toggle)
    }

    /// Set the value a CHECKBOX contributes, creating the field if absent.
    ///
    /// An unchecked checkbox contributes nothing, so toggling an
    /// already-present value clears the field.
    pub fn set_checkbox(&mut self, name: &str, value: impl Into<Scalar>, toggle: bool) -> Result<()> {
        self.set_scalar_toggled(name, FieldType::Checkbox, value.into(), toggle)
    }

    /// Set the value of a TEXT field, creating the field if absent.
    ///
    /// Text inputs do not toggle; the value is replaced unconditionally.
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = self.init_field(name, FieldType::Text)?;
        field.value = FieldValue::Scalar(Some(Scalar::Text(value.into())));
        self.notify(name);
        Ok(())
    }

    /// Set the value of a NUMBER field, creating the field if absent.
    ///
    /// The value is replaced unconditionally.
    pub fn set_number(&mut self, name: &str, value: f64) -> Result<()> {
        let field = self.init_field(name, FieldType::Number)?;
        field.value = FieldValue::Scalar(Some(Scalar::Number(value)));
        self.notify(name);
        Ok(())
    }

    /// Add or remove a value on a MULTI_SELECT field, creating the field if
    /// absent.
    ///
    /// When `value` is not yet in the sequence it is appended at the end.
    /// When it is present and `toggle` is true, its first occurrence is
    /// removed; with `toggle` false the sequence is unchanged. Membership is
    /// tested with strict equality, unlike the coercive comparison used for
    /// scalar toggles.
    pub fn set_multi_select(
        &mut self,
        name: &str,
        value: impl Into<Scalar>,
        toggle: bool,
    ) -> Result<()> {
        let value = value.into();
        let field = self.init_field(name, FieldType::MultiSelect)?;
        if let FieldValue::List(values) = &mut field.value {
            match values.iter().position(|v| *v == value) {
                None => values.push(value),
                Some(index) if toggle => {
                    values.remove(index);
                },
                Some(_) => {},
            }
        }
        self.notify(name);
        Ok(())
    }

    /// Set or remove one entry of a KEY_VALUE field, creating the field if
    /// absent.
    ///
    /// When `toggle` is true and the mapping already holds `key` with a value
    /// loosely equal to `value`, the entry is removed entirely. Otherwise
    /// `key` is set to `value`, overwriting any existing entry.
    pub fn set_key_value(
        &mut self,
        name: &str,
        key: impl Into<String>,
        value: impl Into<Scalar>,
        toggle: bool,
    ) -> Result<()> {
        let key = key.into();
        let value = value.into();
        let field = self.init_field(name, FieldType::KeyValue)?;
        if let FieldValue::Map(entries) = &mut field.value {
            let remove = toggle
                && entries
                    .get(&key)
                    .is_some_and(|existing| existing.loose_eq(&value));
            if remove {
                entries.shift_remove(&key);
            } else {
                entries.insert(key, value);
            }
        }
        self.notify(name);
        Ok(())
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Iterate over fields in registry order (insertion order of
    /// first-touched names).
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// Number of fields in the registry.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field has been touched yet.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Export the current state as a flat name/value pair list, the shape an
    /// HTML form submission would produce.
    ///
    /// Delegates to [`FormExporter::flat_pairs`].
    pub fn to_flat_pairs(&self) -> Vec<FlatPair> {
        FormExporter::flat_pairs(self)
    }

    /// Export the current state as a JSON-friendly nested object.
    ///
    /// Delegates to [`FormExporter::nested_object`].
    pub fn to_nested_object(&self) -> serde_json::Map<String, serde_json::Value> {
        FormExporter::nested_object(self)
    }

    /// Shared replace/toggle semantics for single-scalar field types.
    ///
    /// Comparison is loose ([`Scalar::loose_eq`]); an absent current value
    /// always differs, so the first call on a fresh field sets it.
    fn set_scalar_toggled(
        &mut self,
        name: &str,
        field_type: FieldType,
        value: Scalar,
        toggle: bool,
    ) -> Result<()> {
        let field = self.init_field(name, field_type)?;
        let already_set =
            matches!(&field.value, FieldValue::Scalar(Some(current)) if current.loose_eq(&value));
        if !already_set {
            field.value = FieldValue::Scalar(Some(value));
        } else if toggle {
            field.value = FieldValue::Scalar(None);
        }
        self.notify(name);
        Ok(())
    }

    /// Ensure a field named `name` of `field_type` exists.
    ///
    /// Idempotent per name: a no-op when the field already exists with the
    /// requested type, an error when it exists with another type, otherwise
    /// it creates the field with the type's default value. The conflict check
    /// runs before any mutation, so a failing call leaves the field
    /// untouched.
    fn init_field(&mut self, name: &str, field_type: FieldType) -> Result<&mut Field> {
        match self.fields.entry(name.to_string()) {
            Entry::Occupied(entry) => {
                let existing = entry.get().field_type;
                if existing != field_type {
                    return Err(Error::TypeConflict {
                        name: name.to_string(),
                        existing,
                        requested: field_type,
                    });
                }
                Ok(entry.into_mut())
            },
            Entry::Vacant(entry) => Ok(entry.insert(Field::new(name, field_type))),
        }
    }

    /// Report the post-mutation state of `name` to the observer, if any.
    fn notify(&self, name: &str) {
        if let Some(observer) = self.observer.as_deref() {
            if let Some(field) = self.fields.get(name) {
                observer.field_mutated(field);
            }
        }
    }
}
