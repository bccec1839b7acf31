//! JSON value coercion contract.
//!
//! [`JsonType`] is the capability set any JSON-tree-like value exposes:
//! optional probes per variant, constructors per variant, and strict
//! accessors derived from the probes. The implementation shipped here
//! delegates everything to [`serde_json::Value`].

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::JsonModelError;

/// Per-variant probes and constructors of a JSON tree value.
///
/// Probes return `Some` only when the active variant matches; there is no
/// coercion between variants. The strict `*_value` accessors are pure
/// derivations of the probes and are not meant to be overridden.
pub trait JsonType: Sized + Clone {
    fn as_bool(&self) -> Option<bool>;
    /// Integer probe; a float variant yields `None`.
    fn as_int(&self) -> Option<i64>;
    /// Double probe; any number variant qualifies.
    fn as_double(&self) -> Option<f64>;
    fn as_string(&self) -> Option<&str>;
    fn as_array(&self) -> Option<&[Self]>;
    /// Owned copy of the object entries, value semantics.
    fn as_dictionary(&self) -> Option<HashMap<String, Self>>;
    /// Object-field probe; `None` when the value is not an object or the
    /// field is absent.
    fn get_key(&self, key: &str) -> Option<&Self>;

    fn from_bool(value: bool) -> Self;
    fn from_int(value: i64) -> Self;
    fn from_double(value: f64) -> Self;
    fn from_string(value: String) -> Self;
    fn from_array(items: Vec<Self>) -> Self;
    fn from_dictionary(entries: HashMap<String, Self>) -> Self;

    fn bool_value(&self) -> Result<bool, JsonModelError> {
        self.as_bool().ok_or(JsonModelError::InvalidElement)
    }

    fn int_value(&self) -> Result<i64, JsonModelError> {
        self.as_int().ok_or(JsonModelError::InvalidElement)
    }

    fn double_value(&self) -> Result<f64, JsonModelError> {
        self.as_double().ok_or(JsonModelError::InvalidElement)
    }

    fn string_value(&self) -> Result<String, JsonModelError> {
        self.as_string()
            .map(str::to_owned)
            .ok_or(JsonModelError::InvalidElement)
    }

    fn array_value(&self) -> Result<Vec<Self>, JsonModelError> {
        self.as_array()
            .map(<[Self]>::to_vec)
            .ok_or(JsonModelError::InvalidElement)
    }

    fn dictionary_value(&self) -> Result<HashMap<String, Self>, JsonModelError> {
        self.as_dictionary().ok_or(JsonModelError::InvalidElement)
    }
}

impl JsonType for Value {
    fn as_bool(&self) -> Option<bool> {
        Value::as_bool(self)
    }

    fn as_int(&self) -> Option<i64> {
        Value::as_i64(self)
    }

    fn as_double(&self) -> Option<f64> {
        Value::as_f64(self)
    }

    fn as_string(&self) -> Option<&str> {
        Value::as_str(self)
    }

    fn as_array(&self) -> Option<&[Self]> {
        Value::as_array(self).map(Vec::as_slice)
    }

    fn as_dictionary(&self) -> Option<HashMap<String, Self>> {
        Value::as_object(self).map(|entries| {
            entries
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
    }

    fn get_key(&self, key: &str) -> Option<&Self> {
        self.get(key)
    }

    fn from_bool(value: bool) -> Self {
        Value::Bool(value)
    }

    fn from_int(value: i64) -> Self {
        Value::from(value)
    }

    fn from_double(value: f64) -> Self {
        // serde_json maps non-finite doubles to null.
        Value::from(value)
    }

    fn from_string(value: String) -> Self {
        Value::String(value)
    }

    fn from_array(items: Vec<Self>) -> Self {
        Value::Array(items)
    }

    fn from_dictionary(entries: HashMap<String, Self>) -> Self {
        Value::Object(entries.into_iter().collect::<Map<String, Value>>())
    }
}
