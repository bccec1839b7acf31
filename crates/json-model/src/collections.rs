//! Conversion support for collections of convertible elements.
//!
//! Any ordered sequence of representables, or string-keyed mapping of
//! representables, is itself representable; decode mirrors encode for
//! `Vec` and `HashMap`.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

use crate::convert::{JsonInitializable, JsonRepresentable};
use crate::error::JsonModelError;

impl<T: JsonRepresentable> JsonRepresentable for [T] {
    fn json_value(&self) -> Value {
        Value::Array(self.iter().map(JsonRepresentable::json_value).collect())
    }
}

impl<T: JsonRepresentable> JsonRepresentable for Vec<T> {
    fn json_value(&self) -> Value {
        self.as_slice().json_value()
    }
}

impl<T: JsonRepresentable> JsonRepresentable for HashMap<String, T> {
    fn json_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.json_value()))
                .collect::<Map<String, Value>>(),
        )
    }
}

impl<T: JsonRepresentable> JsonRepresentable for BTreeMap<String, T> {
    fn json_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.json_value()))
                .collect::<Map<String, Value>>(),
        )
    }
}

impl<T: JsonInitializable> JsonInitializable for Vec<T> {
    /// Element-wise decode; the first mismatched element aborts.
    fn from_json(json: &Value) -> Result<Self, JsonModelError> {
        json.as_array()
            .ok_or(JsonModelError::InvalidElement)?
            .iter()
            .map(T::from_json)
            .collect()
    }
}

impl<T: JsonInitializable> JsonInitializable for HashMap<String, T> {
    fn from_json(json: &Value) -> Result<Self, JsonModelError> {
        json.as_object()
            .ok_or(JsonModelError::InvalidElement)?
            .iter()
            .map(|(key, value)| Ok((key.clone(), T::from_json(value)?)))
            .collect()
    }
}
