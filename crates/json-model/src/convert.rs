//! Conversion contracts between domain types and JSON values.
//!
//! The contracts are fixed over [`serde_json::Value`], the canonical tree
//! type; coercion itself goes through the strict accessors of
//! [`JsonType`](crate::json_type::JsonType).

use serde_json::Value;

use crate::error::JsonModelError;
use crate::json_type::JsonType;

/// A type that can be constructed from a JSON value.
pub trait JsonInitializable: Sized {
    /// Fails with [`JsonModelError::InvalidElement`] when the value's shape
    /// does not match what the type expects.
    fn from_json(json: &Value) -> Result<Self, JsonModelError>;
}

/// A type that can render itself as a JSON value. Never fails.
pub trait JsonRepresentable {
    fn json_value(&self) -> Value;
}

impl<T: JsonRepresentable + ?Sized> JsonRepresentable for &T {
    fn json_value(&self) -> Value {
        (**self).json_value()
    }
}

impl JsonInitializable for Value {
    fn from_json(json: &Value) -> Result<Self, JsonModelError> {
        Ok(json.clone())
    }
}

impl JsonRepresentable for Value {
    fn json_value(&self) -> Value {
        self.clone()
    }
}

impl JsonInitializable for bool {
    fn from_json(json: &Value) -> Result<Self, JsonModelError> {
        json.bool_value()
    }
}

impl JsonRepresentable for bool {
    fn json_value(&self) -> Value {
        Value::from_bool(*self)
    }
}

impl JsonInitializable for i64 {
    fn from_json(json: &Value) -> Result<Self, JsonModelError> {
        json.int_value()
    }
}

impl JsonRepresentable for i64 {
    fn json_value(&self) -> Value {
        Value::from_int(*self)
    }
}

impl JsonInitializable for f64 {
    fn from_json(json: &Value) -> Result<Self, JsonModelError> {
        json.double_value()
    }
}

impl JsonRepresentable for f64 {
    fn json_value(&self) -> Value {
        Value::from_double(*self)
    }
}

impl JsonInitializable for String {
    fn from_json(json: &Value) -> Result<Self, JsonModelError> {
        json.string_value()
    }
}

impl JsonRepresentable for String {
    fn json_value(&self) -> Value {
        Value::from_string(self.clone())
    }
}

impl JsonRepresentable for str {
    fn json_value(&self) -> Value {
        Value::from_string(self.to_owned())
    }
}

/// Capability for raw-string-backed enums whose case set maps one-to-one to
/// literal JSON strings.
///
/// Conforming enums implement the two raw-string requirements and forward
/// their [`JsonInitializable`]/[`JsonRepresentable`] impls to the derived
/// methods:
///
/// ```
/// use json_model::{JsonInitializable, JsonModelError, JsonRepresentable, JsonString};
/// use serde_json::Value;
///
/// #[derive(Debug, PartialEq)]
/// enum Genre {
///     Fiction,
///     NonFiction,
/// }
///
/// impl JsonString for Genre {
///     fn from_raw(raw: &str) -> Option<Self> {
///         match raw {
///             "fiction" => Some(Genre::Fiction),
///             "non-fiction" => Some(Genre::NonFiction),
///             _ => None,
///         }
///     }
///
///     fn raw_value(&self) -> &str {
///         match self {
///             Genre::Fiction => "fiction",
///             Genre::NonFiction => "non-fiction",
///         }
///     }
/// }
///
/// impl JsonInitializable for Genre {
///     fn from_json(json: &Value) -> Result<Self, JsonModelError> {
///         Genre::from_json_string(json)
///     }
/// }
///
/// impl JsonRepresentable for Genre {
///     fn json_value(&self) -> Value {
///         self.json_string_value()
///     }
/// }
///
/// assert_eq!(Genre::from_json(&"fiction".json_value())?, Genre::Fiction);
/// # Ok::<(), JsonModelError>(())
/// ```
pub trait JsonString: Sized {
    /// Looks up the case whose raw string equals `raw`.
    fn from_raw(raw: &str) -> Option<Self>;

    /// The literal string form of this case.
    fn raw_value(&self) -> &str;

    /// Derived decode: a JSON string whose content names a case.
    fn from_json_string(json: &Value) -> Result<Self, JsonModelError> {
        let raw = json.string_value()?;
        Self::from_raw(&raw).ok_or(JsonModelError::InvalidElement)
    }

    /// Derived encode: the raw string's JSON value.
    fn json_string_value(&self) -> Value {
        Value::from_string(self.raw_value().to_owned())
    }
}
