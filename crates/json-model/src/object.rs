//! Keyed-object contracts: typed field symbols, the object view accessor,
//! and the record-shaped model traits.

use std::marker::PhantomData;

use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::convert::{JsonInitializable, JsonRepresentable};
use crate::date::DateTransformer;
use crate::error::JsonModelError;

/// A field-name symbol: one case per serialized field of a record type.
///
/// Each case's string form must be unique within its enumeration and is the
/// literal field name in the serialized object.
pub trait PropertyKey: Copy {
    fn as_str(self) -> &'static str;
}

/// Associates a record type with its field-symbol enumeration.
pub trait PropertiesContaining {
    type Key: PropertyKey;
}

/// Read-only view over an object-shaped JSON value, indexed by typed keys.
///
/// The view borrows the tree it was created from; it exists only while a
/// keyed record is being decoded.
pub struct JsonObject<'a, K> {
    entries: &'a Map<String, Value>,
    _keys: PhantomData<K>,
}

impl<'a, K: PropertyKey> JsonObject<'a, K> {
    /// Wraps `json`, failing with [`JsonModelError::NotAnObject`] unless it
    /// is object-shaped.
    pub fn new(json: &'a Value) -> Result<Self, JsonModelError> {
        match json.as_object() {
            Some(entries) => Ok(Self {
                entries,
                _keys: PhantomData,
            }),
            None => Err(JsonModelError::NotAnObject),
        }
    }

    /// Raw field probe; `None` when the field is absent.
    pub fn get(&self, key: K) -> Option<&'a Value> {
        self.entries.get(key.as_str())
    }

    /// Strict typed lookup. A missing field or a failed conversion is
    /// wrapped with the key's name.
    pub fn value<T: JsonInitializable>(&self, key: K) -> Result<T, JsonModelError> {
        self.get(key)
            .ok_or(JsonModelError::InvalidElement)
            .and_then(|json| T::from_json(json))
            .map_err(|err| err.for_key(key.as_str()))
    }

    /// Error-tolerant lookup: any absence or mismatch collapses to `None`.
    pub fn optional_value<T: JsonInitializable>(&self, key: K) -> Option<T> {
        self.get(key).and_then(|json| T::from_json(json).ok())
    }

    /// Strict lookup of an array field decoded element-wise.
    pub fn values<T: JsonInitializable>(&self, key: K) -> Result<Vec<T>, JsonModelError> {
        self.value(key)
    }

    /// Error-tolerant counterpart of [`values`](Self::values).
    pub fn optional_values<T: JsonInitializable>(&self, key: K) -> Option<Vec<T>> {
        self.optional_value(key)
    }

    /// Nested lookup walking intermediate objects keyed by the same symbol
    /// type. Failures carry the traversed keys, outermost first.
    pub fn value_at_path<T: JsonInitializable>(&self, path: &[K]) -> Result<T, JsonModelError> {
        match path {
            [] => Err(JsonModelError::InvalidElement),
            [key] => self.value(*key),
            [key, rest @ ..] => {
                let nested = self
                    .get(*key)
                    .ok_or(JsonModelError::InvalidElement)
                    .and_then(JsonObject::<K>::new)
                    .map_err(|err| err.for_key(key.as_str()))?;
                nested
                    .value_at_path(rest)
                    .map_err(|err| err.for_key(key.as_str()))
            }
        }
    }

    /// Strict lookup of a string field parsed through `transformer`.
    pub fn date_value<D: DateTransformer>(
        &self,
        key: K,
        transformer: &D,
    ) -> Result<OffsetDateTime, JsonModelError> {
        let raw: String = self.value(key)?;
        transformer
            .date(&raw)
            .map_err(|err| err.for_key(key.as_str()))
    }

    /// Error-tolerant counterpart of [`date_value`](Self::date_value).
    pub fn optional_date_value<D: DateTransformer>(
        &self,
        key: K,
        transformer: &D,
    ) -> Option<OffsetDateTime> {
        self.date_value(key, transformer).ok()
    }
}

/// Record-shaped decode: construct from a typed object view.
pub trait JsonObjectInitializable: PropertiesContaining + Sized {
    fn from_object(object: &JsonObject<'_, Self::Key>) -> Result<Self, JsonModelError>;

    /// Derived general decode: view the value as an object and delegate to
    /// [`from_object`](Self::from_object). A model's [`JsonInitializable`]
    /// impl forwards here.
    fn from_json_object(json: &Value) -> Result<Self, JsonModelError> {
        let object = JsonObject::new(json)?;
        Self::from_object(&object)
    }
}

/// Record-shaped encode: list each field symbol with its optional value.
pub trait JsonObjectRepresentable: PropertiesContaining {
    /// Field symbols paired with their converted values. `None` entries are
    /// omitted from the emitted object entirely, never emitted as null.
    fn dict_value(&self) -> Vec<(Self::Key, Option<Value>)>;

    /// Derived encode. A model's [`JsonRepresentable`] impl forwards here.
    fn to_json_object(&self) -> Value {
        let mut entries = Map::new();
        for (key, value) in self.dict_value() {
            if let Some(value) = value {
                entries.insert(key.as_str().to_owned(), value);
            }
        }
        Value::Object(entries)
    }
}

/// Conjunction of the contracts a concrete record type conforms to.
pub trait JsonModelType:
    JsonObjectInitializable + JsonObjectRepresentable + JsonInitializable + JsonRepresentable
{
}

impl<T> JsonModelType for T where
    T: JsonObjectInitializable + JsonObjectRepresentable + JsonInitializable + JsonRepresentable
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, Copy)]
    enum Key {
        Name,
        Age,
        Nested,
    }

    impl PropertyKey for Key {
        fn as_str(self) -> &'static str {
            match self {
                Key::Name => "name",
                Key::Age => "age",
                Key::Nested => "nested",
            }
        }
    }

    #[test]
    fn view_requires_an_object() {
        assert!(JsonObject::<Key>::new(&json!({})).is_ok());
        assert_eq!(
            JsonObject::<Key>::new(&json!([1])).err(),
            Some(JsonModelError::NotAnObject)
        );
        assert_eq!(
            JsonObject::<Key>::new(&json!("{}")).err(),
            Some(JsonModelError::NotAnObject)
        );
    }

    #[test]
    fn raw_probe() {
        let json = json!({"name": "Ada"});
        let object = JsonObject::<Key>::new(&json).unwrap();
        assert_eq!(object.get(Key::Name), Some(&json!("Ada")));
        assert_eq!(object.get(Key::Age), None);
    }

    #[test]
    fn strict_lookup_carries_the_key_name() {
        let json = json!({"name": "Ada", "age": true});
        let object = JsonObject::<Key>::new(&json).unwrap();
        assert_eq!(object.value::<String>(Key::Name), Ok("Ada".to_owned()));
        assert_eq!(
            object.value::<i64>(Key::Age),
            Err(JsonModelError::InvalidElement.for_key("age"))
        );
    }

    #[test]
    fn missing_key_fails_with_key_context() {
        let json = json!({});
        let object = JsonObject::<Key>::new(&json).unwrap();
        assert_eq!(
            object.value::<String>(Key::Name),
            Err(JsonModelError::InvalidElement.for_key("name"))
        );
    }

    #[test]
    fn optional_lookup_collapses_failures() {
        let json = json!({"name": "Ada", "age": "old"});
        let object = JsonObject::<Key>::new(&json).unwrap();
        assert_eq!(object.optional_value::<String>(Key::Name), Some("Ada".to_owned()));
        assert_eq!(object.optional_value::<i64>(Key::Age), None);
        assert_eq!(object.optional_value::<i64>(Key::Nested), None);
    }

    #[test]
    fn array_lookup() {
        let json = json!({"age": [1, 2, 3], "name": [1, "x"]});
        let object = JsonObject::<Key>::new(&json).unwrap();
        assert_eq!(object.values::<i64>(Key::Age), Ok(vec![1, 2, 3]));
        assert_eq!(
            object.values::<i64>(Key::Name),
            Err(JsonModelError::InvalidElement.for_key("name"))
        );
        assert_eq!(object.optional_values::<i64>(Key::Name), None);
    }

    #[test]
    fn key_path_lookup() {
        let json = json!({"nested": {"nested": {"name": "deep"}}});
        let object = JsonObject::<Key>::new(&json).unwrap();
        assert_eq!(
            object.value_at_path::<String>(&[Key::Nested, Key::Nested, Key::Name]),
            Ok("deep".to_owned())
        );
        assert_eq!(
            object.value_at_path::<String>(&[Key::Nested, Key::Name]),
            Err(JsonModelError::InvalidElement
                .for_key("name")
                .for_key("nested"))
        );
        assert_eq!(
            object.value_at_path::<String>(&[]),
            Err(JsonModelError::InvalidElement)
        );
    }

    #[test]
    fn intermediate_path_level_must_be_an_object() {
        let json = json!({"nested": 42});
        let object = JsonObject::<Key>::new(&json).unwrap();
        assert_eq!(
            object.value_at_path::<String>(&[Key::Nested, Key::Name]),
            Err(JsonModelError::NotAnObject.for_key("nested"))
        );
    }

    #[test]
    fn date_lookup() {
        use crate::date::Rfc3339Transformer;

        let json = json!({"name": "2016-09-18T10:44:00Z", "age": "yesterday"});
        let object = JsonObject::<Key>::new(&json).unwrap();
        let born = object.date_value(Key::Name, &Rfc3339Transformer).unwrap();
        assert_eq!(born.unix_timestamp(), 1_474_195_440);
        assert_eq!(
            object.date_value(Key::Age, &Rfc3339Transformer),
            Err(JsonModelError::InvalidFormat.for_key("age"))
        );
        assert_eq!(
            object.optional_date_value(Key::Age, &Rfc3339Transformer),
            None
        );
        assert_eq!(
            object.optional_date_value(Key::Name, &Rfc3339Transformer),
            Some(born)
        );
    }

    #[test]
    fn dict_value_omits_absent_entries() {
        struct Partial;

        impl PropertiesContaining for Partial {
            type Key = Key;
        }

        impl JsonObjectRepresentable for Partial {
            fn dict_value(&self) -> Vec<(Key, Option<Value>)> {
                vec![
                    (Key::Name, Some(json!("Ada"))),
                    (Key::Age, None),
                ]
            }
        }

        assert_eq!(Partial.to_json_object(), json!({"name": "Ada"}));
    }
}
