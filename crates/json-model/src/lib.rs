//! Typed model layer over `serde_json`.
//!
//! Domain types declare how to build themselves from a JSON value
//! ([`JsonInitializable`]) and how to render themselves back
//! ([`JsonRepresentable`]); record-shaped types get compile-time-checked
//! field symbols through [`JsonObject`] and the keyed-object traits. All
//! tree access is delegated to [`serde_json::Value`] — this crate parses
//! nothing itself.
//!
//! ```
//! use json_model::{
//!     JsonInitializable, JsonModelError, JsonObject, JsonObjectInitializable,
//!     JsonObjectRepresentable, JsonRepresentable, PropertiesContaining, PropertyKey,
//! };
//! use serde_json::{json, Value};
//!
//! struct Person {
//!     name: String,
//!     age: Option<i64>,
//! }
//!
//! #[derive(Clone, Copy)]
//! enum PersonKey {
//!     Name,
//!     Age,
//! }
//!
//! impl PropertyKey for PersonKey {
//!     fn as_str(self) -> &'static str {
//!         match self {
//!             PersonKey::Name => "name",
//!             PersonKey::Age => "age",
//!         }
//!     }
//! }
//!
//! impl PropertiesContaining for Person {
//!     type Key = PersonKey;
//! }
//!
//! impl JsonObjectInitializable for Person {
//!     fn from_object(object: &JsonObject<'_, PersonKey>) -> Result<Self, JsonModelError> {
//!         Ok(Person {
//!             name: object.value(PersonKey::Name)?,
//!             age: object.optional_value(PersonKey::Age),
//!         })
//!     }
//! }
//!
//! impl JsonObjectRepresentable for Person {
//!     fn dict_value(&self) -> Vec<(PersonKey, Option<Value>)> {
//!         vec![
//!             (PersonKey::Name, Some(self.name.json_value())),
//!             (PersonKey::Age, self.age.map(|age| age.json_value())),
//!         ]
//!     }
//! }
//!
//! impl JsonInitializable for Person {
//!     fn from_json(json: &Value) -> Result<Self, JsonModelError> {
//!         Person::from_json_object(json)
//!     }
//! }
//!
//! impl JsonRepresentable for Person {
//!     fn json_value(&self) -> Value {
//!         self.to_json_object()
//!     }
//! }
//!
//! let person = Person::from_json(&json!({"name": "Ada"}))?;
//! assert_eq!(person.name, "Ada");
//! assert_eq!(person.age, None);
//! assert_eq!(person.json_value(), json!({"name": "Ada"}));
//! # Ok::<(), JsonModelError>(())
//! ```

pub mod collections;
pub mod convert;
pub mod date;
pub mod error;
pub mod json_type;
pub mod object;

pub use convert::{JsonInitializable, JsonRepresentable, JsonString};
pub use date::{DateTransformer, Rfc3339Transformer};
pub use error::JsonModelError;
pub use json_type::JsonType;
pub use object::{
    JsonModelType, JsonObject, JsonObjectInitializable, JsonObjectRepresentable,
    PropertiesContaining, PropertyKey,
};
