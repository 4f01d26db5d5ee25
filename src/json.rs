//! JSON decoding restricted to object documents.
//!
//! Derived struct deserializers also accept the sequence form (`[...]`),
//! so bodies are first decoded as a JSON object and only then mapped onto
//! the target type.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Decodes `T` from `bytes`, whose top level must be a JSON object.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if `bytes` is not valid JSON, is not
/// an object, or does not match the shape of `T`.
pub fn from_object_slice<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    let object: Map<String, Value> = serde_json::from_slice(bytes)?;
    T::deserialize(Value::Object(object))
}
