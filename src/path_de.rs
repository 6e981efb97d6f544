//! JSON loading with path context in error messages.
use serde::de::DeserializeOwned;

use crate::engine::Arguments;
use crate::error::LoadError;
use crate::parameter::Parameter;
use crate::value::Value;

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, LoadError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| LoadError::Json {
        path: err.path().to_string(),
        source: err.into_inner(),
    })
}

/// `[{ "name": "id", "type": "int" }, { "name": "tags", "type": "string[]", "optional": true }]`
pub fn parameters_from_json(src: &str) -> Result<Vec<Parameter>, LoadError> {
    from_str_with_path(src)
}

/// A JSON object whose members become the named arguments.
pub fn arguments_from_json(src: &str) -> Result<Arguments, LoadError> {
    let json: serde_json::Value = from_str_with_path(src)?;
    match json {
        serde_json::Value::Object(members) => Ok(members
            .into_iter()
            .map(|(name, v)| (name, Value::from(v)))
            .collect()),
        other => Err(LoadError::NotAnObject(Value::from(other).kind())),
    }
}
