//! Dynamic runtime values checked by the validator.
//!
//! Arrays are ordered maps with integer or string keys; objects carry their
//! class together with every class/interface they are an instance of.
use std::fmt;

use indexmap::IndexMap;
use serde_json::Value as Json;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(IndexMap<Key, Value>),
    Object(Instance),
    Callable(Callable),
    Resource(Resource),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Int(i64),
    Str(String),
}

/// An object instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub class: String,
    /// Parent classes and implemented interfaces.
    pub supertypes: Vec<String>,
}

/// A callable handle (function name or closure label).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callable {
    pub name: String,
}

/// An external handle such as an open stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub kind: String,
    pub id: u64,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl Value {
    /// Runtime kind used in every diagnostic, e.g. `integer`,
    /// `object<DateTime>` or `resource<stream>`.
    pub fn kind(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(_) => "boolean".to_string(),
            Value::Integer(_) => "integer".to_string(),
            Value::Float(_) => "float".to_string(),
            Value::String(_) => "string".to_string(),
            Value::Array(_) => "array".to_string(),
            Value::Object(instance) => format!("object<{}>", instance.class),
            Value::Callable(_) => "callable".to_string(),
            Value::Resource(resource) => format!("resource<{}>", resource.kind),
        }
    }

    /// Build a list-style array with keys `0..n`.
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::Int(i as i64), v))
                .collect(),
        )
    }

    /// Build a keyed array; keys go through [`Key::from`] normalization.
    pub fn map<K: Into<Key>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Array(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn empty_array() -> Self {
        Value::Array(IndexMap::new())
    }

    pub fn object(class: impl Into<String>) -> Self {
        Value::Object(Instance::new(class))
    }

    pub fn resource(kind: impl Into<String>, id: u64) -> Self {
        Value::Resource(Resource { kind: kind.into(), id })
    }

    pub fn callable(name: impl Into<String>) -> Self {
        Value::Callable(Callable { name: name.into() })
    }
}

impl Instance {
    pub fn new(class: impl Into<String>) -> Self {
        Instance { class: class.into(), supertypes: Vec::new() }
    }

    pub fn extends(mut self, supertype: impl Into<String>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    /// True when the instance's class is `name` or one of its supertypes.
    pub fn instance_of(&self, name: &str) -> bool {
        std::iter::once(&self.class)
            .chain(self.supertypes.iter())
            .any(|candidate| same_class_name(candidate, name))
    }
}

/// Class names compare case-insensitively; a leading `\` is the global
/// namespace and carries no meaning.
fn same_class_name(a: &str, b: &str) -> bool {
    a.trim_start_matches('\\')
        .eq_ignore_ascii_case(b.trim_start_matches('\\'))
}

impl Key {
    pub fn to_value(&self) -> Value {
        match self {
            Key::Int(i) => Value::Integer(*i),
            Key::Str(s) => Value::String(s.clone()),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<&str> for Key {
    /// Canonical decimal integers (`"0"`, `"-12"`, but not `"012"`) become
    /// integer keys.
    fn from(s: &str) -> Self {
        match canonical_int(s) {
            Some(i) => Key::Int(i),
            None => Key::Str(s.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        match canonical_int(&s) {
            Some(i) => Key::Int(i),
            None => Key::Str(s),
        }
    }
}

fn canonical_int(s: &str) -> Option<i64> {
    let i = s.parse::<i64>().ok()?;
    (i.to_string() == s).then_some(i)
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

// ---------------------------- Conversions -------------------------------- //

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::Object(instance)
    }
}

impl From<Json> for Value {
    /// JSON objects become keyed arrays; numbers that fit `i64` become
    /// integers, everything else floats.
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::String(s),
            Json::Array(xs) => Value::list(xs.into_iter().map(Value::from)),
            Json::Object(map) => Value::map(map.into_iter().map(|(k, v)| (k, Value::from(v)))),
        }
    }
}
