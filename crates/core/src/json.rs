//! JSON object view for slot lookup
//!
//! This module defines the read-only view the resolver looks fields up in:
//! - JsonObject: borrowed view over the root object of a payload
//! - KeyMatching: how field names are compared against object keys
//! - kind_name / describe: JSON node descriptions for diagnostics
//!
//! A field whose key is missing, or whose value is JSON `null`, is absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BindError, Result};

/// How field names are compared against object keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KeyMatching {
    /// Exact key first, then the first key equal ignoring case (default)
    #[default]
    CaseInsensitive,
    /// Exact key only
    Exact,
}

/// Borrowed view over a JSON object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tuplebind_core::json::{JsonObject, KeyMatching};
///
/// let payload = json!({"username": "ada", "email": null});
/// let object = JsonObject::from_value(&payload).unwrap();
///
/// assert_eq!(
///     object.lookup("USERNAME", KeyMatching::CaseInsensitive),
///     Some(&json!("ada"))
/// );
/// assert_eq!(object.lookup("USERNAME", KeyMatching::Exact), None);
/// // explicit null reads as absent
/// assert_eq!(object.lookup("email", KeyMatching::Exact), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JsonObject<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> JsonObject<'a> {
    /// View over an object map.
    pub fn new(map: &'a Map<String, Value>) -> Self {
        JsonObject { map }
    }

    /// View over a JSON value, which must be an object.
    pub fn from_value(value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(JsonObject { map }),
            other => Err(BindError::RootNotObject {
                found: kind_name(other),
            }),
        }
    }

    /// Number of keys in the object.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the object has no keys.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Node stored under `name`, or `None` when the field is absent.
    ///
    /// With [`KeyMatching::CaseInsensitive`] an exact key wins; otherwise
    /// the first key equal to `name` ignoring case is used, in the map's
    /// iteration order (document order with serde_json's `preserve_order`).
    pub fn lookup(&self, name: &str, matching: KeyMatching) -> Option<&'a Value> {
        let found = match self.map.get(name) {
            Some(value) => Some(value),
            None if matching == KeyMatching::CaseInsensitive => self
                .map
                .iter()
                .find(|(key, _)| eq_ignore_case(key, name))
                .map(|(_, value)| value),
            None => None,
        };
        found.filter(|value| !value.is_null())
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// JSON kind of a node.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Short description of a node for diagnostics: scalars include their
/// value, containers only their kind.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        other => kind_name(other).to_string(),
    }
}
