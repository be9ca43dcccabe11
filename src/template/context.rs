//! Context data bound to a template render call.

use serde_json::Value;
use std::collections::BTreeMap;

/// Flat key-value data for a render call.
///
/// Values are JSON values: strings and other primitives feed variable
/// interpolation and conditional truthiness, arrays feed loops. Keys are
/// looked up by exact name; callers trim directive names before lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: BTreeMap<String, Value>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key to a value, replacing any previous binding.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a key. `None` is the defined "absent" state, not an error.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

impl From<BTreeMap<String, Value>> for Context {
    fn from(values: BTreeMap<String, Value>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Truthiness for conditional routing.
///
/// Missing and null are falsy; booleans are themselves; numbers are falsy
/// at zero; strings are falsy when empty; arrays and objects are always
/// truthy, even when empty.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// The string form of a value for substitution.
///
/// Strings substitute their contents verbatim (no JSON quoting); numbers,
/// booleans and null substitute their JSON rendering; arrays and objects
/// substitute compact JSON.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
