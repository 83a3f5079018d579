use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One untyped record as returned by the search endpoint.
///
/// Usually a JSON object, but any JSON value the parser produced is kept so
/// that nothing the endpoint sends is silently lost.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawHit(pub Value);

impl RawHit {
    /// Field lookup that treats `null` and `""` the same as a missing key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| match value {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        })
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// String field, with numbers and booleans rendered as text.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// First key in `keys` that resolves to text.
    pub fn first_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.text(key))
    }
}

impl From<Value> for RawHit {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
