//! Filter request parsing
//!
//! Turns the raw `filter` parameter into ordered `(field, condition)` pairs.

use serde_json::Value;

/// Field name → condition pairs, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRequest {
    entries: Vec<(String, String)>,
}

impl FilterRequest {
    /// Read a decoded `filter` parameter.
    ///
    /// Only an object is a filter request. Anything else (absent, string,
    /// array, scalar) yields `None` and the caller leaves the resource
    /// untouched. Object entries whose value is not a string are dropped.
    pub fn from_value(raw: Option<&Value>) -> Option<Self> {
        let map = match raw {
            Some(Value::Object(map)) => map,
            Some(other) => {
                tracing::debug!(kind = value_kind(other), "Ignoring non-object filter parameter");
                return None;
            }
            None => return None,
        };

        let entries = map
            .iter()
            .filter_map(|(field, condition)| match condition {
                Value::String(s) => Some((field.clone(), s.clone())),
                other => {
                    tracing::debug!(
                        field = %field,
                        kind = value_kind(other),
                        "Ignoring non-string filter condition"
                    );
                    None
                }
            })
            .collect();

        Some(Self { entries })
    }

    /// Build a request from already decoded pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, c)| (f.as_str(), c.as_str()))
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
