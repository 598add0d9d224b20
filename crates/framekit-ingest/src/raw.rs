//! Raw record representation of unvalidated source data.
//!
//! External payloads arrive with loosely-typed fields: numbers as
//! strings, booleans as strings, lists as delimited text. Rather than
//! inferring shape at use sites, every source is first converted into a
//! [`RawRecord`] and then pushed through one explicit mapping function.

use serde_json::Value;
use std::collections::HashMap;

/// One raw field value as received from an external source.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A string value (all CSV cells arrive this way).
    Str(String),
    /// A number from a JSON payload.
    Num(f64),
    /// A boolean from a JSON payload.
    Bool(bool),
    /// A list from a JSON payload.
    List(Vec<String>),
    /// Absent field.
    Missing,
}

impl RawValue {
    /// Build from a JSON value. Nested objects degrade to their JSON text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => RawValue::Missing,
            Value::String(s) => RawValue::Str(s.clone()),
            Value::Number(n) => RawValue::Num(n.as_f64().unwrap_or(f64::NAN)),
            Value::Bool(b) => RawValue::Bool(*b),
            Value::Array(items) => RawValue::List(
                items
                    .iter()
                    .map(|v| match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            Value::Object(_) => RawValue::Str(value.to_string()),
        }
    }

    /// Render as a plain display string.
    ///
    /// Pass-through fields in the canonical record are strings; this is
    /// how non-string raw values degrade when they land in one.
    pub fn display_string(&self) -> String {
        match self {
            RawValue::Str(s) => s.clone(),
            RawValue::Num(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            RawValue::Bool(b) => b.to_string(),
            RawValue::List(items) => items.join("; "),
            RawValue::Missing => String::new(),
        }
    }

    /// Check whether this is the absent value or an empty string.
    pub fn is_blank(&self) -> bool {
        matches!(self, RawValue::Missing) || matches!(self, RawValue::Str(s) if s.is_empty())
    }
}

/// An untyped record: field name to raw value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: HashMap<String, RawValue>,
}

impl RawRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field.
    pub fn insert(&mut self, name: impl Into<String>, value: RawValue) {
        self.fields.insert(name.into(), value);
    }

    /// Look up a field; absent fields read as [`RawValue::Missing`].
    pub fn get(&self, name: &str) -> RawValue {
        self.fields.get(name).cloned().unwrap_or(RawValue::Missing)
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build from a JSON object. Non-object values yield an empty record.
    pub fn from_json(value: &Value) -> Self {
        let mut record = Self::new();
        if let Value::Object(map) = value {
            for (k, v) in map {
                record.insert(k.clone(), RawValue::from_json(v));
            }
        }
        record
    }
}
