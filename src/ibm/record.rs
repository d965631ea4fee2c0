//! Schema-less resource records returned by list endpoints

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One remote object (project, secret, service ID, VPC, subnet, ...)
///
/// No schema is enforced. Fields are read by dotted path and every accessor
/// returns `None` when the field is absent or has a different type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

/// All records of one listing call, in server order
pub type Collection = Vec<Record>;

impl Record {
    /// Build a record from a JSON value, `None` unless it is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Look up a field by dotted path (`"vpc.id"`)
    pub fn field(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// String field by path
    pub fn str_field(&self, path: &str) -> Option<&str> {
        self.field(path).and_then(Value::as_str)
    }

    /// Unsigned integer field by path
    pub fn u64_field(&self, path: &str) -> Option<u64> {
        self.field(path).and_then(Value::as_u64)
    }

    /// Field rendered for display: strings verbatim, null/absent as empty,
    /// everything else as compact JSON
    pub fn display_field(&self, path: &str) -> String {
        match self.field(path) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Resource ID, empty if absent
    pub fn id(&self) -> &str {
        self.str_field("id").unwrap_or("")
    }

    /// Resource name, empty if absent
    pub fn name(&self) -> &str {
        self.str_field("name").unwrap_or("")
    }
}
