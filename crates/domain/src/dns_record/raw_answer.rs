use serde::Serialize;
use serde_json::{Map, Value};

/// One resource record as handed back by a DNS client, before normalization.
///
/// The shape is deliberately loose: different clients (and different lookup
/// methods of the same client) name the same logical field differently, for
/// example `address` vs `data` or `primary` vs `mname`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawAnswer {
    fields: Map<String, Value>,
}

impl RawAnswer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Value of the first field in `names` that is populated.
    ///
    /// Missing fields, `null` and empty strings count as unpopulated. Numbers
    /// are always populated, including zero.
    pub fn first_populated(&self, names: &[&str]) -> Option<&Value> {
        names
            .iter()
            .filter_map(|name| self.fields.get(*name))
            .find(|value| is_populated(value))
    }

    pub fn first_str(&self, names: &[&str]) -> Option<String> {
        match self.first_populated(names)? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn first_u64(&self, names: &[&str]) -> Option<u64> {
        match self.first_populated(names)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

impl From<Map<String, Value>> for RawAnswer {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
