//! Normalizes response shapes: `{data: [...]}` lists versus bare records.

use serde_json::Value;

/// A response after its envelope has been removed.
#[derive(Clone, Debug, PartialEq)]
pub enum Unwrapped {
    /// Records from a `{data: [...]}` envelope, in the order returned.
    List(Vec<Value>),
    /// Any other response, passed through verbatim.
    Single(Value),
}

impl Unwrapped {
    /// Flattens into the records contributed to a batch.
    pub fn into_records(self) -> Vec<Value> {
        match self {
            Unwrapped::List(records) => records,
            Unwrapped::Single(record) => vec![record],
        }
    }
}

/// Returns the `data` sequence if the response is a list envelope,
/// otherwise the response itself as a single record.
pub fn unwrap_envelope(response: Value) -> Unwrapped {
    match response {
        Value::Object(mut map) if matches!(map.get("data"), Some(Value::Array(_))) => {
            match map.remove("data") {
                Some(Value::Array(records)) => Unwrapped::List(records),
                _ => Unwrapped::List(Vec::new()),
            }
        }
        other => Unwrapped::Single(other),
    }
}

/// Records of a list endpoint. A response without a `data` array yields no records.
pub fn unwrap_list(response: Value) -> Vec<Value> {
    match unwrap_envelope(response) {
        Unwrapped::List(records) => records,
        Unwrapped::Single(_) => Vec::new(),
    }
}
