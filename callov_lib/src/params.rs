//! Per-item parameter lookup with typed accessors.
//!
//! Parameters arrive as an opaque name-to-value mapping. Names follow the
//! field declarations of the node (`fullName`, `returnAll`, `additionalFields`, ...).

use serde_json::Value;

use crate::error::CallovError;
use crate::types::Fields;

/// Source of the parameter values for one batch item.
pub trait ParameterSource {
    /// Raw value of the named parameter, if present.
    fn value(&self, name: &str) -> Option<&Value>;

    /// A string that must be present and non-blank.
    fn required_str(&self, name: &str) -> Result<String, CallovError> {
        match self.value(name) {
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::String(_)) | Some(Value::Null) | None => Err(CallovError::validation(
                format!("missing parameter '{}'", name),
            )),
            Some(other) => Err(wrong_type(name, "a string", other)),
        }
    }

    /// An integer. Whole floats (`30.0`) and numeric strings are accepted.
    fn integer_or(&self, name: &str, default: i64) -> Result<i64, CallovError> {
        match self.value(name) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().and_then(whole_f64_to_i64))
                .ok_or_else(|| wrong_type(name, "an integer", &Value::Number(n.clone()))),
            Some(Value::String(s)) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| wrong_type(name, "an integer", &Value::String(s.clone()))),
            Some(other) => Err(wrong_type(name, "an integer", other)),
        }
    }

    fn bool_or(&self, name: &str, default: bool) -> Result<bool, CallovError> {
        match self.value(name) {
            None | Some(Value::Null) => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::String(s)) if s == "true" => Ok(true),
            Some(Value::String(s)) if s == "false" => Ok(false),
            Some(other) => Err(wrong_type(name, "a boolean", other)),
        }
    }

    /// An open mapping such as `additionalFields` or `filters`. Absent means empty.
    fn fields(&self, name: &str) -> Result<Fields, CallovError> {
        match self.value(name) {
            None | Some(Value::Null) => Ok(Fields::new()),
            Some(Value::Object(map)) => Ok(map.clone()),
            Some(other) => Err(wrong_type(name, "an object", other)),
        }
    }
}

impl ParameterSource for Fields {
    fn value(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl ParameterSource for Value {
    fn value(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(name))
    }
}

/// Whole floats inside the `i64` range. Anything else is rejected, never clamped.
fn whole_f64_to_i64(f: f64) -> Option<i64> {
    // 2^63 is exactly representable; i64::MAX as f64 rounds up to it.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.fract() == 0.0 && f >= -LIMIT && f < LIMIT {
        Some(f as i64)
    } else {
        None
    }
}

fn wrong_type(name: &str, expected: &str, got: &Value) -> CallovError {
    let kind = match got {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    CallovError::validation(format!(
        "parameter '{}' must be {}, got {}",
        name, expected, kind
    ))
}
