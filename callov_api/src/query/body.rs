//! Request bodies for create operations.
//!
//! Each body is an ordered merge of a typed set of known fields and an open
//! mapping of extra fields supplied by the caller. Extra fields are applied
//! last and win on key collision.

use serde::Serialize;
use serde_json::Value;

use crate::{types::Fields, Error};

/// Merges `extra` over the serialized `known` fields. Keys present in both
/// take the value from `extra`.
///
/// `known` must serialize to a JSON object.
pub fn merge_fields(known: impl Serialize, extra: &Fields) -> Result<Fields, Error> {
    let mut merged = match serde_json::to_value(known) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            return Err(Error::Encode(format!(
                "known fields must be an object, got {}",
                other
            )))
        }
        Err(e) => {
            tracing::error!("Failed to encode request body: {}", e);
            return Err(Error::Encode(e.to_string()));
        }
    };
    for (key, value) in extra.iter() {
        merged.insert(key.clone(), value.clone());
    }
    Ok(merged)
}

/// Known fields of a new appointment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewAppointment {
    pub client_id: String,
    pub service_id: String,
    pub team_member_id: String,
    pub start_time: String,
    pub end_time: String,
}

impl NewAppointment {
    pub fn into_body(self, extra: &Fields) -> Result<Fields, Error> {
        merge_fields(self, extra)
    }
}

/// Known fields of a new client. Phone and email travel as extra fields,
/// sent exactly as given.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewClient {
    pub full_name: String,
}

impl NewClient {
    pub fn into_body(self, extra: &Fields) -> Result<Fields, Error> {
        merge_fields(self, extra)
    }
}

/// Known fields of a new service.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewService {
    pub name: String,
    pub duration_minutes: i64,
    pub price: String,
}

impl NewService {
    pub fn into_body(self, extra: &Fields) -> Result<Fields, Error> {
        merge_fields(self, extra)
    }
}
