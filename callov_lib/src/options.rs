//! Option lists for pickers: clients, team members, and services.
//!
//! A picker must never block on a failed lookup, so every error here is
//! logged and turned into an empty list.

use serde::Serialize;
use serde_json::Value;

use callov_api::{unwrap_list, Endpoint, RequestSpec, Transport, MAX_LIMIT};

use crate::types::Fields;

/// A `{name, value, description}` entry for a picker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PickerOption {
    pub name: String,
    pub value: String,
    pub description: Option<String>,
}

/// All clients, described by email or else phone.
pub async fn client_options(transport: &impl Transport) -> Vec<PickerOption> {
    fetch(transport, Endpoint::Clients, false)
        .await
        .iter()
        .map(|client| PickerOption {
            name: text(client, "full_name").unwrap_or_default(),
            value: text(client, "id").unwrap_or_default(),
            description: text(client, "email").or_else(|| text(client, "phone")),
        })
        .collect()
}

/// Active team members, described by specialty or else email.
pub async fn team_member_options(transport: &impl Transport) -> Vec<PickerOption> {
    fetch(transport, Endpoint::TeamMembers, true)
        .await
        .iter()
        .map(|member| PickerOption {
            name: text(member, "full_name").unwrap_or_default(),
            value: text(member, "id").unwrap_or_default(),
            description: text(member, "specialty").or_else(|| text(member, "email")),
        })
        .collect()
}

/// All services, described as `"<duration> min - <price>"`.
pub async fn service_options(transport: &impl Transport) -> Vec<PickerOption> {
    fetch(transport, Endpoint::Services, false)
        .await
        .iter()
        .map(|service| PickerOption {
            name: text(service, "name").unwrap_or_default(),
            value: text(service, "id").unwrap_or_default(),
            description: Some(format!(
                "{} min - {}",
                text(service, "duration_minutes").unwrap_or_default(),
                text(service, "price").unwrap_or_default()
            )),
        })
        .collect()
}

async fn fetch(transport: &impl Transport, endpoint: Endpoint, active_only: bool) -> Vec<Value> {
    let mut query = Fields::new();
    query.insert("limit".to_string(), Value::from(MAX_LIMIT));
    if active_only {
        query.insert("is_active".to_string(), Value::from(true));
    }
    let request = RequestSpec {
        query,
        ..RequestSpec::get(endpoint)
    };

    match transport.send(&request).await {
        Ok(response) => unwrap_list(response),
        Err(e) => {
            tracing::warn!("Failed to load {} options: {}", endpoint, e);
            Vec::new()
        }
    }
}

/// Non-empty text of a scalar field. Zero, false, and empty strings count as absent.
fn text(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn text_treats_falsy_as_absent() {
        let record = json!({"a": "", "b": 0, "c": "x", "d": 45, "e": null});
        assert_eq!(text(&record, "a"), None);
        assert_eq!(text(&record, "b"), None);
        assert_eq!(text(&record, "c").as_deref(), Some("x"));
        assert_eq!(text(&record, "d").as_deref(), Some("45"));
        assert_eq!(text(&record, "e"), None);
        assert_eq!(text(&record, "missing"), None);
    }
}
