//! Exact phone matching over the results of the API's substring search.

use serde_json::Value;

use callov_api::normalize_phone;

/// Keeps candidates whose normalized `phone` equals the normalized target.
///
/// When nothing matches exactly, the unfiltered candidates are returned so
/// that formatting differences the normalizer does not handle (country codes,
/// trunk prefixes) do not lose a legitimate match.
pub fn filter_by_phone(candidates: Vec<Value>, target: &str) -> Vec<Value> {
    let target = normalize_phone(target);
    let matched: Vec<Value> = candidates
        .iter()
        .filter(|candidate| record_phone(candidate) == target)
        .cloned()
        .collect();

    if matched.is_empty() {
        tracing::debug!(
            "No exact phone match among {} candidates, keeping search results",
            candidates.len()
        );
        candidates
    } else {
        matched
    }
}

fn record_phone(record: &Value) -> String {
    record
        .get("phone")
        .and_then(Value::as_str)
        .map(normalize_phone)
        .unwrap_or_default()
}
