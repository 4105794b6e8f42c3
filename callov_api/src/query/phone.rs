use serde_json::Value;

use crate::{phone::normalize_phone, types::Fields};

use super::{common::MAX_LIMIT, Query};

/// Appointment lookup by the phone number of the client.
///
/// Extra filters are merged after the fixed keys and win every collision.
#[derive(Clone, Debug, Default)]
pub struct ClientPhoneQuery {
    /// Digits-only phone number.
    pub client_phone: String,
    pub filters: Fields,
}

impl ClientPhoneQuery {
    pub fn new(phone: &str) -> Self {
        Self {
            client_phone: normalize_phone(phone),
            filters: Fields::new(),
        }
    }

    pub fn with_filters(mut self, filters: &Fields) -> Self {
        self.filters.extend(filters.clone());
        self
    }
}

impl Query for ClientPhoneQuery {
    fn to_params(&self) -> Fields {
        let mut params = Fields::new();
        params.insert(
            "client_phone".to_string(),
            Value::from(self.client_phone.as_str()),
        );
        params.insert("page".to_string(), Value::from(1));
        params.insert("limit".to_string(), Value::from(MAX_LIMIT));
        params.extend(self.filters.clone());
        params
    }
}

/// Client search by phone number. The API matches substrings, so results
/// are narrowed further after the response arrives.
#[derive(Clone, Debug, Default)]
pub struct PhoneSearchQuery {
    /// Digits-only phone number.
    pub search: String,
}

impl PhoneSearchQuery {
    pub fn new(phone: &str) -> Self {
        Self {
            search: normalize_phone(phone),
        }
    }
}

impl Query for PhoneSearchQuery {
    fn to_params(&self) -> Fields {
        let mut params = Fields::new();
        params.insert("search".to_string(), Value::from(self.search.as_str()));
        params.insert("limit".to_string(), Value::from(MAX_LIMIT));
        params
    }
}
