use serde_json::Value;

use crate::types::Fields;

use super::{common::Pagination, Query};

/// Query for the `getAll` family of operations.
///
/// The first page is requested, caller filters are merged over it, and the
/// limit is written last so filters can override `page` but never `limit`.
#[derive(Clone, Debug, Default)]
pub struct ListQuery {
    pub pagination: Pagination,
    pub filters: Fields,
}

impl Query for ListQuery {
    fn to_params(&self) -> Fields {
        let mut params = Fields::new();
        params.insert("page".to_string(), Value::from(self.pagination.page));
        params.extend(self.filters.clone());
        params.insert(
            "limit".to_string(),
            Value::from(self.pagination.effective_limit()),
        );
        params
    }

    fn get_pagination(&mut self) -> Option<&mut Pagination> {
        Some(&mut self.pagination)
    }
}

impl ListQuery {
    pub fn with_filters(mut self, filters: &Fields) -> Self {
        self.filters.extend(filters.clone());
        self
    }

    pub fn with_filter(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.filters.insert(key.to_string(), value.into());
        self
    }
}
