//! Shared query infrastructure: the [`Query`] trait and [`Pagination`] state.

use serde_json::Value;
use url::Url;

use crate::types::Fields;

/// Largest page size the API accepts, and the size used for "return all".
pub const MAX_LIMIT: i64 = 100;

/// Trait implemented by all query builders.
pub trait Query {
    /// Returns the query-string parameters as an open mapping.
    fn to_params(&self) -> Fields;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        for (key, value) in params_to_pairs(&self.to_params()) {
            url.query_pairs_mut().append_pair(&key, &value);
        }
        url
    }

    /// Returns a mutable reference to the pagination state, if the query pages.
    fn get_pagination(&mut self) -> Option<&mut Pagination> {
        None
    }

    /// Sets the number of results requested when not returning all.
    fn with_limit(mut self, limit: i64) -> Self
    where
        Self: Sized,
    {
        if let Some(pagination) = self.get_pagination() {
            pagination.limit = limit;
        }
        self
    }

    /// Requests the maximum page size instead of the caller's limit.
    fn with_return_all(mut self, return_all: bool) -> Self
    where
        Self: Sized,
    {
        if let Some(pagination) = self.get_pagination() {
            pagination.return_all = return_all;
        }
        self
    }
}

/// Page and page-size state for list endpoints.
///
/// Only the first page is ever requested. "Return all" pins the page size to
/// [`MAX_LIMIT`] rather than walking further pages, so it returns at most 100
/// records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// Always 1.
    pub page: i64,
    /// Results per page when `return_all` is false. Defaults to 50.
    pub limit: i64,
    pub return_all: bool,
}

impl Default for Pagination {
    fn default() -> Pagination {
        Pagination {
            page: 1,
            limit: 50,
            return_all: false,
        }
    }
}

impl Pagination {
    /// The `limit` actually sent to the API.
    pub fn effective_limit(&self) -> i64 {
        if self.return_all {
            MAX_LIMIT
        } else {
            self.limit
        }
    }
}

/// Renders query parameters as string pairs.
///
/// Arrays expand to one pair per element and nulls are skipped.
pub(crate) fn params_to_pairs(params: &Fields) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params.iter() {
        match value {
            Value::Array(items) => {
                for item in items {
                    if let Some(rendered) = render_value(item) {
                        pairs.push((key.clone(), rendered));
                    }
                }
            }
            other => {
                if let Some(rendered) = render_value(other) {
                    pairs.push((key.clone(), rendered));
                }
            }
        }
    }
    pairs
}

fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn return_all_pins_limit() {
        let pagination = Pagination {
            limit: 7,
            return_all: true,
            ..Default::default()
        };
        assert_eq!(pagination.effective_limit(), MAX_LIMIT);
        assert_eq!(pagination.page, 1);
    }

    #[test]
    fn caller_limit_used_without_return_all() {
        let pagination = Pagination {
            limit: 7,
            ..Default::default()
        };
        assert_eq!(pagination.effective_limit(), 7);
    }

    #[test]
    fn pairs_skip_nulls_and_expand_arrays() {
        let mut params = Fields::new();
        params.insert("ids".into(), json!(["a", "b"]));
        params.insert("gone".into(), Value::Null);
        params.insert("limit".into(), json!(100));
        params.insert("is_active".into(), json!(true));

        let mut pairs = params_to_pairs(&params);
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("ids".to_string(), "a".to_string()),
                ("ids".to_string(), "b".to_string()),
                ("is_active".to_string(), "true".to_string()),
                ("limit".to_string(), "100".to_string()),
            ]
        );
    }
}
