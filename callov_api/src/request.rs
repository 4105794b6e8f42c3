//! Plain-data description of a single API request.

use std::fmt;

use crate::{
    query::{params_to_pairs, Query},
    types::Fields,
    Endpoint,
};

/// HTTP method used by the adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        })
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully built request: method, endpoint, optional record id, query and body.
///
/// Built fresh for every invocation and never mutated after it is handed to
/// a [`Transport`](crate::Transport).
#[derive(Clone, Debug, PartialEq)]
pub struct RequestSpec {
    pub method: Method,
    pub endpoint: Endpoint,
    /// Record id appended as a single path segment.
    pub id: Option<String>,
    pub query: Fields,
    pub body: Option<Fields>,
}

impl RequestSpec {
    fn new(method: Method, endpoint: Endpoint) -> Self {
        Self {
            method,
            endpoint,
            id: None,
            query: Fields::new(),
            body: None,
        }
    }

    pub fn get(endpoint: Endpoint) -> Self {
        Self::new(Method::Get, endpoint)
    }

    pub fn post(endpoint: Endpoint, body: Fields) -> Self {
        Self {
            body: Some(body),
            ..Self::new(Method::Post, endpoint)
        }
    }

    pub fn patch(endpoint: Endpoint, body: Fields) -> Self {
        Self {
            body: Some(body),
            ..Self::new(Method::Patch, endpoint)
        }
    }

    pub fn delete(endpoint: Endpoint) -> Self {
        Self::new(Method::Delete, endpoint)
    }

    /// Targets a single record, `/{endpoint}/{id}`.
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Replaces the query string with the parameters of `query`.
    pub fn with_query(mut self, query: &impl Query) -> Self {
        self.query = query.to_params();
        self
    }

    /// Relative path of the request, without the base URL.
    pub fn path(&self) -> String {
        match &self.id {
            Some(id) => format!("/{}/{}", self.endpoint.path(), id),
            None => format!("/{}", self.endpoint.path()),
        }
    }

    /// Query parameters rendered as string pairs.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        params_to_pairs(&self.query)
    }
}
