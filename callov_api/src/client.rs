//! Authenticated HTTP transport for the Callov functions API.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{types::Fields, Endpoint, Error, RequestSpec, DEFAULT_BASE_URL};

/// Request timeout enforced by the transport itself.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends a [`RequestSpec`] and returns the parsed JSON response.
///
/// Implementations attach authentication themselves; callers never see the key.
pub trait Transport {
    fn send(&self, request: &RequestSpec) -> impl Future<Output = Result<Value, Error>> + Send;
}

impl<T: Transport + Sync> Transport for &T {
    fn send(&self, request: &RequestSpec) -> impl Future<Output = Result<Value, Error>> + Send {
        (**self).send(request)
    }
}

/// HTTP client for the Callov API.
///
/// Every request carries `Authorization: Bearer <key>`. There are no retries;
/// a failed request is reported to the caller as-is.
pub struct Client {
    client: reqwest::Client,
    api_key: String,
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_url: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl Client {
    /// Creates a new client pointing at the production Callov API.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: String) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e.to_string())
            })?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_url(&self, request: &RequestSpec) -> Result<Url, Error> {
        let mut url = Url::parse(&format!("{}/", self.base_url)).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_url, e);
            Error::InvalidUrl(e.to_string())
        })?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::InvalidUrl(format!("{} cannot be a base", self.base_url)))?;
            segments.pop_if_empty().push(request.endpoint.path());
            if let Some(id) = &request.id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    async fn execute(&self, request: &RequestSpec) -> Result<Value, Error> {
        let url = self.get_url(request)?;
        tracing::debug!("{} {}", request.method, request.path());

        let mut builder = self
            .client
            .request(request.method.into(), url)
            .bearer_auth(&self.api_key)
            .header("accept", "application/json");
        let pairs = request.query_pairs();
        if !pairs.is_empty() {
            builder = builder.query(&pairs);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send {} {}: {}", request.method, request.path(), e);
            Error::Transport(e.to_string())
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str::<Value>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::Decode(e.to_string())
        })
    }

    /// Issues the lightweight credential check, `GET /api-appointments?limit=1`.
    pub async fn verify_credentials(&self) -> Result<(), Error> {
        let mut query = Fields::new();
        query.insert("limit".to_string(), Value::from(1));
        let request = RequestSpec {
            query,
            ..RequestSpec::get(Endpoint::Appointments)
        };
        self.execute(&request).await.map(|_| ())
    }
}

impl Transport for Client {
    async fn send(&self, request: &RequestSpec) -> Result<Value, Error> {
        self.execute(request).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
