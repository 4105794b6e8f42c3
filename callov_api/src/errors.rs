//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (connection, TLS, or timeout failure).
    #[error("Request failed: {0}")]
    Transport(String),
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not valid JSON.
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// A request body could not be encoded as a JSON object.
    #[error("Failed to encode request body: {0}")]
    Encode(String),
    /// The base URL and path could not be combined into a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
