//! Error types for the adapter layer.

use std::fmt;

/// Errors produced by the adapter, wrapping transport errors and adding
/// parameter validation and batch item failures.
#[derive(Debug)]
pub enum CallovError {
    /// An error from the underlying API transport.
    Api(callov_api::Error),
    /// A parameter or resource/operation combination was rejected before dispatch.
    Validation(String),
    /// An input item of a batch failed; `index` is its position in the batch.
    BatchItem {
        index: usize,
        source: Box<CallovError>,
    },
}

impl CallovError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// The innermost error, looking through batch item wrappers.
    pub fn root(&self) -> &CallovError {
        match self {
            Self::BatchItem { source, .. } => source.root(),
            other => other,
        }
    }
}

impl fmt::Display for CallovError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "{}", e),
            Self::Validation(msg) => write!(f, "Invalid input: {}", msg),
            Self::BatchItem { index, source } => write!(f, "Item {}: {}", index, source),
        }
    }
}

impl std::error::Error for CallovError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::BatchItem { source, .. } => Some(source.as_ref()),
            Self::Validation(_) => None,
        }
    }
}

impl From<callov_api::Error> for CallovError {
    fn from(e: callov_api::Error) -> Self {
        Self::Api(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn batch_item_display_and_root() {
        let err = CallovError::BatchItem {
            index: 2,
            source: Box::new(CallovError::Api(callov_api::Error::HttpStatus {
                status: 404,
                body: "not found".into(),
            })),
        };
        assert_eq!(err.to_string(), "Item 2: Request failed with status 404: not found");
        assert!(matches!(err.root(), CallovError::Api(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn validation_display() {
        let err = CallovError::validation("missing parameter 'fullName'");
        assert_eq!(err.to_string(), "Invalid input: missing parameter 'fullName'");
        assert!(err.source().is_none());
    }
}
