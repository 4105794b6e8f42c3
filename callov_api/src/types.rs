//! Open record types passed through the adapter without schema validation.

use serde_json::{Map, Value};

/// An open mapping from field name to value, used for query strings and bodies.
pub type Fields = Map<String, Value>;
