//! Adapter core for the Callov scheduling API.
//!
//! Maps a declared resource and operation plus per-item parameters onto
//! requests against `callov_api`, normalizes the responses, and applies the
//! batch error policy across input items.

pub mod batch;
pub mod config;
pub mod error;
pub mod filter;
pub mod options;
pub mod params;
pub mod resource;
pub mod router;
pub mod validation;

pub use callov_api;
pub use callov_api::types;
pub use callov_api::{Client, Endpoint, RequestSpec, Transport};

pub use batch::BatchPolicy;
pub use config::Config;
pub use error::CallovError;
pub use options::PickerOption;
pub use params::ParameterSource;
pub use resource::{Action, OperationKind, ResourceKind, ToolDescriptor};
pub use router::{Planned, ResponseShape, Router};
