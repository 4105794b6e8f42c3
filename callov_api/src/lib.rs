mod client;
mod endpoint;
mod envelope;
mod errors;
mod phone;
mod query;
mod request;
pub mod types;
pub use self::client::{Client, Transport};
pub use self::endpoint::{Endpoint, DEFAULT_BASE_URL};
pub use self::envelope::{unwrap_envelope, unwrap_list, Unwrapped};
pub use self::errors::Error;
pub use self::phone::normalize_phone;
pub use self::query::{
    merge_fields, AvailabilityQuery, ClientPhoneQuery, ListQuery, NewAppointment, NewClient,
    NewService, Pagination, PhoneSearchQuery, Query, MAX_LIMIT,
};
pub use self::request::{Method, RequestSpec};
