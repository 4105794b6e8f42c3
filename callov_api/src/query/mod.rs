mod common;
pub(crate) use self::common::params_to_pairs;
pub use self::common::{Pagination, Query, MAX_LIMIT};

mod list;
pub use self::list::ListQuery;

mod phone;
pub use self::phone::{ClientPhoneQuery, PhoneSearchQuery};

mod availability;
pub use self::availability::AvailabilityQuery;

mod body;
pub use self::body::{merge_fields, NewAppointment, NewClient, NewService};
