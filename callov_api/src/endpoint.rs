//! The fixed endpoint catalogue of the Callov functions API.

use std::fmt;

/// Base URL of the hosted Callov API. Every client defaults to this value.
pub const DEFAULT_BASE_URL: &str = "https://zvlknadahupckbpjgvjf.supabase.co/functions/v1";

/// One of the resource-scoped endpoint families exposed under the base URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Appointments,
    Clients,
    Services,
    TeamMembers,
    Availability,
}

impl Endpoint {
    /// Path segment appended to the base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Appointments => "api-appointments",
            Endpoint::Clients => "api-clients",
            Endpoint::Services => "api-services",
            Endpoint::TeamMembers => "api-team-members",
            Endpoint::Availability => "api-availability",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
