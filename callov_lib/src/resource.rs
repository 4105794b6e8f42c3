//! Resources, operations, and the validated pairs between them.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CallovError;

/// A domain entity exposed by the remote API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Appointment,
    Client,
    Service,
    TeamMember,
}

/// A verb scoped to a [`ResourceKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Create,
    Get,
    GetAvailability,
    GetByClientPhone,
    GetByPhone,
    GetAll,
    Update,
    Delete,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Appointment,
        ResourceKind::Client,
        ResourceKind::Service,
        ResourceKind::TeamMember,
    ];

    /// Operations declared for this resource.
    pub fn operations(&self) -> &'static [OperationKind] {
        use OperationKind::*;
        match self {
            ResourceKind::Appointment => &[
                Create,
                Get,
                GetAvailability,
                GetByClientPhone,
                GetAll,
                Update,
                Delete,
            ],
            ResourceKind::Client => &[Create, GetByPhone, GetAll],
            ResourceKind::Service => &[Create, Get, GetAll, Update, Delete],
            ResourceKind::TeamMember => &[Get, GetAll],
        }
    }

    pub fn supports(&self, operation: OperationKind) -> bool {
        self.operations().contains(&operation)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Appointment => "appointment",
            ResourceKind::Client => "client",
            ResourceKind::Service => "service",
            ResourceKind::TeamMember => "teamMember",
        })
    }
}

impl FromStr for ResourceKind {
    type Err = CallovError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appointment" => Ok(ResourceKind::Appointment),
            "client" => Ok(ResourceKind::Client),
            "service" => Ok(ResourceKind::Service),
            "teamMember" | "team-member" => Ok(ResourceKind::TeamMember),
            _ => Err(CallovError::validation(format!(
                "unknown resource '{}'. Valid values: appointment, client, service, teamMember",
                s
            ))),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OperationKind::Create => "create",
            OperationKind::Get => "get",
            OperationKind::GetAvailability => "getAvailability",
            OperationKind::GetByClientPhone => "getByClientPhone",
            OperationKind::GetByPhone => "getByPhone",
            OperationKind::GetAll => "getAll",
            OperationKind::Update => "update",
            OperationKind::Delete => "delete",
        })
    }
}

impl FromStr for OperationKind {
    type Err = CallovError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(OperationKind::Create),
            "get" => Ok(OperationKind::Get),
            "getAvailability" => Ok(OperationKind::GetAvailability),
            "getByClientPhone" => Ok(OperationKind::GetByClientPhone),
            "getByPhone" => Ok(OperationKind::GetByPhone),
            "getAll" => Ok(OperationKind::GetAll),
            "update" => Ok(OperationKind::Update),
            "delete" => Ok(OperationKind::Delete),
            _ => Err(CallovError::validation(format!("unknown operation '{}'", s))),
        }
    }
}

/// A resource/operation pair known to be declared.
///
/// The only way to obtain one is [`Action::new`], so the router never sees
/// an undeclared combination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    resource: ResourceKind,
    operation: OperationKind,
}

/// Name and description under which an action is offered as a tool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
}

impl Action {
    pub fn new(resource: ResourceKind, operation: OperationKind) -> Result<Self, CallovError> {
        if !resource.supports(operation) {
            return Err(CallovError::validation(format!(
                "operation '{}' is not available for resource '{}'",
                operation, resource
            )));
        }
        Ok(Self {
            resource,
            operation,
        })
    }

    /// Parses and validates wire names, e.g. `("client", "getByPhone")`.
    pub fn parse(resource: &str, operation: &str) -> Result<Self, CallovError> {
        Self::new(resource.parse()?, operation.parse()?)
    }

    /// Every declared pair, in declaration order.
    pub fn all() -> Vec<Action> {
        ResourceKind::ALL
            .iter()
            .flat_map(|resource| {
                resource.operations().iter().map(move |operation| Action {
                    resource: *resource,
                    operation: *operation,
                })
            })
            .collect()
    }

    pub fn resource(&self) -> ResourceKind {
        self.resource
    }

    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    pub fn tool(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: format!("callov_{}_{}", self.resource, self.operation),
            description: format!("Callov {} - {}", self.resource, self.operation),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource, self.operation)
    }
}
