//! Resource/operation routing: builds the request for an action, sends it,
//! and shapes the response into the records an item contributes.

use serde_json::Value;

use callov_api::{
    unwrap_list, AvailabilityQuery, ClientPhoneQuery, Endpoint, ListQuery, NewAppointment,
    NewClient, NewService, PhoneSearchQuery, Query, RequestSpec, Transport,
};

use crate::error::CallovError;
use crate::filter::filter_by_phone;
use crate::params::ParameterSource;
use crate::resource::{Action, OperationKind, ResourceKind};
use crate::validation::{to_calendar_date, validate_limit};

/// How the response of a planned request becomes records.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseShape {
    /// The whole response is one record.
    Single,
    /// The `data` sequence of a list envelope, flattened.
    List,
    /// A list narrowed to exact matches of this phone number.
    PhoneMatch(String),
}

/// A request ready to send, with the shape its response takes.
#[derive(Clone, Debug, PartialEq)]
pub struct Planned {
    pub request: RequestSpec,
    pub shape: ResponseShape,
}

impl Planned {
    fn single(request: RequestSpec) -> Self {
        Self {
            request,
            shape: ResponseShape::Single,
        }
    }

    fn list(request: RequestSpec) -> Self {
        Self {
            request,
            shape: ResponseShape::List,
        }
    }
}

fn endpoint_for(resource: ResourceKind) -> Endpoint {
    match resource {
        ResourceKind::Appointment => Endpoint::Appointments,
        ResourceKind::Client => Endpoint::Clients,
        ResourceKind::Service => Endpoint::Services,
        ResourceKind::TeamMember => Endpoint::TeamMembers,
    }
}

/// Name of the id parameter for single-record operations.
fn id_param(resource: ResourceKind) -> &'static str {
    match resource {
        ResourceKind::Appointment => "appointmentId",
        ResourceKind::Service => "serviceId",
        ResourceKind::TeamMember => "teamMemberIdGet",
        ResourceKind::Client => "clientId",
    }
}

fn list_query(params: &impl ParameterSource) -> Result<ListQuery, CallovError> {
    let return_all = params.bool_or("returnAll", false)?;
    let mut query = ListQuery::default()
        .with_return_all(return_all)
        .with_filters(&params.fields("filters")?);
    if !return_all {
        query = query.with_limit(validate_limit(params.integer_or("limit", 50)?)?);
    }
    Ok(query)
}

/// Builds the request for one item. Pure: the same inputs always give the same plan.
pub fn build_request(
    action: Action,
    params: &impl ParameterSource,
) -> Result<Planned, CallovError> {
    let resource = action.resource();
    let endpoint = endpoint_for(resource);

    let planned = match (resource, action.operation()) {
        (ResourceKind::Appointment, OperationKind::Create) => {
            let known = NewAppointment {
                client_id: params.required_str("clientId")?,
                service_id: params.required_str("serviceId")?,
                team_member_id: params.required_str("teamMemberId")?,
                start_time: params.required_str("startTime")?,
                end_time: params.required_str("endTime")?,
            };
            let body = known.into_body(&params.fields("additionalFields")?)?;
            Planned::single(RequestSpec::post(endpoint, body))
        }
        (ResourceKind::Client, OperationKind::Create) => {
            let known = NewClient {
                full_name: params.required_str("fullName")?,
            };
            let body = known.into_body(&params.fields("additionalFields")?)?;
            Planned::single(RequestSpec::post(endpoint, body))
        }
        (ResourceKind::Service, OperationKind::Create) => {
            let known = NewService {
                name: params.required_str("serviceName")?,
                duration_minutes: params.integer_or("serviceDuration", 30)?,
                price: params.required_str("servicePrice")?,
            };
            let body = known.into_body(&params.fields("additionalFields")?)?;
            Planned::single(RequestSpec::post(endpoint, body))
        }
        (_, OperationKind::Get) => {
            let id = params.required_str(id_param(resource))?;
            Planned::single(RequestSpec::get(endpoint).with_id(&id))
        }
        (_, OperationKind::Update) => {
            let id = params.required_str(id_param(resource))?;
            let body = params.fields("updateFields")?;
            Planned::single(RequestSpec::patch(endpoint, body).with_id(&id))
        }
        (_, OperationKind::Delete) => {
            let id = params.required_str(id_param(resource))?;
            Planned::single(RequestSpec::delete(endpoint).with_id(&id))
        }
        (_, OperationKind::GetAll) => {
            Planned::list(RequestSpec::get(endpoint).with_query(&list_query(params)?))
        }
        (ResourceKind::Appointment, OperationKind::GetByClientPhone) => {
            let query = ClientPhoneQuery::new(&params.required_str("clientPhoneNumber")?)
                .with_filters(&params.fields("additionalFilters")?);
            Planned::list(RequestSpec::get(endpoint).with_query(&query))
        }
        (ResourceKind::Appointment, OperationKind::GetAvailability) => {
            let date = to_calendar_date(&params.required_str("availabilityDate")?)?;
            let query = AvailabilityQuery::new(
                &params.required_str("teamMemberIdAvailability")?,
                date,
            )
            .with_duration_minutes(params.integer_or("durationMinutes", 30)?);
            Planned::single(RequestSpec::get(Endpoint::Availability).with_query(&query))
        }
        (ResourceKind::Client, OperationKind::GetByPhone) => {
            let phone = params.required_str("phoneNumber")?;
            let query = PhoneSearchQuery::new(&phone);
            Planned {
                request: RequestSpec::get(endpoint).with_query(&query),
                shape: ResponseShape::PhoneMatch(phone),
            }
        }
        (resource, operation) => {
            return Err(CallovError::validation(format!(
                "operation '{}' is not available for resource '{}'",
                operation, resource
            )))
        }
    };
    Ok(planned)
}

/// Dispatches actions over a [`Transport`].
pub struct Router<T> {
    transport: T,
}

impl<T: Transport> Router<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs one item through build, send, unwrap and, for phone lookups,
    /// the exact-match filter. Returns the records the item contributes.
    pub async fn dispatch(
        &self,
        action: Action,
        params: &impl ParameterSource,
    ) -> Result<Vec<Value>, CallovError> {
        tracing::debug!("{} building request", action);
        let planned = build_request(action, params)?;
        tracing::debug!(
            "{} dispatching {} {}",
            action,
            planned.request.method,
            planned.request.path()
        );

        let response = self.transport.send(&planned.request).await?;

        let records = match planned.shape {
            ResponseShape::Single => {
                tracing::debug!("{} received single record", action);
                vec![response]
            }
            ResponseShape::List => {
                let records = unwrap_list(response);
                tracing::debug!("{} unwrapped {} record(s)", action, records.len());
                records
            }
            ResponseShape::PhoneMatch(target) => {
                let candidates = unwrap_list(response);
                tracing::debug!(
                    "{} unwrapped {} candidate(s), filtering by phone",
                    action,
                    candidates.len()
                );
                filter_by_phone(candidates, &target)
            }
        };
        Ok(records)
    }
}
