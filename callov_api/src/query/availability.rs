use chrono::NaiveDate;
use serde_json::Value;

use crate::types::Fields;

use super::Query;

/// Free time slots of a team member on one calendar day.
#[derive(Clone, Debug)]
pub struct AvailabilityQuery {
    pub team_member_id: String,
    pub date: NaiveDate,
    pub duration_minutes: i64,
}

impl AvailabilityQuery {
    pub fn new(team_member_id: &str, date: NaiveDate) -> Self {
        Self {
            team_member_id: team_member_id.to_string(),
            date,
            duration_minutes: 30,
        }
    }

    pub fn with_duration_minutes(mut self, duration_minutes: i64) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }
}

impl Query for AvailabilityQuery {
    fn to_params(&self) -> Fields {
        let mut params = Fields::new();
        params.insert(
            "team_member_id".to_string(),
            Value::from(self.team_member_id.as_str()),
        );
        params.insert(
            "date".to_string(),
            Value::from(self.date.format("%Y-%m-%d").to_string()),
        );
        params.insert(
            "duration_minutes".to_string(),
            Value::from(self.duration_minutes),
        );
        params
    }
}
