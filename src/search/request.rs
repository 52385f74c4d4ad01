use chrono::NaiveDate;
use serde::Serialize;

use super::{catalog, SearchCriteria, ValidationError};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Body of `POST /courts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Serialized as `YYYY-MM-DD`.
    pub start_date: NaiveDate,
    pub selected_recintos: Vec<String>,
    pub days_to_iterate: u32,
    pub selected_canchas: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_hour: Option<String>,
}

/// Inclusive number of days from `start` to `end`; partial days count as a whole day.
pub fn day_count(start: NaiveDate, end: NaiveDate) -> Result<u32, ValidationError> {
    let millis = end.signed_duration_since(start).num_milliseconds();
    if millis < 0 {
        return Err(ValidationError::InvalidRange);
    }

    let days = (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY + 1;
    u32::try_from(days).map_err(|_| ValidationError::InvalidRange)
}

impl SearchRequest {
    pub fn build(criteria: &SearchCriteria) -> Result<Self, ValidationError> {
        let start_date = criteria.start_date.ok_or(ValidationError::MissingDate)?;

        let days_to_iterate = match criteria.end_date {
            Some(end_date) => day_count(start_date, end_date)?,
            None if criteria.days_to_iterate >= 1 => criteria.days_to_iterate,
            None => return Err(ValidationError::InvalidDays(criteria.days_to_iterate.to_string())),
        };

        if let Some(code) = criteria.venues.iter().find(|code| catalog::venue(code).is_none()) {
            return Err(ValidationError::UnknownVenue(code.clone()));
        }
        if let Some(name) = criteria.courts.iter().find(|name| catalog::court(name).is_none()) {
            return Err(ValidationError::UnknownCourt(name.clone()));
        }

        for hour in [criteria.start_hour, criteria.end_hour].into_iter().flatten() {
            if !catalog::HOURS.contains(&hour) {
                return Err(ValidationError::InvalidHour(hour.to_string()));
            }
        }
        if let (Some(start), Some(end)) = (criteria.start_hour, criteria.end_hour) {
            if start > end {
                return Err(ValidationError::InvalidHourRange);
            }
        }

        Ok(SearchRequest {
            start_date,
            selected_recintos: criteria.venues.iter().cloned().collect(),
            days_to_iterate,
            selected_canchas: criteria.courts.iter().cloned().collect(),
            start_hour: criteria.start_hour.map(|hour| hour.to_string()),
            end_hour: criteria.end_hour.map(|hour| hour.to_string()),
        })
    }
}
