use std::collections::BTreeSet;

use chrono::NaiveDate;

use super::ValidationError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Filters collected from the search form.
///
/// Nothing here is validated beyond parsing; `SearchRequest::build` decides
/// whether the combination can be submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub start_date: Option<NaiveDate>,
    /// Present when a range was picked; the day count is then derived from it.
    pub end_date: Option<NaiveDate>,
    pub days_to_iterate: u32,
    pub venues: BTreeSet<String>,
    pub courts: BTreeSet<String>,
    pub start_hour: Option<u8>,
    pub end_hour: Option<u8>,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            days_to_iterate: 1,
            venues: BTreeSet::new(),
            courts: BTreeSet::new(),
            start_hour: None,
            end_hour: None,
        }
    }
}

/// A single change to one form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    StartDate(Option<NaiveDate>),
    EndDate(Option<NaiveDate>),
    DaysToIterate(u32),
    SelectVenue(String),
    SelectCourt(String),
    ClearVenues,
    ClearCourts,
    StartHour(Option<u8>),
    EndHour(Option<u8>),
}

impl FieldEdit {
    /// Maps one form pair onto an edit. Unknown fields yield `None`.
    pub fn parse(name: &str, value: &str) -> Result<Option<FieldEdit>, ValidationError> {
        let value = value.trim();

        let edit = match name {
            "startDate" => FieldEdit::StartDate(parse_date(value)?),
            "endDate" => FieldEdit::EndDate(parse_date(value)?),
            "daysToIterate" if value.is_empty() => return Ok(None),
            "daysToIterate" => FieldEdit::DaysToIterate(
                value.parse().map_err(|_| ValidationError::InvalidDays(value.to_owned()))?,
            ),
            "selectedRecintos" if value.is_empty() => FieldEdit::ClearVenues,
            "selectedRecintos" => FieldEdit::SelectVenue(value.to_owned()),
            "selectedCanchas" if value.is_empty() => FieldEdit::ClearCourts,
            "selectedCanchas" => FieldEdit::SelectCourt(value.to_owned()),
            "startHour" => FieldEdit::StartHour(parse_hour(value)?),
            "endHour" => FieldEdit::EndHour(parse_hour(value)?),
            _ => return Ok(None),
        };

        Ok(Some(edit))
    }

    /// Parses every pair of a submitted form, in order.
    pub fn parse_form(fields: &[(String, String)]) -> Result<Vec<FieldEdit>, ValidationError> {
        let mut edits = Vec::with_capacity(fields.len());
        for (name, value) in fields {
            if let Some(edit) = FieldEdit::parse(name, value)? {
                edits.push(edit);
            }
        }
        Ok(edits)
    }
}

fn parse_date(value: &str) -> Result<Option<NaiveDate>, ValidationError> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate(value.to_owned()))
}

fn parse_hour(value: &str) -> Result<Option<u8>, ValidationError> {
    if value.is_empty() {
        return Ok(None);
    }
    value.parse()
        .map(Some)
        .map_err(|_| ValidationError::InvalidHour(value.to_owned()))
}

impl SearchCriteria {
    pub fn apply(mut self, edit: FieldEdit) -> Self {
        match edit {
            FieldEdit::StartDate(date) => self.start_date = date,
            FieldEdit::EndDate(date) => self.end_date = date,
            FieldEdit::DaysToIterate(days) => self.days_to_iterate = days,
            FieldEdit::SelectVenue(code) => {
                self.venues.insert(code);
            },
            FieldEdit::SelectCourt(name) => {
                self.courts.insert(name);
            },
            FieldEdit::ClearVenues => self.venues.clear(),
            FieldEdit::ClearCourts => self.courts.clear(),
            FieldEdit::StartHour(hour) => self.start_hour = hour,
            FieldEdit::EndHour(hour) => self.end_hour = hour,
        }
        self
    }

    /// Form defaults: searching from `today` for a single day.
    pub fn starting(today: NaiveDate) -> Self {
        Self { start_date: Some(today), ..Default::default() }
    }
}
