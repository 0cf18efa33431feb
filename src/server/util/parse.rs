use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::ActiveEnum;

use crate::server::error::AppError;

/// Parses a display string into a string-backed entity enumeration.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - Display value as sent by the client, e.g. `"Letnan Kolonel"`
///
/// # Returns
/// - `Ok(E)` - Matching enumeration variant
/// - `Err(AppError::BadRequest)` - Value is not a member of the enumeration
pub fn parse_enum<E>(field: &str, value: &str) -> Result<E, AppError>
where
    E: ActiveEnum<Value = String>,
{
    E::try_from_value(&value.to_string())
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: '{}'", field, value)))
}

/// Parses an optional enumeration value, treating an absent value as `None`.
pub fn parse_optional_enum<E>(field: &str, value: Option<&str>) -> Result<Option<E>, AppError>
where
    E: ActiveEnum<Value = String>,
{
    value.map(|v| parse_enum(field, v)).transpose()
}

/// Parses a calendar date, accepting `YYYY-MM-DD` or a full RFC 3339 timestamp.
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed date (UTC date for timestamps)
/// - `Err(AppError::BadRequest)` - Neither format matched
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: '{}'", field, value)))
}

/// Which end of a date range a bare date should snap to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    Start,
    End,
}

/// Parses a range bound for timestamp filters.
///
/// A full RFC 3339 timestamp is used as given. A bare `YYYY-MM-DD` date becomes the
/// first instant of that day for `RangeBound::Start` and the last for `RangeBound::End`,
/// so an end date includes the whole day.
pub fn parse_range_bound(
    field: &str,
    value: &str,
    bound: RangeBound,
) -> Result<DateTime<Utc>, AppError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: '{}'", field, value)))?;

    let time = match bound {
        RangeBound::Start => NaiveTime::MIN,
        RangeBound::End => NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
            .unwrap_or(NaiveTime::MIN),
    };

    Ok(date.and_time(time).and_utc())
}

/// Trims a required text field and rejects it when blank.
pub fn require_text(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Trims optional free text, mapping blank input to `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
