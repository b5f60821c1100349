//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request DTOs keep every field as optional text so that missing, blank,
//! and malformed values all surface as `400` responses naming the offending
//! field, rather than as opaque deserialisation failures.

use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    Description, Error, ExerciseDate, ExerciseDuration, ExerciseValidationError, UserId,
    UserValidationError, Username,
};

/// Validation error codes attached to `400` details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidValue,
    InvalidDate,
    InvalidLimit,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidValue => "invalid_value",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::InvalidLimit => "invalid_limit",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const USERNAME: FieldName = FieldName::new("username");
pub(crate) const USER_ID: FieldName = FieldName::new("userId");
pub(crate) const DESCRIPTION: FieldName = FieldName::new("description");
pub(crate) const DURATION: FieldName = FieldName::new("duration");
pub(crate) const DATE: FieldName = FieldName::new("date");
pub(crate) const FROM: FieldName = FieldName::new("from");
pub(crate) const TO: FieldName = FieldName::new("to");
pub(crate) const LIMIT: FieldName = FieldName::new("limit");

fn field_error(field: FieldName, code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn value_error(field: FieldName, code: ErrorCode, message: String, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {}", field.as_str()),
    )
}

/// Treat absent and blank text alike.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

/// Require a non-blank value for `field`.
pub(crate) fn required(value: Option<String>, field: FieldName) -> Result<String, Error> {
    non_blank(value).ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_user_id(value: Option<String>, field: FieldName) -> Result<UserId, Error> {
    let raw = required(value, field)?;
    UserId::new(raw.trim()).map_err(|err| map_user_error(field, &err, &raw))
}

pub(crate) fn parse_username(value: Option<String>) -> Result<Username, Error> {
    let raw = required(value, USERNAME)?;
    Username::new(raw.as_str()).map_err(|err| map_user_error(USERNAME, &err, &raw))
}

fn map_user_error(field: FieldName, err: &UserValidationError, raw: &str) -> Error {
    value_error(field, ErrorCode::InvalidValue, err.to_string(), raw)
}

pub(crate) fn parse_description(value: Option<String>) -> Result<Description, Error> {
    let raw = required(value, DESCRIPTION)?;
    Description::new(raw).map_err(|err| map_exercise_error(DESCRIPTION, &err))
}

fn map_exercise_error(field: FieldName, err: &ExerciseValidationError) -> Error {
    field_error(field, ErrorCode::InvalidValue, err.to_string())
}

/// Duration as submitted: JSON numbers and numeric strings are both accepted.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum DurationInput {
    /// A JSON number such as `30`.
    Whole(i64),
    /// Text such as `"30"`, as sent by HTML forms.
    Text(String),
    /// Any other JSON value, such as `30.5` or `true`; always rejected.
    Other(serde_json::Value),
}

pub(crate) fn parse_duration(value: Option<DurationInput>) -> Result<ExerciseDuration, Error> {
    match value {
        None => Err(missing_field_error(DURATION)),
        Some(DurationInput::Text(raw)) if raw.trim().is_empty() => {
            Err(missing_field_error(DURATION))
        }
        Some(DurationInput::Text(raw)) => raw.parse::<ExerciseDuration>().map_err(|err| {
            value_error(DURATION, ErrorCode::InvalidValue, err.to_string(), &raw)
        }),
        Some(DurationInput::Whole(whole)) => ExerciseDuration::from_whole(whole).map_err(|err| {
            value_error(
                DURATION,
                ErrorCode::InvalidValue,
                err.to_string(),
                &whole.to_string(),
            )
        }),
        Some(DurationInput::Other(other)) => Err(value_error(
            DURATION,
            ErrorCode::InvalidValue,
            ExerciseValidationError::InvalidDuration.to_string(),
            &other.to_string(),
        )),
    }
}

/// Parse an optional calendar date. Blank input counts as absent.
pub(crate) fn parse_optional_date(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<ExerciseDate>, Error> {
    non_blank(value)
        .map(|raw| {
            raw.parse::<ExerciseDate>().map_err(|_| {
                value_error(
                    field,
                    ErrorCode::InvalidDate,
                    format!("{} must be a calendar date in YYYY-MM-DD format", field.as_str()),
                    &raw,
                )
            })
        })
        .transpose()
}

/// Parse an optional non-negative count limit. Blank input counts as absent.
pub(crate) fn parse_limit(value: Option<String>) -> Result<Option<usize>, Error> {
    non_blank(value)
        .map(|raw| {
            raw.trim().parse::<usize>().map_err(|_| {
                value_error(
                    LIMIT,
                    ErrorCode::InvalidLimit,
                    "limit must be a non-negative integer".to_owned(),
                    &raw,
                )
            })
        })
        .transpose()
}
