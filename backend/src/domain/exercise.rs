//! Exercise entries and their value types.
//!
//! An exercise belongs to exactly one owner through `owner_id` and has no
//! identifier of its own; it is only ever reached by scanning an owner's
//! entries.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{UserId, Username};

/// Maximum accepted length of a description, in characters.
pub const DESCRIPTION_MAX: usize = 256;

/// Calendar rendering used on the wire, e.g. `Mon Jan 09 2023`.
pub const DATE_WIRE_FORMAT: &str = "%a %b %d %Y";

const DATE_ISO_FORMAT: &str = "%Y-%m-%d";

/// Validation errors for exercise fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseValidationError {
    /// The description was blank once trimmed.
    EmptyDescription,
    /// The description exceeded `max` characters.
    DescriptionTooLong { max: usize },
    /// The duration was not a non-negative whole number.
    InvalidDuration,
    /// The date could not be parsed.
    InvalidDate,
}

impl fmt::Display for ExerciseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::DescriptionTooLong { max } => {
                write!(f, "description must be at most {max} characters")
            }
            Self::InvalidDuration => write!(f, "duration must be a non-negative whole number"),
            Self::InvalidDate => write!(f, "date must be a calendar date in YYYY-MM-DD format"),
        }
    }
}

impl std::error::Error for ExerciseValidationError {}

/// Free-text description of an exercise, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Validate and construct a [`Description`].
    pub fn new(description: impl Into<String>) -> Result<Self, ExerciseValidationError> {
        Self::from_owned(description.into())
    }

    fn from_owned(description: String) -> Result<Self, ExerciseValidationError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(ExerciseValidationError::EmptyDescription);
        }
        if trimmed.chars().count() > DESCRIPTION_MAX {
            return Err(ExerciseValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

impl TryFrom<String> for Description {
    type Error = ExerciseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Exercise duration in a caller-defined unit, stored exactly as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseDuration(u32);

impl ExerciseDuration {
    /// Wrap a whole-number duration.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Accept a signed whole number, rejecting negatives and overflow.
    pub fn from_whole(value: i64) -> Result<Self, ExerciseValidationError> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| ExerciseValidationError::InvalidDuration)
    }

    /// Raw value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for ExerciseDuration {
    type Err = ExerciseValidationError;

    /// Parse textual input such as `"30"`. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|_| ExerciseValidationError::InvalidDuration)
    }
}

impl fmt::Display for ExerciseDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar date of an exercise, without time of day.
///
/// Serialised with [`DATE_WIRE_FORMAT`]. Parsing accepts `YYYY-MM-DD`, the
/// wire rendering itself, or an RFC 3339 timestamp (its UTC date is used).
///
/// # Examples
/// ```
/// use exercise_tracker::domain::ExerciseDate;
///
/// let date: ExerciseDate = "2023-01-09".parse().expect("valid date");
/// assert_eq!(date.to_string(), "Mon Jan 09 2023");
/// assert_eq!("Mon Jan 09 2023".parse::<ExerciseDate>(), Ok(date));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExerciseDate(NaiveDate);

impl ExerciseDate {
    /// Wrap a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date according to the clock's UTC reading.
    #[must_use]
    pub fn today(clock: &dyn Clock) -> Self {
        Self(clock.utc().date_naive())
    }
}

impl FromStr for ExerciseDate {
    type Err = ExerciseValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        NaiveDate::parse_from_str(input, DATE_ISO_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(input, DATE_WIRE_FORMAT))
            .or_else(|_| {
                DateTime::parse_from_rfc3339(input).map(|ts| ts.with_timezone(&Utc).date_naive())
            })
            .map(Self)
            .map_err(|_| ExerciseValidationError::InvalidDate)
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_WIRE_FORMAT))
    }
}

impl From<ExerciseDate> for String {
    fn from(value: ExerciseDate) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for ExerciseDate {
    type Error = ExerciseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Logged exercise.
///
/// ## Invariants
/// - `username` is the owner's username when the entry was recorded, or
///   `None` when the owner was unknown at that time. `None` is omitted from
///   JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[schema(value_type = String, example = "SkQ3x_9a")]
    owner_id: UserId,
    #[schema(value_type = String, example = "run")]
    description: Description,
    #[schema(value_type = u32, example = 30)]
    duration: ExerciseDuration,
    #[schema(value_type = String, example = "Mon Jan 09 2023")]
    date: ExerciseDate,
    #[schema(value_type = Option<String>, example = "alice")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    username: Option<Username>,
}

impl Exercise {
    /// Build an exercise from validated parts.
    #[must_use]
    pub fn new(
        owner_id: UserId,
        description: Description,
        duration: ExerciseDuration,
        date: ExerciseDate,
        username: Option<Username>,
    ) -> Self {
        Self {
            owner_id,
            description,
            duration,
            date,
            username,
        }
    }

    /// Identifier of the owning user.
    #[must_use]
    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// What was done.
    #[must_use]
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// How long it lasted.
    #[must_use]
    pub fn duration(&self) -> ExerciseDuration {
        self.duration
    }

    /// Calendar date of the exercise.
    #[must_use]
    pub fn date(&self) -> ExerciseDate {
        self.date
    }

    /// Owner's username at creation time, if the owner was known.
    #[must_use]
    pub fn username(&self) -> Option<&Username> {
        self.username.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use rstest::rstest;
    use serde_json::json;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn date(year: i32, month: u32, day: u32) -> ExerciseDate {
        ExerciseDate::new(NaiveDate::from_ymd_opt(year, month, day).expect("valid date"))
    }

    #[rstest]
    #[case("2023-01-09", date(2023, 1, 9))]
    #[case(" 2023-01-09 ", date(2023, 1, 9))]
    #[case("Mon Jan 09 2023", date(2023, 1, 9))]
    #[case("2023-01-09T23:30:00-02:00", date(2023, 1, 10))]
    fn date_parses_supported_formats(#[case] input: &str, #[case] expected: ExerciseDate) {
        assert_eq!(input.parse::<ExerciseDate>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("yesterday")]
    #[case("2023-02-30")]
    #[case("09/01/2023")]
    fn date_rejects_unparseable_input(#[case] input: &str) {
        assert_eq!(
            input.parse::<ExerciseDate>(),
            Err(ExerciseValidationError::InvalidDate)
        );
    }

    #[rstest]
    fn today_uses_utc_calendar_date() {
        let clock = FixedClock(
            Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 59)
                .single()
                .expect("valid timestamp"),
        );
        assert_eq!(ExerciseDate::today(&clock), date(2024, 3, 1));
    }

    #[rstest]
    #[case("30", 30)]
    #[case(" 0 ", 0)]
    fn duration_parses_whole_numbers(#[case] input: &str, #[case] expected: u32) {
        assert_eq!(
            input.parse::<ExerciseDuration>(),
            Ok(ExerciseDuration::new(expected))
        );
    }

    #[rstest]
    #[case("thirty")]
    #[case("-5")]
    #[case("12.5")]
    #[case("")]
    fn duration_rejects_non_numeric_input(#[case] input: &str) {
        assert_eq!(
            input.parse::<ExerciseDuration>(),
            Err(ExerciseValidationError::InvalidDuration)
        );
    }

    #[rstest]
    fn duration_from_whole_rejects_negative_values() {
        assert_eq!(
            ExerciseDuration::from_whole(-1),
            Err(ExerciseValidationError::InvalidDuration)
        );
        assert_eq!(
            ExerciseDuration::from_whole(45).map(ExerciseDuration::get),
            Ok(45)
        );
    }

    #[rstest]
    fn description_is_trimmed_and_bounded() {
        assert_eq!(
            Description::new("  run ").map(String::from),
            Ok("run".to_owned())
        );
        assert_eq!(
            Description::new(" "),
            Err(ExerciseValidationError::EmptyDescription)
        );
        assert_eq!(
            Description::new("x".repeat(DESCRIPTION_MAX + 1)),
            Err(ExerciseValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX
            })
        );
    }

    #[rstest]
    fn exercise_serialises_wire_shape() {
        let exercise = Exercise::new(
            UserId::new("abc123").expect("valid id"),
            Description::new("run").expect("valid description"),
            ExerciseDuration::new(30),
            date(2023, 1, 9),
            Some(Username::new("alice").expect("valid username")),
        );

        let value = serde_json::to_value(&exercise).expect("serialise exercise");
        assert_eq!(
            value,
            json!({
                "ownerId": "abc123",
                "description": "run",
                "duration": 30,
                "date": "Mon Jan 09 2023",
                "username": "alice",
            })
        );
    }

    #[rstest]
    fn exercise_without_known_owner_omits_username() {
        let exercise = Exercise::new(
            UserId::new("ghost").expect("valid id"),
            Description::new("swim").expect("valid description"),
            ExerciseDuration::new(10),
            date(2023, 1, 9),
            None,
        );

        let value = serde_json::to_value(&exercise).expect("serialise exercise");
        assert!(value.get("username").is_none());
    }
}
