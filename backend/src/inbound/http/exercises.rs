//! Exercise API handlers.
//!
//! ```text
//! POST /exercises {"userId":"k3Fz9qA1","description":"run","duration":30,"date":"2023-01-09"}
//! GET /exercises/log?userId=k3Fz9qA1&from=2023-01-01&to=2023-02-01&limit=10
//! ```

use actix_web::web;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{AddExerciseRequest, ExerciseLogRequest};
use crate::domain::{Error, Exercise, ExerciseLog, LogFilter, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::JsonOrForm;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    DATE, DurationInput, FROM, TO, USER_ID, parse_description, parse_duration, parse_limit,
    parse_optional_date, parse_user_id, required,
};

/// Request body for `POST /exercises`, sent as JSON or as a form.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddExerciseBody {
    /// Owner of the entry.
    #[schema(example = "k3Fz9qA1")]
    #[serde(default)]
    pub user_id: Option<String>,
    /// What was done.
    #[schema(example = "run")]
    #[serde(default)]
    pub description: Option<String>,
    /// Whole minutes, as a number or numeric text.
    #[serde(default)]
    pub duration: Option<DurationInput>,
    /// Calendar date; today when absent or blank.
    #[schema(example = "2023-01-09")]
    #[serde(default)]
    pub date: Option<String>,
}

impl TryFrom<AddExerciseBody> for AddExerciseRequest {
    type Error = Error;

    fn try_from(body: AddExerciseBody) -> Result<Self, Self::Error> {
        let owner_id = parse_user_id(body.user_id, USER_ID)?;
        let description = parse_description(body.description)?;
        let duration = parse_duration(body.duration)?;
        let date = parse_optional_date(body.date, DATE)?;
        Ok(Self {
            owner_id,
            description,
            duration,
            date,
        })
    }
}

/// Query string for `GET /exercises/log`.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct LogQueryParams {
    /// User whose log is requested.
    #[param(value_type = String, example = "k3Fz9qA1")]
    pub user_id: Option<String>,
    /// Keep entries dated strictly after this day (`YYYY-MM-DD`).
    #[param(example = "2023-01-01")]
    pub from: Option<String>,
    /// Keep entries dated strictly before this day (`YYYY-MM-DD`).
    #[param(example = "2023-02-01")]
    pub to: Option<String>,
    /// Keep at most this many of the first matching entries.
    #[param(value_type = Option<u32>, example = 10)]
    pub limit: Option<String>,
}

/// Validated log query.
///
/// Stored owners always hold well-formed ids, so a lookup key that is not one
/// can match nothing and is answered with an empty log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LogLookup {
    Owner(ExerciseLogRequest),
    Unmatched(String),
}

impl TryFrom<LogQueryParams> for LogLookup {
    type Error = Error;

    fn try_from(params: LogQueryParams) -> Result<Self, Self::Error> {
        let raw_id = required(params.user_id, USER_ID)?;
        let mut filter = LogFilter::default();
        if let Some(from) = parse_optional_date(params.from, FROM)? {
            filter = filter.with_from(from);
        }
        if let Some(to) = parse_optional_date(params.to, TO)? {
            filter = filter.with_to(to);
        }
        if let Some(limit) = parse_limit(params.limit)? {
            filter = filter.with_limit(limit);
        }
        let key = raw_id.trim();
        Ok(match UserId::new(key) {
            Ok(user_id) => Self::Owner(ExerciseLogRequest { user_id, filter }),
            Err(_) => Self::Unmatched(key.to_owned()),
        })
    }
}

/// Record an exercise for a user.
///
/// The owner's username is copied onto the entry. Unknown owners are
/// accepted; their entries carry no username.
#[utoipa::path(
    post,
    path = "/exercises",
    request_body(content(
        (AddExerciseBody = "application/json"),
        (AddExerciseBody = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Exercise recorded", body = Exercise),
        (status = 400, description = "Invalid request", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    tags = ["exercises"],
    operation_id = "addExercise"
)]
pub async fn add_exercise(
    state: web::Data<HttpState>,
    payload: JsonOrForm<AddExerciseBody>,
) -> ApiResult<web::Json<Exercise>> {
    let request = AddExerciseRequest::try_from(payload.into_inner())?;
    let exercise = state.exercises.add_exercise(request).await?;
    Ok(web::Json(exercise))
}

/// Read a user's exercise log, optionally narrowed by date and count.
///
/// Unknown users get an empty log without a username rather than an error.
#[utoipa::path(
    get,
    path = "/exercises/log",
    params(LogQueryParams),
    responses(
        (status = 200, description = "Filtered exercise log", body = ExerciseLog),
        (status = 400, description = "Invalid request", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
    tags = ["exercises"],
    operation_id = "exerciseLog"
)]
pub async fn exercise_log(
    state: web::Data<HttpState>,
    query: web::Query<LogQueryParams>,
) -> ApiResult<web::Json<ExerciseLog>> {
    let log = match LogLookup::try_from(query.into_inner())? {
        LogLookup::Owner(request) => state.exercise_log.exercise_log(request).await?,
        LogLookup::Unmatched(user_id) => {
            debug!(user_id = %user_id, "log requested for malformed user id");
            ExerciseLog::unmatched(user_id)
        }
    };
    Ok(web::Json(log))
}
