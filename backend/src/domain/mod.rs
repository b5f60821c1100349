//! Domain primitives, ports, and services.
//!
//! Purpose: define the strongly typed entities of the exercise tracker and
//! the use-case services behind the driving ports. Nothing here depends on
//! actix or on a concrete storage adapter.
//!
//! Public surface:
//! - [`User`], [`UserId`], [`Username`]: registered users.
//! - [`Exercise`] and its value types: logged exercises.
//! - [`LogFilter`], [`ExerciseLog`]: the exercise log query contract.
//! - [`Error`], [`ErrorCode`]: transport-agnostic failures.
//! - [`TraceId`]: request correlation identifier.

pub mod error;
pub mod exercise;
pub mod exercise_log;
mod exercise_log_service;
mod exercise_service;
pub mod ports;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::exercise::{
    DATE_WIRE_FORMAT, DESCRIPTION_MAX, Description, Exercise, ExerciseDate, ExerciseDuration,
    ExerciseValidationError,
};
pub use self::exercise_log::{ExerciseLog, LogFilter};
pub use self::exercise_log_service::ExerciseLogService;
pub use self::exercise_service::ExerciseService;
pub use self::trace_id::TraceId;
pub use self::user::{USER_ID_MAX, USERNAME_MAX, User, UserId, UserValidationError, Username};
pub use self::user_service::UserService;

/// Response header carrying the request's [`TraceId`].
pub const TRACE_ID_HEADER: &str = "trace-id";
