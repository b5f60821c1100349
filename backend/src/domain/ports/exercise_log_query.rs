//! Driving port for exercise log queries.

use async_trait::async_trait;

use crate::domain::{Error, ExerciseLog, LogFilter, UserId};

/// Validated input for an exercise log query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLogRequest {
    /// User whose history is requested.
    pub user_id: UserId,
    /// Date window and count limit.
    pub filter: LogFilter,
}

/// Use-case port for reading a user's filtered exercise history.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseLogQuery: Send + Sync {
    /// Build the filtered log. Unknown users yield an empty log, not an error.
    async fn exercise_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLog, Error>;
}
