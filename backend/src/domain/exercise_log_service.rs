//! Exercise log query service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::exercise_service::map_exercise_repository_error;
use crate::domain::ports::{
    ExerciseLogQuery, ExerciseLogRequest, ExerciseRepository, UsersQuery,
};
use crate::domain::{Error, ExerciseLog};

/// Service implementing [`ExerciseLogQuery`].
///
/// Reads the owner's entries in insertion order, applies the request's
/// [`LogFilter`](crate::domain::LogFilter), and annotates the result with the
/// owner's username and the filtered count.
#[derive(Clone)]
pub struct ExerciseLogService<E, U> {
    exercises: Arc<E>,
    users: Arc<U>,
}

impl<E, U> ExerciseLogService<E, U> {
    /// Create a service over the exercise repository and the user lookup.
    pub fn new(exercises: Arc<E>, users: Arc<U>) -> Self {
        Self { exercises, users }
    }
}

#[async_trait]
impl<E, U> ExerciseLogQuery for ExerciseLogService<E, U>
where
    E: ExerciseRepository,
    U: UsersQuery,
{
    async fn exercise_log(&self, request: ExerciseLogRequest) -> Result<ExerciseLog, Error> {
        let ExerciseLogRequest { user_id, filter } = request;

        let history = self
            .exercises
            .list_for_owner(&user_id)
            .await
            .map_err(map_exercise_repository_error)?;
        let total = history.len();
        let log = filter.apply(history);

        let username = self.users.find_username(&user_id).await?;

        debug!(
            user_id = %user_id,
            total,
            returned = log.len(),
            "exercise log assembled"
        );
        Ok(ExerciseLog::new(user_id, username, log))
    }
}

#[cfg(test)]
#[path = "exercise_log_service_tests.rs"]
mod tests;
