//! Exercise recording service.
//!
//! Owners are not required to exist: an exercise for an unknown owner is
//! accepted and stored without a username.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::{
    AddExerciseRequest, ExerciseRepository, ExerciseRepositoryError, ExercisesCommand,
    UsersQuery,
};
use crate::domain::{Error, Exercise, ExerciseDate};

pub(crate) fn map_exercise_repository_error(error: ExerciseRepositoryError) -> Error {
    match error {
        ExerciseRepositoryError::Unavailable { message } => {
            Error::internal(format!("exercise repository unavailable: {message}"))
        }
    }
}

/// Exercise service implementing [`ExercisesCommand`].
#[derive(Clone)]
pub struct ExerciseService<E, U> {
    exercises: Arc<E>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<E, U> ExerciseService<E, U> {
    /// Create a service over the exercise repository and the user lookup.
    ///
    /// `clock` supplies the date for requests that omit one.
    pub fn new(exercises: Arc<E>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self {
            exercises,
            users,
            clock,
        }
    }
}

#[async_trait]
impl<E, U> ExercisesCommand for ExerciseService<E, U>
where
    E: ExerciseRepository,
    U: UsersQuery,
{
    async fn add_exercise(&self, request: AddExerciseRequest) -> Result<Exercise, Error> {
        let AddExerciseRequest {
            owner_id,
            description,
            duration,
            date,
        } = request;

        let date = date.unwrap_or_else(|| ExerciseDate::today(self.clock.as_ref()));
        let username = self.users.find_username(&owner_id).await?;
        if username.is_none() {
            warn!(owner_id = %owner_id, "recording exercise for unknown user");
        }

        let exercise = Exercise::new(owner_id, description, duration, date, username);
        self.exercises
            .append(&exercise)
            .await
            .map_err(map_exercise_repository_error)?;
        info!(
            owner_id = %exercise.owner_id(),
            date = %exercise.date(),
            "exercise recorded"
        );
        Ok(exercise)
    }
}

#[cfg(test)]
#[path = "exercise_service_tests.rs"]
mod tests;
