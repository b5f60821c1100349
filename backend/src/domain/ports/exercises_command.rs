//! Driving port for recording exercises.

use async_trait::async_trait;

use crate::domain::{Description, Error, Exercise, ExerciseDate, ExerciseDuration, UserId};

/// Validated input for recording an exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExerciseRequest {
    /// Owner of the new entry.
    pub owner_id: UserId,
    /// What was done.
    pub description: Description,
    /// How long it lasted.
    pub duration: ExerciseDuration,
    /// When it happened; `None` means today.
    pub date: Option<ExerciseDate>,
}

/// Use-case port for recording exercises.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExercisesCommand: Send + Sync {
    /// Record an exercise and return the stored entry.
    async fn add_exercise(&self, request: AddExerciseRequest) -> Result<Exercise, Error>;
}
