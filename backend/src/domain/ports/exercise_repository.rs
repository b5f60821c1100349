//! Driven port for exercise storage.
use async_trait::async_trait;

use crate::domain::{Exercise, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by exercise repository adapters.
    pub enum ExerciseRepositoryError {
        /// The backing store could not serve the request.
        Unavailable { message: String } => "exercise repository unavailable: {message}",
    }
}

/// Append-only exercise collection keyed by owner.
///
/// Exercises have no identity of their own; they are only reachable through
/// their owner's identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Append an exercise.
    async fn append(&self, exercise: &Exercise) -> Result<(), ExerciseRepositoryError>;

    /// Every exercise owned by `owner_id`, in insertion order.
    async fn list_for_owner(
        &self,
        owner_id: &UserId,
    ) -> Result<Vec<Exercise>, ExerciseRepositoryError>;
}
