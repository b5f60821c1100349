//! In-memory adapter for the `ExerciseRepository` port.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{ExerciseRepository, ExerciseRepositoryError};
use crate::domain::{Exercise, UserId};

#[derive(Debug, Default)]
struct ExerciseTable {
    entries: Vec<Exercise>,
    by_owner: HashMap<UserId, Vec<usize>>,
}

/// Exercise store backed by a vector in insertion order plus an owner index.
#[derive(Debug, Default)]
pub struct InMemoryExerciseRepository {
    table: RwLock<ExerciseTable>,
}

impl InMemoryExerciseRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExerciseRepository for InMemoryExerciseRepository {
    async fn append(&self, exercise: &Exercise) -> Result<(), ExerciseRepositoryError> {
        let mut table = self.table.write().await;
        let position = table.entries.len();
        table.entries.push(exercise.clone());
        table
            .by_owner
            .entry(exercise.owner_id().clone())
            .or_default()
            .push(position);
        Ok(())
    }

    async fn list_for_owner(
        &self,
        owner_id: &UserId,
    ) -> Result<Vec<Exercise>, ExerciseRepositoryError> {
        let table = self.table.read().await;
        let Some(positions) = table.by_owner.get(owner_id) else {
            return Ok(Vec::new());
        };
        Ok(positions
            .iter()
            .filter_map(|&position| table.entries.get(position))
            .cloned()
            .collect())
    }
}
