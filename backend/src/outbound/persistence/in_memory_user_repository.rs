//! In-memory adapter for the `UserRepository` port.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

#[derive(Debug, Default)]
struct UserTable {
    users: Vec<User>,
    positions: HashMap<UserId, usize>,
}

/// User store backed by a vector in insertion order plus an id index.
///
/// # Examples
/// ```
/// use exercise_tracker::domain::ports::UserRepository;
/// use exercise_tracker::domain::{User, UserId, Username};
/// use exercise_tracker::outbound::persistence::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::new();
/// let id = UserId::new("abc123").expect("valid id");
/// let user = User::new(id.clone(), Username::new("alice").expect("valid username"));
/// repo.insert(&user).await.expect("insert succeeds");
/// assert_eq!(repo.find_by_id(&id).await.expect("lookup succeeds"), Some(user));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut table = self.table.write().await;
        if table.positions.contains_key(user.id()) {
            return Err(UserRepositoryError::duplicate_id(user.id().as_ref()));
        }
        let position = table.users.len();
        table.positions.insert(user.id().clone(), position);
        table.users.push(user.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.table.read().await.users.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let table = self.table.read().await;
        Ok(table
            .positions
            .get(id)
            .and_then(|&position| table.users.get(position))
            .cloned())
    }
}
