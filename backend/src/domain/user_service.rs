//! User registration and lookup services.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    IdGenerator, UserRepository, UserRepositoryError, UsersCommand, UsersQuery,
};
use crate::domain::{Error, User, UserId, Username};

fn map_user_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::DuplicateId { id } => {
            Error::internal(format!("generated user id collided with an existing user: {id}"))
        }
        UserRepositoryError::Unavailable { message } => {
            Error::internal(format!("user repository unavailable: {message}"))
        }
    }
}

/// User service implementing [`UsersCommand`] and [`UsersQuery`].
#[derive(Clone)]
pub struct UserService<R, G> {
    users: Arc<R>,
    ids: Arc<G>,
}

impl<R, G> UserService<R, G> {
    /// Create a service over a user repository and an identifier source.
    pub fn new(users: Arc<R>, ids: Arc<G>) -> Self {
        Self { users, ids }
    }
}

#[async_trait]
impl<R, G> UsersCommand for UserService<R, G>
where
    R: UserRepository,
    G: IdGenerator,
{
    async fn create_user(&self, username: Username) -> Result<User, Error> {
        let user = User::new(self.ids.next_id(), username);
        self.users
            .insert(&user)
            .await
            .map_err(map_user_repository_error)?;
        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }
}

#[async_trait]
impl<R, G> UsersQuery for UserService<R, G>
where
    R: UserRepository,
    G: IdGenerator,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(map_user_repository_error)
    }

    async fn find_username(&self, id: &UserId) -> Result<Option<Username>, Error> {
        let user = self
            .users
            .find_by_id(id)
            .await
            .map_err(map_user_repository_error)?;
        Ok(user.map(|found| found.username().clone()))
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
