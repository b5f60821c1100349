//! Driven port for user storage.
use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Another user already holds the identifier.
        DuplicateId { id: String } => "user id already exists: {id}",
        /// The backing store could not serve the request.
        Unavailable { message: String } => "user repository unavailable: {message}",
    }
}

/// Append-only user collection.
///
/// `list` returns users in insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Append a new user. Fails when the identifier is already taken.
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Every user, oldest first.
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;
}
