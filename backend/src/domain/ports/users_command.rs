//! Driving port for user registration.

use async_trait::async_trait;

use crate::domain::{Error, User, Username};

/// Use-case port for creating users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Register a user under a freshly generated identifier.
    async fn create_user(&self, username: Username) -> Result<User, Error>;
}
