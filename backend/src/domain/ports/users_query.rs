//! Driving port for user-facing queries.
//!
//! Inbound adapters read users through this port without touching the
//! storage adapters directly.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, Username};

/// Use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every registered user in registration order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Username for `id`, or `None` when no such user exists.
    async fn find_username(&self, id: &UserId) -> Result<Option<Username>, Error>;
}
