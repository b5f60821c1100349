//! Driven port producing identifiers for new users.

use crate::domain::UserId;

/// Source of unique, opaque user identifiers.
///
/// Implementations only promise uniqueness; callers must not read ordering or
/// meaning into the returned values.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Produce an identifier not previously returned by this generator.
    fn next_id(&self) -> UserId;
}
