//! Short opaque user identifiers.
//!
//! An identifier is a random alphanumeric prefix followed by a hexadecimal
//! sequence number. The prefix keeps identifiers unguessable across restarts;
//! the sequence makes them unique within a process.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use rand::distributions::Alphanumeric;

use crate::domain::UserId;
use crate::domain::ports::IdGenerator;

const PREFIX_LEN: usize = 7;

/// [`IdGenerator`] producing identifiers such as `Xq3Tb9k0`.
#[derive(Debug, Default)]
pub struct ShortIdGenerator {
    sequence: AtomicU64,
}

impl ShortIdGenerator {
    /// Create a generator whose sequence starts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for ShortIdGenerator {
    fn next_id(&self) -> UserId {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        let prefix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(PREFIX_LEN)
            .map(char::from)
            .collect();
        UserId::from_alphanumeric(format!("{prefix}{sequence:x}"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(10, "a")]
    #[case(255, "ff")]
    #[case(u64::MAX, "ffffffffffffffff")]
    fn sequence_is_rendered_in_hex(#[case] start: u64, #[case] suffix: &str) {
        let generator = ShortIdGenerator {
            sequence: AtomicU64::new(start),
        };

        let id = generator.next_id();

        assert!(id.as_ref().ends_with(suffix));
        assert_eq!(id.as_ref().len(), PREFIX_LEN + suffix.len());
        assert!(UserId::new(id.as_ref()).is_ok());
    }

    #[rstest]
    fn identifiers_are_alphanumeric_with_sequence_suffix() {
        let generator = ShortIdGenerator::new();
        let first = generator.next_id();
        let second = generator.next_id();

        assert!(first.as_ref().chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(first.as_ref().len(), PREFIX_LEN + 1);
        assert!(first.as_ref().ends_with('0'));
        assert!(second.as_ref().ends_with('1'));
    }

    #[rstest]
    fn identifiers_do_not_repeat() {
        let generator = ShortIdGenerator::new();
        let ids: HashSet<String> = (0..5_000)
            .map(|_| String::from(generator.next_id()))
            .collect();
        assert_eq!(ids.len(), 5_000);
    }
}
