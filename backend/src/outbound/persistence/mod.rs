//! In-memory persistence adapters.
//!
//! Both stores are append-only and live for the lifetime of the process;
//! nothing survives a restart. Each store guards its table with a
//! `tokio::sync::RwLock` so concurrent requests never observe a half-applied
//! append.

mod in_memory_exercise_repository;
mod in_memory_user_repository;

pub use in_memory_exercise_repository::InMemoryExerciseRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
