//! Exercise tracker backend.
//!
//! A small REST service for registering users, recording exercises against
//! them, and querying each user's exercise log with date and count filters.
//! The crate follows a hexagonal layout:
//!
//! - [`domain`]: entities, ports, and the use-case services.
//! - [`inbound`]: the actix-web HTTP adapter.
//! - [`outbound`]: in-memory storage and id generation adapters.
//! - [`server`]: configuration and application assembly.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
