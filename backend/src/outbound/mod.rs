//! Outbound adapters implementing the domain's driven ports.
//!
//! - **persistence**: in-memory user and exercise stores
//! - **identifiers**: short opaque identifiers for new users
//!
//! Adapters translate between domain types and their storage representation.
//! They contain no business logic.

pub mod identifiers;
pub mod persistence;
