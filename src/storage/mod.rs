//! Read-only user storage.
//!
//! Resolvers never touch the user list directly; they go through
//! [`UserSource`], so a different backing store can be swapped in without
//! changing the GraphQL contract.
//!
//! ## Components
//!
//! - [`UserSource`]: the "list all" / "find by id" capability
//! - [`UserRepository`]: an immutable in-memory implementation

mod repository;

pub use repository::{UserRepository, UserSource};
