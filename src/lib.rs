//! # usergql - a small GraphQL server over a fixed set of users
//!
//! Serves a GraphQL API backed by an immutable, in-memory list of three users,
//! plus a mutation that echoes a message back with a server-side timestamp.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on 127.0.0.1:8080 (or 0.0.0.0:$PORT when PORT is set)
//! usergql serve
//!
//! # Query without starting a server
//! usergql query '{ users { id name email } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Startup configuration (listen address)
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP routes
//! - [`model`]: Data models (User, Message)
//! - [`storage`]: Read-only user storage

/// Command-line interface definitions using clap.
pub mod cli;

/// Startup configuration.
///
/// Resolves the listen address from `PORT` and command-line overrides.
pub mod config;

/// Error types and result aliases.
///
/// Defines `AppError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and the axum front door.
pub mod graphql;

/// Data models for usergql.
pub mod model;

/// Read-only user storage.
pub mod storage;

pub mod logging;
