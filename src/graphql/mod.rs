//! GraphQL schema, resolvers and HTTP front door for usergql.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (GraphiQL at http://localhost:8080/graphiql)
//! usergql serve
//!
//! # Execute an operation in-process
//! usergql query '{ user(id: "2") { name email } }'
//!
//! # Print the SDL
//! usergql schema
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `hello`, `users`, `user(id)`
//! - **Mutations**: `sendMessage(message)`
//!
//! ## Routes
//!
//! - `GET /`: landing page
//! - `GET /graphiql`: GraphiQL IDE
//! - `POST /graphql`: operation endpoint

mod schema;
mod server;
mod types;

pub use schema::{GREETING, MutationRoot, QueryRoot, UserSchema, build_schema, execute};
pub use server::{GRAPHIQL_PATH, GRAPHQL_PATH, RouteNotFound, build_router, run_server};
pub use types::*;
