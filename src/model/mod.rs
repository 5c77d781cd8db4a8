//! Data models for usergql.
//!
//! - [`User`]: a fixed, read-only user record
//! - [`Message`]: the echo produced by the `sendMessage` mutation

mod message;
mod user;

pub use message::Message;
pub use user::User;
