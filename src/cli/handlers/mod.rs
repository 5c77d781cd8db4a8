mod query;
mod schema;
mod serve;

pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::graphql::{UserSchema, build_schema};
use crate::storage::{UserRepository, UserSource};
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub source: Arc<dyn UserSource>,
}

impl CommandContext {
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        Self { source }
    }

    pub fn schema(&self) -> UserSchema {
        build_schema(Arc::clone(&self.source))
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new(Arc::new(UserRepository::seeded()))
    }
}
