use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Request, Schema, Variables};
use tracing::debug;

use crate::error::{AppError, Result};
use crate::model::Message as ModelMessage;
use crate::storage::UserSource;

use super::types::*;

pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Value returned by the `hello` query.
pub const GREETING: &str = "Hello from Mercurius!";

pub fn build_schema(source: Arc<dyn UserSource>) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(source)
        .finish()
}

/// Executes one operation against `schema`.
///
/// `variables`, when given, must be a JSON object.
pub async fn execute(
    schema: &UserSchema,
    operation: &str,
    variables: Option<&str>,
) -> Result<async_graphql::Response> {
    let mut request = Request::new(operation);

    if let Some(raw) = variables {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(AppError::InvalidVariables(
                "expected a JSON object".to_string(),
            ));
        }
        request = request.variables(Variables::from_json(value));
    }

    Ok(schema.execute(request).await)
}

fn get_source<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<dyn UserSource>> {
    ctx.data::<Arc<dyn UserSource>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A fixed greeting
    async fn hello(&self) -> &'static str {
        GREETING
    }

    /// All users, in insertion order
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let source = get_source(ctx)?;
        Ok(source.all().iter().cloned().map(User::from).collect())
    }

    /// Get a single user by ID; null when no user matches
    async fn user(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<User>> {
        let source = get_source(ctx)?;
        let found = source.find(&id).cloned();
        if found.is_none() {
            debug!(id = %id.as_str(), "no user matched");
        }
        Ok(found.map(User::from))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Echo a message back with the time it was handled
    async fn send_message(&self, message: String) -> Message {
        let msg = ModelMessage::now(message);
        debug!(len = msg.message.len(), "echoing message");
        msg.into()
    }
}
