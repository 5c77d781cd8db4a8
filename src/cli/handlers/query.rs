use anyhow::{Context, Result, bail};

use crate::graphql::execute;

use super::CommandContext;

pub async fn handle_query(ctx: CommandContext, operation: String, variables: Option<String>) -> Result<()> {
    let schema = ctx.schema();
    let response = execute(&schema, &operation, variables.as_deref())
        .await
        .context("Failed to execute GraphQL operation")?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_err() {
        bail!("GraphQL operation returned {} error(s)", response.errors.len());
    }
    Ok(())
}
