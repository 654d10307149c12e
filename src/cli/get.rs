//! Get command implementation

use crate::cli::CommandContext;
use crate::client::ResourceApi;
use crate::client::endpoints::resolve_target;
use crate::error::Result;
use crate::output::print_value;

/// Run the get command
pub async fn run(ctx: &CommandContext, endpoint: &str) -> Result<()> {
    let body = fetch(&ctx.client, endpoint).await?;
    print_value(&body, ctx.format)
}

/// Resolve a catalog name or path and fetch it with the stored token
pub async fn fetch<C: ResourceApi + ?Sized>(
    client: &C,
    endpoint: &str,
) -> Result<serde_json::Value> {
    let path = resolve_target(endpoint);
    log::debug!("Resolved '{}' to {}", endpoint, path);
    client.fetch_with_auth(&path).await
}
