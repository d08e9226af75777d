use anyhow::Context;
use poncho_mcp::{CatalogServer, CatalogState, Config};
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr to avoid interfering with the MCP protocol on stdout
    poncho_mcp::tracing::init();

    let config = Config::from_env()?;
    tracing::info!(
        "Starting poncho-mcp (catalog: {}, default limit: {})",
        config.catalog_path.display(),
        config.default_limit
    );

    let state = CatalogState::load(&config.catalog_path, config.default_limit)
        .await
        .with_context(|| format!("Failed to load catalog from {}", config.catalog_path.display()))?;

    // Create and serve the MCP server over stdio
    let server = CatalogServer::new(Arc::new(state));
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    // Wait for the service to complete
    service.waiting().await?;

    Ok(())
}
