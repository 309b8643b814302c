//! Bodega Server - HTTP API for inventory queries
//!
//! Loads the catalog once at startup and serves stock, search and menu
//! endpoints until SIGTERM or Ctrl+C.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up BODEGA_SERVER__* overrides from a local .env, if any
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;

    server::start_server(config).await?;

    Ok(())
}
