//! MCP Tool Bridge Demo
//!
//! Demonstrates how to:
//!
//! 1. Load bridge settings (server transport + tool allow-list) from a file.
//! 2. Connect to the MCP server and project its tools into local `Tool`s.
//! 3. Print each tool's metadata.
//! 4. Optionally invoke one tool with a JSON argument payload.
//!
//! ## Running
//!
//! ```text
//! TMPDIR=/tmp cargo run -p mcp_tools -- demos/mcp_tools/config/mcp.toml
//! TMPDIR=/tmp cargo run -p mcp_tools -- demos/mcp_tools/config/mcp.toml list_directory '{"path":"/tmp"}'
//! ```

use mcp_bridge_foundation::mcp::connect_and_get_tools;
use mcp_bridge_kernel::config::{BridgeSettings, load_config};
use mcp_bridge_kernel::tool::Tool;
use std::env;
use std::sync::Arc;
use tracing::info;

const DEFAULT_SETTINGS: &str = "demos/mcp_tools/config/mcp.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = env::args().skip(1);
    let settings_path = args.next().unwrap_or_else(|| DEFAULT_SETTINGS.to_string());
    let tool_to_call = args.next();
    let payload = args.next().unwrap_or_else(|| "{}".to_string());

    let settings: BridgeSettings = load_config(&settings_path)?;
    info!("Loaded settings for MCP server '{}'", settings.server.name);

    let (client, tools) = connect_and_get_tools(&settings).await?;
    if let Ok(server) = client.server_info() {
        println!("Server: {} v{}", server.name, server.version);
    }

    println!("Projected {} tool(s):", tools.len());
    for (i, tool) in tools.iter().enumerate() {
        let info = tool.info();
        println!("{i}: {}", info.name);
        println!("   {}", info.description);
    }

    if let Some(name) = tool_to_call {
        match tools.iter().find(|t| t.name() == name) {
            Some(tool) => match tool.invoke(&payload).await {
                Ok(output) => println!("\n{name} -> {output}"),
                Err(e) => eprintln!("\n{name} failed: {e}"),
            },
            None => eprintln!("\nTool '{name}' was not projected"),
        }
    }

    // Handles only share the client; release them before closing it.
    drop(tools);
    match Arc::try_unwrap(client) {
        Ok(client) => client.close().await?,
        Err(_) => info!("MCP client still shared; leaving it open"),
    }

    Ok(())
}
