//! # mcp-bridge foundation
//!
//! Concrete building blocks on top of `mcp-bridge-kernel`:
//!
//! - [`mcp`]: catalog fetching, tool projection and the setup entry point
//!   [`mcp::get_tools`], plus an `rmcp`-backed client behind the `mcp` feature
//! - [`tools`]: an ordered [`tools::ToolRegistry`] for projected and local tools

pub mod mcp;
pub mod tools;

pub use mcp::{McpToolAdapter, McpToolsConfig, fetch_tools, get_tools, project_tools};
pub use tools::{ToolRegistry, ToolSource};
