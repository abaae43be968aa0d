//! mcp-bridge Testing Framework
//!
//! Provides a scripted MCP client so the bridge can be exercised without a
//! live MCP server or transport.

pub mod client;

pub use client::{MockMcpClient, MockResponse};
