//! # mcp-bridge kernel
//!
//! Interfaces shared by the bridge layers:
//!
//! - [`mcp::McpClient`]: an already-connected remote tool client
//! - [`tool::Tool`]: the host framework's tool contract
//! - [`error::BridgeError`]: the error model every layer reports through
//! - `config`: settings loading (feature `config`)
//!
//! Concrete implementations live in `mcp-bridge-foundation`.

pub mod error;
pub mod mcp;
pub mod tool;

#[cfg(feature = "config")]
pub mod config;

pub use error::{BridgeError, BridgeResult};
pub use mcp::{
    ContentPart, McpCallResult, McpClient, McpServerConfig, McpServerInfo, McpToolCall,
    McpToolInfo, McpTransportConfig,
};
pub use tool::{LLMTool, Tool, ToolInfo};
