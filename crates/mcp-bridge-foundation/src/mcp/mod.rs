//! MCP 工具桥接
//! MCP Tool Bridge
//!
//! 将远程 MCP 工具目录投影为本地可调用的 `Tool`。
//! Projects a remote MCP tool catalog into locally invokable `Tool`s.
//!
//! # 模块结构
//! # Module Structure
//!
//! - `fetch_tools` - 列出并过滤远程目录 / lists and filters the remote catalog
//! - `McpToolAdapter` - 将 MCP 工具包装为内核 `Tool` trait / wraps an MCP tool as a kernel `Tool`
//! - `get_tools` - 配置入口 / setup entry point
//! - `RmcpClient` - 基于 `rmcp` 的客户端 (feature `mcp`) / `rmcp`-backed client (feature `mcp`)

mod catalog;
#[cfg(feature = "mcp")]
mod client;
mod tool_adapter;

pub use catalog::{fetch_tools, select_tools};
#[cfg(feature = "mcp")]
pub use client::{RmcpClient, connect_and_get_tools};
pub use tool_adapter::{McpToolAdapter, project_tools};

use mcp_bridge_kernel::error::{BridgeError, BridgeResult};
use mcp_bridge_kernel::mcp::McpClient;
use mcp_bridge_kernel::tool::Tool;
use std::fmt;
use std::sync::Arc;

/// MCP 工具配置
/// MCP tools configuration
///
/// `client` must already be connected; the bridge shares it and leaves its
/// lifecycle to the caller.
#[derive(Clone, Default)]
pub struct McpToolsConfig {
    /// 已初始化的 MCP 客户端
    /// An initialized MCP client
    pub client: Option<Arc<dyn McpClient>>,
    /// 工具名称白名单，空表示全部
    /// Tool name allow-list; empty means all
    pub tool_name_list: Vec<String>,
}

impl McpToolsConfig {
    pub fn new(client: Arc<dyn McpClient>) -> Self {
        Self {
            client: Some(client),
            tool_name_list: Vec::new(),
        }
    }

    /// 限制投影的工具名称
    /// Restrict which tool names are projected
    pub fn with_tool_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tool_name_list = names.into_iter().map(Into::into).collect();
        self
    }
}

impl fmt::Debug for McpToolsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("McpToolsConfig")
            .field("client", &self.client.as_ref().map(|_| "<McpClient>"))
            .field("tool_name_list", &self.tool_name_list)
            .finish()
    }
}

/// 获取远程工具并投影为本地 `Tool`
/// Fetch remote tools and project them into local `Tool`s
///
/// Fails fast with [`BridgeError::Configuration`] when no client is set,
/// before any remote call. Any listing failure aborts setup entirely.
///
/// # 示例
/// # Example
///
/// ```rust,ignore
/// let config = McpToolsConfig::new(client).with_tool_names(["read_file"]);
/// let tools = get_tools(&config).await?;
/// let output = tools[0].invoke(r#"{"path": "/tmp/a.txt"}"#).await?;
/// ```
pub async fn get_tools(config: &McpToolsConfig) -> BridgeResult<Vec<Arc<dyn Tool>>> {
    let client = config.client.as_ref().ok_or_else(|| {
        BridgeError::Configuration("MCP tools config requires a connected client".to_string())
    })?;

    let selected = fetch_tools(client.as_ref(), &config.tool_name_list).await?;
    Ok(project_tools(client, selected))
}
