//! 基于 rmcp 的 MCP 客户端
//! rmcp-backed MCP Client
//!
//! 使用 `rmcp` 库建立会话并实现内核的 `McpClient` trait。
//! Establishes a session with the `rmcp` library and implements the kernel's
//! `McpClient` trait.

use super::{McpToolsConfig, get_tools};
use async_trait::async_trait;
use mcp_bridge_kernel::config::BridgeSettings;
use mcp_bridge_kernel::error::{BridgeError, BridgeResult};
use mcp_bridge_kernel::mcp::{
    McpCallResult, McpClient, McpServerConfig, McpServerInfo, McpToolCall, McpToolInfo,
    McpTransportConfig,
};
use mcp_bridge_kernel::tool::Tool;
use rmcp::ServiceExt;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, ClientCapabilities, ClientInfo, Implementation,
};
use rmcp::service::{RoleClient, RunningService};
use rmcp::transport::{StreamableHttpClientTransport, TokioChildProcess};
use std::sync::Arc;
use tokio::process::Command;

/// 单个 MCP 服务器的已初始化会话
/// An initialized session with a single MCP server
///
/// # 示例
/// # Example
///
/// ```rust,ignore
/// let config = McpServerConfig::stdio(
///     "filesystem",
///     "npx",
///     vec!["-y".into(), "@modelcontextprotocol/server-filesystem".into(), "/tmp".into()],
/// );
/// let client = Arc::new(RmcpClient::connect(&config).await?);
/// let tools = get_tools(&McpToolsConfig::new(client.clone())).await?;
/// ```
pub struct RmcpClient {
    server_name: String,
    /// rmcp 运行时服务
    /// rmcp runtime service
    service: RunningService<RoleClient, ClientInfo>,
}

fn client_info() -> ClientInfo {
    ClientInfo {
        meta: None,
        protocol_version: Default::default(),
        capabilities: ClientCapabilities::default(),
        client_info: Implementation {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            title: None,
            description: None,
            icons: None,
            website_url: None,
        },
    }
}

impl RmcpClient {
    /// 连接到 MCP 服务器并完成握手
    /// Connect to an MCP server and complete the handshake
    pub async fn connect(config: &McpServerConfig) -> BridgeResult<Self> {
        let server_name = config.name.clone();
        tracing::info!("Connecting to MCP server '{}'...", server_name);

        let service = match &config.transport {
            McpTransportConfig::Stdio { command, args, env } => {
                let mut cmd = Command::new(command);
                cmd.args(args);
                for (key, value) in env {
                    cmd.env(key, value);
                }

                let transport = TokioChildProcess::new(cmd).map_err(|e| {
                    BridgeError::transport(
                        "connect",
                        format!("failed to start MCP server process '{}': {}", server_name, e),
                    )
                })?;

                client_info().serve(transport).await.map_err(|e| {
                    BridgeError::transport(
                        "initialize",
                        format!("MCP session with '{}' failed: {}", server_name, e),
                    )
                })?
            }
            McpTransportConfig::Http { url } => {
                let transport = StreamableHttpClientTransport::from_uri(url.clone());

                client_info().serve(transport).await.map_err(|e| {
                    BridgeError::transport(
                        "initialize",
                        format!("MCP session with '{}' at {} failed: {}", server_name, url, e),
                    )
                })?
            }
            _ => {
                return Err(BridgeError::Configuration(format!(
                    "Unsupported MCP transport for server '{}'",
                    server_name
                )));
            }
        };

        tracing::info!("Connected to MCP server '{}'", server_name);
        Ok(Self {
            server_name,
            service,
        })
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// 握手时服务器返回的信息
    /// Information the server returned during the handshake
    pub fn server_info(&self) -> BridgeResult<McpServerInfo> {
        let server_info = self.service.peer().peer_info().ok_or_else(|| {
            BridgeError::transport(
                "server_info",
                format!("no server info available for '{}'", self.server_name),
            )
        })?;

        Ok(McpServerInfo {
            name: server_info.server_info.name.clone(),
            version: server_info.server_info.version.clone(),
            instructions: server_info.instructions.clone(),
        })
    }

    /// 关闭会话
    /// Close the session
    pub async fn close(self) -> BridgeResult<()> {
        tracing::info!("Disconnecting from MCP server '{}'...", self.server_name);
        self.service.cancel().await.map_err(|e| {
            BridgeError::transport(
                "close",
                format!("failed to disconnect from '{}': {}", self.server_name, e),
            )
        })?;
        tracing::info!("Disconnected from MCP server '{}'", self.server_name);
        Ok(())
    }
}

#[async_trait]
impl McpClient for RmcpClient {
    async fn list_tools(&self) -> BridgeResult<Vec<McpToolInfo>> {
        let tools = self.service.peer().list_all_tools().await.map_err(|e| {
            BridgeError::transport(
                "tools/list",
                format!("MCP server '{}': {}", self.server_name, e),
            )
        })?;

        tools.iter().map(tool_info_from_rmcp).collect()
    }

    async fn call_tool(&self, call: McpToolCall) -> BridgeResult<McpCallResult> {
        let params = CallToolRequestParams {
            name: call.name.clone().into(),
            arguments: Some(call.arguments),
            meta: None,
            task: None,
        };

        let result = self.service.peer().call_tool(params).await.map_err(|e| {
            BridgeError::transport(
                "tools/call",
                format!(
                    "MCP tool '{}' on server '{}': {}",
                    call.name, self.server_name, e
                ),
            )
        })?;

        call_result_from_rmcp(&result)
    }
}

// rmcp 与内核类型共享线协议形状，经 JSON 转换
// rmcp and kernel types share the wire shape; convert through JSON

fn tool_info_from_rmcp(tool: &rmcp::model::Tool) -> BridgeResult<McpToolInfo> {
    Ok(serde_json::from_value(serde_json::to_value(tool)?)?)
}

fn call_result_from_rmcp(result: &CallToolResult) -> BridgeResult<McpCallResult> {
    Ok(serde_json::from_value(serde_json::to_value(result)?)?)
}

/// 按设置连接并投影工具
/// Connect per the settings and project the tools
///
/// The returned client is owned by the caller, who closes it once the
/// tools are no longer in use.
pub async fn connect_and_get_tools(
    settings: &BridgeSettings,
) -> BridgeResult<(Arc<RmcpClient>, Vec<Arc<dyn Tool>>)> {
    let client = Arc::new(RmcpClient::connect(&settings.server).await?);
    let config = McpToolsConfig::new(client.clone())
        .with_tool_names(settings.tool_name_list.iter().cloned());
    let tools = get_tools(&config).await?;
    Ok((client, tools))
}
