//! MCP 工具适配器
//! MCP Tool Adapter
//!
//! 将 MCP 服务器上的工具包装为内核 `Tool` trait 实现。
//! Wrap tools from MCP servers as kernel `Tool` trait implementations.

use async_trait::async_trait;
use mcp_bridge_kernel::error::{BridgeError, BridgeResult};
use mcp_bridge_kernel::mcp::{McpClient, McpToolCall, McpToolInfo};
use mcp_bridge_kernel::tool::Tool;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// MCP 工具适配器
/// MCP Tool Adapter
///
/// 将远程目录中的单个工具包装为内核 `Tool` trait。
/// Wraps a single remote catalog entry into the kernel `Tool` trait.
/// 元数据在投影时冻结，每次调用都转发到共享的 MCP 客户端。
/// Metadata is frozen at projection time; every call is forwarded to the
/// shared MCP client.
///
/// # 示例
/// # Example
///
/// ```rust,ignore
/// let adapter = McpToolAdapter::new(tool_info, client.clone());
///
/// // 作为普通 Tool 使用
/// // Use as a standard Tool
/// let output = adapter.invoke(r#"{"path": "/tmp"}"#).await?;
/// ```
pub struct McpToolAdapter {
    /// 工具元信息
    /// Tool metadata info
    tool_info: McpToolInfo,
    /// MCP 客户端 (共享引用，不负责关闭)
    /// MCP client (shared reference, never closed here)
    client: Arc<dyn McpClient>,
}

impl McpToolAdapter {
    /// 创建新的 MCP 工具适配器
    /// Create a new MCP tool adapter
    pub fn new(tool_info: McpToolInfo, client: Arc<dyn McpClient>) -> Self {
        Self { tool_info, client }
    }

    /// 投影时捕获的远程描述
    /// The remote descriptor captured at projection time
    pub fn tool_info(&self) -> &McpToolInfo {
        &self.tool_info
    }

    fn decode_arguments(&self, arguments: &str) -> BridgeResult<Map<String, Value>> {
        match serde_json::from_str::<Value>(arguments) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(Value::Null) => Ok(Map::new()),
            Ok(other) => Err(BridgeError::argument_decode(
                &self.tool_info.name,
                format!("expected a JSON object, got {}", json_kind(&other)),
            )),
            Err(e) => Err(BridgeError::argument_decode(&self.tool_info.name, e.to_string())),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl fmt::Debug for McpToolAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("McpToolAdapter")
            .field("tool_info", &self.tool_info)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Tool for McpToolAdapter {
    fn name(&self) -> &str {
        &self.tool_info.name
    }

    fn description(&self) -> &str {
        &self.tool_info.description
    }

    fn parameters_schema(&self) -> Value {
        self.tool_info.input_schema.clone()
    }

    async fn invoke(&self, arguments: &str) -> BridgeResult<String> {
        let arguments = self.decode_arguments(arguments)?;
        tracing::debug!(
            "Calling MCP tool '{}' with {} argument(s)",
            self.tool_info.name,
            arguments.len()
        );

        let result = self
            .client
            .call_tool(McpToolCall::new(self.tool_info.name.clone(), arguments))
            .await?;

        // 原样保留远程结果作为错误详情
        // Keep the whole remote result as the error detail
        if result.is_error {
            let detail = serde_json::to_string(&result)?;
            tracing::warn!("MCP tool '{}' returned an error: {}", self.tool_info.name, detail);
            return Err(BridgeError::remote_invocation(&self.tool_info.name, detail));
        }

        Ok(serde_json::to_string(&result)?)
    }
}

/// 将远程描述逐一投影为本地工具，保持顺序
/// Project remote descriptors one-to-one into local tools, preserving order
pub fn project_tools(client: &Arc<dyn McpClient>, tools: Vec<McpToolInfo>) -> Vec<Arc<dyn Tool>> {
    tools
        .into_iter()
        .map(|info| Arc::new(McpToolAdapter::new(info, Arc::clone(client))) as Arc<dyn Tool>)
        .collect()
}
