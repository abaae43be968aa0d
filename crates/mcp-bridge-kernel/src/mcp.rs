//! MCP (Model Context Protocol) 远程客户端接口
//! MCP (Model Context Protocol) Remote Client Interface
//!
//! 定义桥接层消费的远程工具目录与调用接口。
//! Defines the remote tool catalog and invocation interface the bridge consumes.
//!
//! # 架构
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                Host Agent                    │
//! │  ┌─────────────────────────────────────────┐│
//! │  │  ToolRegistry / Vec<Arc<dyn Tool>>      ││
//! │  │  ┌───────────────┐ ┌───────────────┐    ││
//! │  │  │McpToolAdapter │ │McpToolAdapter │ …  ││
//! │  │  └───────┬───────┘ └───────┬───────┘    ││
//! │  └──────────┼─────────────────┼────────────┘│
//! └─────────────┼─────────────────┼─────────────┘
//!               └────────┬────────┘
//!             ┌──────────▼──────────┐
//!             │ Arc<dyn McpClient>  │  (owned by the caller)
//!             └──────────┬──────────┘
//!                        ▼
//!                ┌──────────────┐
//!                │  MCP Server  │
//!                └──────────────┘
//! ```

use crate::error::BridgeResult;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

// ============================================================================
// MCP Transport Configuration
// ============================================================================

/// MCP 服务器传输配置
/// MCP Server Transport Configuration
///
/// 定义如何连接到 MCP 服务器
/// Defines how to connect to an MCP server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum McpTransportConfig {
    /// 通过标准输入输出连接 (启动子进程)
    /// Connection via Standard Input/Output (spawning a sub-process)
    Stdio {
        /// 可执行命令
        /// Executable command
        command: String,
        /// 命令参数
        /// Command arguments
        #[serde(default)]
        args: Vec<String>,
        /// 环境变量
        /// Environment variables
        #[serde(default)]
        env: HashMap<String, String>,
    },

    /// 通过 Streamable HTTP 连接
    /// Connection via Streamable HTTP
    Http {
        /// 服务器 URL
        /// Server URL
        url: String,
    },
}

// ============================================================================
// MCP Server Configuration
// ============================================================================

/// MCP 服务器配置
/// MCP Server Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpServerConfig {
    /// 服务器名称 (用于标识与日志)
    /// Server name (used for identification and logging)
    pub name: String,
    /// 传输配置
    /// Transport configuration
    pub transport: McpTransportConfig,
}

impl McpServerConfig {
    /// 创建 Stdio 类型的 MCP 服务器配置
    /// Creates an MCP server configuration of Stdio type
    pub fn stdio(name: impl Into<String>, command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            transport: McpTransportConfig::Stdio {
                command: command.into(),
                args,
                env: HashMap::new(),
            },
        }
    }

    /// 创建 HTTP 类型的 MCP 服务器配置
    /// Creates an MCP server configuration of HTTP type
    pub fn http(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transport: McpTransportConfig::Http { url: url.into() },
        }
    }

    /// 设置环境变量 (仅对 Stdio 有效)
    /// Sets environment variables (only valid for Stdio)
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let McpTransportConfig::Stdio { ref mut env, .. } = self.transport {
            env.insert(key.into(), value.into());
        }
        self
    }
}

// ============================================================================
// MCP Tool Information
// ============================================================================

/// MCP 工具信息
/// MCP Tool Information
///
/// 从远程目录获取的工具描述，投影期间只读持有。
/// A tool descriptor from the remote catalog, held read-only during projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpToolInfo {
    /// 工具名称 (目录内唯一)
    /// Tool name (unique within the catalog)
    pub name: String,
    /// 工具描述
    /// Tool description
    #[serde(default, deserialize_with = "string_or_null")]
    pub description: String,
    /// 输入参数 JSON Schema
    /// Input parameter JSON Schema
    #[serde(
        rename = "inputSchema",
        alias = "input_schema",
        default = "default_input_schema"
    )]
    pub input_schema: serde_json::Value,
}

impl McpToolInfo {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Schema used when the remote omits `inputSchema`.
pub fn default_input_schema() -> serde_json::Value {
    serde_json::json!({ "type": "object" })
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn bool_or_null<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn is_false(value: &bool) -> bool {
    !*value
}

// ============================================================================
// MCP Call Request / Result
// ============================================================================

/// MCP 工具调用请求
/// MCP tool invocation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpToolCall {
    /// 工具名称
    pub name: String,
    /// 已解码的参数对象
    /// Decoded argument object
    #[serde(default)]
    pub arguments: serde_json::Map<String, serde_json::Value>,
}

impl McpToolCall {
    pub fn new(
        name: impl Into<String>,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// 工具结果中的单个内容片段
/// A single typed content part of a tool result
///
/// Unknown extra fields (annotations, `_meta`) are dropped on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text {
        text: String,
    },
    Image {
        data: String,
        #[serde(rename = "mimeType")]
        mime_type: String,
    },
    Audio {
        data: String,
        #[serde(rename = "mimeType")]
        mime_type: String,
    },
    /// Embedded resource contents, kept as the remote sent them.
    Resource {
        resource: serde_json::Value,
    },
    ResourceLink {
        uri: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        #[serde(
            rename = "mimeType",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        mime_type: Option<String>,
    },
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }
}

/// MCP 工具调用结果
/// MCP tool call result
///
/// Serializes to the host's output document. `isError` is only written
/// when set, so a text-only success is exactly
/// `{"content":[{"type":"text","text":"..."}]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpCallResult {
    #[serde(default)]
    pub content: Vec<ContentPart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<serde_json::Value>,
    #[serde(
        default,
        skip_serializing_if = "is_false",
        deserialize_with = "bool_or_null"
    )]
    pub is_error: bool,
}

impl McpCallResult {
    /// 单段文本成功结果
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentPart::text(text)],
            ..Default::default()
        }
    }

    /// 单段文本错误结果
    pub fn error_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentPart::text(text)],
            structured_content: None,
            is_error: true,
        }
    }

    /// Concatenation of all text parts, newline separated.
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .filter_map(ContentPart::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ============================================================================
// MCP Server Information
// ============================================================================

/// MCP 服务器信息
/// MCP Server Information
///
/// MCP 服务器在初始化握手时返回的元信息
/// Metadata returned by the MCP server during initial handshake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpServerInfo {
    pub name: String,
    pub version: String,
    pub instructions: Option<String>,
}

// ============================================================================
// MCP Client Trait
// ============================================================================

/// MCP 客户端 Trait
/// MCP Client Trait
///
/// 已完成握手的远程客户端能力。桥接层只借用它，从不关闭它。
/// A remote client capability that has already completed its handshake.
/// The bridge only shares it and never closes it.
///
/// Implementations report transport and protocol failures as
/// [`BridgeError::Transport`](crate::error::BridgeError::Transport) and return
/// application-level failures as an [`McpCallResult`] with `is_error` set.
///
/// # 示例
/// # Example
///
/// ```rust,ignore
/// let tools = client.list_tools().await?;
/// for tool in &tools {
///     println!("{}: {}", tool.name, tool.description);
/// }
///
/// let mut args = serde_json::Map::new();
/// args.insert("owner".into(), json!("rust-lang"));
/// let result = client.call_tool(McpToolCall::new("list_repos", args)).await?;
/// ```
#[async_trait]
pub trait McpClient: Send + Sync {
    /// 列出远程工具的完整目录
    /// List the full remote tool catalog
    async fn list_tools(&self) -> BridgeResult<Vec<McpToolInfo>>;

    /// 调用远程工具
    /// Call a remote tool
    async fn call_tool(&self, call: McpToolCall) -> BridgeResult<McpCallResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mcp_server_config_stdio() {
        let config = McpServerConfig::stdio("test-server", "node", vec!["server.js".to_string()])
            .with_env("API_KEY", "test-key");

        assert_eq!(config.name, "test-server");

        if let McpTransportConfig::Stdio { command, args, env } = &config.transport {
            assert_eq!(command, "node");
            assert_eq!(args, &["server.js"]);
            assert_eq!(env.get("API_KEY"), Some(&"test-key".to_string()));
        } else {
            panic!("Expected Stdio transport");
        }
    }

    #[test]
    fn test_mcp_server_config_http_ignores_env() {
        let config =
            McpServerConfig::http("api-server", "http://localhost:8080/mcp").with_env("K", "V");
        assert_eq!(
            config.transport,
            McpTransportConfig::Http {
                url: "http://localhost:8080/mcp".to_string()
            }
        );
    }

    #[test]
    fn test_transport_config_tagged_deserialization() {
        let config: McpServerConfig = serde_json::from_value(json!({
            "name": "fs",
            "transport": { "type": "stdio", "command": "npx", "args": ["-y", "server"] }
        }))
        .unwrap();
        assert_eq!(
            config,
            McpServerConfig::stdio("fs", "npx", vec!["-y".into(), "server".into()])
        );
    }

    #[test]
    fn test_tool_info_from_wire_shape() {
        let tool: McpToolInfo = serde_json::from_value(json!({
            "name": "name",
            "description": "description",
            "inputSchema": {
                "type": "object",
                "properties": { "input": { "type": "string" } },
                "required": ["input"]
            }
        }))
        .unwrap();
        assert_eq!(tool.name, "name");
        assert_eq!(tool.input_schema["required"], json!(["input"]));
    }

    #[test]
    fn test_tool_info_defaults_for_missing_fields() {
        let tool: McpToolInfo =
            serde_json::from_value(json!({ "name": "name2", "description": null })).unwrap();
        assert_eq!(tool.description, "");
        assert_eq!(tool.input_schema, default_input_schema());
    }

    #[test]
    fn test_text_result_canonical_encoding() {
        let encoded = serde_json::to_string(&McpCallResult::text("hello")).unwrap();
        assert_eq!(encoded, r#"{"content":[{"type":"text","text":"hello"}]}"#);
    }

    #[test]
    fn test_error_result_keeps_is_error() {
        let encoded = serde_json::to_value(McpCallResult::error_text("boom")).unwrap();
        assert_eq!(encoded["isError"], json!(true));
    }

    #[test]
    fn test_result_ignores_annotations_and_null_is_error() {
        let result: McpCallResult = serde_json::from_value(json!({
            "content": [
                { "type": "text", "text": "a", "annotations": { "priority": 1.0 } },
                { "type": "image", "data": "aGk=", "mimeType": "image/png" },
                { "type": "text", "text": "b" }
            ],
            "isError": null
        }))
        .unwrap();
        assert!(!result.is_error);
        assert_eq!(result.content.len(), 3);
        assert_eq!(result.joined_text(), "a\nb");
    }
}
