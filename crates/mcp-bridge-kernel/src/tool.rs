//! 工具组件
//! Tool Component
//!
//! 宿主框架看到的工具接口：元数据访问与序列化调用。
//! The tool interface seen by the host framework: metadata access and
//! serialized invocation.

use crate::error::BridgeResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// 统一工具 Trait
/// Unified Tool Trait
///
/// Arguments and results cross this boundary as JSON text so the host does
/// not need per-tool types.
///
/// # 示例
/// # Example
///
/// ```rust,ignore
/// use mcp_bridge_kernel::tool::Tool;
///
/// struct Echo;
///
/// #[async_trait]
/// impl Tool for Echo {
///     fn name(&self) -> &str { "echo" }
///     fn description(&self) -> &str { "Echo the input back" }
///     fn parameters_schema(&self) -> serde_json::Value {
///         serde_json::json!({ "type": "object" })
///     }
///     async fn invoke(&self, arguments: &str) -> BridgeResult<String> {
///         Ok(arguments.to_string())
///     }
/// }
/// ```
#[async_trait]
pub trait Tool: Send + Sync {
    /// 工具名称 (唯一标识符)
    /// Tool name (unique identifier)
    fn name(&self) -> &str;

    /// 工具描述 (用于 LLM 理解)
    /// Tool description (for LLM understanding)
    fn description(&self) -> &str;

    /// 参数 JSON Schema
    /// Parameters JSON Schema
    fn parameters_schema(&self) -> serde_json::Value;

    /// 以 JSON 文本调用工具，返回 JSON 文本结果
    /// Invoke the tool with JSON text arguments, returning a JSON text result
    async fn invoke(&self, arguments: &str) -> BridgeResult<String>;

    /// 工具元数据
    /// Tool metadata
    fn info(&self) -> ToolInfo {
        ToolInfo {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters_schema: self.parameters_schema(),
        }
    }

    /// 转换为 LLM Tool 格式
    /// Convert to LLM Tool format
    fn to_llm_tool(&self) -> LLMTool {
        LLMTool {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}

/// 工具元数据记录
/// Tool metadata record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub parameters_schema: serde_json::Value,
}

/// LLM Tool 格式 (用于 API 调用)
/// LLM Tool format (for API calls)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LLMTool {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}
