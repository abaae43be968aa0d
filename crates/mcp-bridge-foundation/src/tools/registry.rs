//! 统一工具注册中心
//!
//! 整合 MCP 工具与动态注册工具的有序注册中心

use crate::mcp::{McpToolsConfig, get_tools};
use mcp_bridge_kernel::error::{BridgeError, BridgeResult};
use mcp_bridge_kernel::tool::{LLMTool, Tool, ToolInfo};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// 统一工具注册中心
///
/// 按注册顺序保存工具，名称唯一。
///
/// # 示例
///
/// ```rust,ignore
/// use mcp_bridge_foundation::tools::ToolRegistry;
///
/// let mut registry = ToolRegistry::new();
///
/// // 注册 MCP 服务器的工具
/// registry.load_mcp_tools("filesystem", &McpToolsConfig::new(client)).await?;
///
/// // 列出所有工具
/// for tool in registry.list() {
///     info!("{}: {}", tool.name, tool.description);
/// }
/// ```
#[derive(Default)]
pub struct ToolRegistry {
    /// 工具存储 (注册顺序)
    tools: Vec<Arc<dyn Tool>>,
    /// 工具来源
    sources: HashMap<String, ToolSource>,
}

/// 工具来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolSource {
    /// MCP 服务器
    Mcp { server: String },
    /// 动态注册
    Dynamic,
}

impl ToolRegistry {
    /// 创建新的注册中心
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册工具 (来源记为动态)
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> BridgeResult<()> {
        self.register_with_source(tool, ToolSource::Dynamic)
    }

    /// 注册工具并记录来源
    pub fn register_with_source(&mut self, tool: Arc<dyn Tool>, source: ToolSource) -> BridgeResult<()> {
        let name = tool.name().to_string();
        if self.sources.contains_key(&name) {
            return Err(BridgeError::Configuration(format!(
                "Tool '{}' is already registered",
                name
            )));
        }
        self.sources.insert(name, source);
        self.tools.push(tool);
        Ok(())
    }

    /// 加载 MCP 服务器的工具
    ///
    /// Either every projected tool is registered or none is.
    pub async fn load_mcp_tools(
        &mut self,
        server: &str,
        config: &McpToolsConfig,
    ) -> BridgeResult<Vec<String>> {
        let tools = get_tools(config).await?;

        let mut incoming = HashSet::with_capacity(tools.len());
        for tool in &tools {
            if self.sources.contains_key(tool.name()) || !incoming.insert(tool.name()) {
                return Err(BridgeError::Configuration(format!(
                    "Tool '{}' from MCP server '{}' conflicts with a registered tool",
                    tool.name(),
                    server
                )));
            }
        }

        let names: Vec<String> = tools.iter().map(|t| t.name().to_string()).collect();
        for tool in tools {
            self.register_with_source(
                tool,
                ToolSource::Mcp {
                    server: server.to_string(),
                },
            )?;
        }

        tracing::info!(
            "Registered {} tool(s) from MCP server '{}'",
            names.len(),
            server
        );
        Ok(names)
    }

    /// 卸载 MCP 服务器的工具
    pub fn unload_mcp_tools(&mut self, server: &str) -> Vec<String> {
        let to_remove: Vec<String> = self
            .tools
            .iter()
            .map(|t| t.name().to_string())
            .filter(|name| {
                matches!(self.sources.get(name), Some(ToolSource::Mcp { server: s }) if s == server)
            })
            .collect();

        self.tools.retain(|t| !to_remove.iter().any(|n| n == t.name()));
        for name in &to_remove {
            self.sources.remove(name);
        }

        to_remove
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.name() == name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    pub fn count(&self) -> usize {
        self.tools.len()
    }

    /// 获取工具来源
    pub fn get_source(&self, name: &str) -> Option<&ToolSource> {
        self.sources.get(name)
    }

    /// 列出所有工具 (注册顺序)
    pub fn list(&self) -> Vec<ToolInfo> {
        self.tools.iter().map(|t| t.info()).collect()
    }

    pub fn list_names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name().to_string()).collect()
    }

    /// 按来源过滤工具
    pub fn filter_by_source(&self, source_type: &str) -> Vec<ToolInfo> {
        self.tools
            .iter()
            .filter(|t| match self.sources.get(t.name()) {
                Some(ToolSource::Mcp { .. }) => source_type == "mcp",
                Some(ToolSource::Dynamic) => source_type == "dynamic",
                None => false,
            })
            .map(|t| t.info())
            .collect()
    }

    /// 转换为 LLM Tools
    pub fn to_llm_tools(&self) -> Vec<LLMTool> {
        self.tools.iter().map(|t| t.to_llm_tool()).collect()
    }

    /// 按名称调用工具
    pub async fn invoke(&self, name: &str, arguments: &str) -> BridgeResult<String> {
        let tool = self
            .get(name)
            .ok_or_else(|| BridgeError::Configuration(format!("Tool '{}' is not registered", name)))?;
        tool.invoke(arguments).await
    }
}
