//! MCP 工具目录获取
//! MCP Tool Catalog Fetching
//!
//! 一次列出远程目录，再按名称过滤。
//! Lists the remote catalog once, then narrows it by name.

use mcp_bridge_kernel::error::BridgeResult;
use mcp_bridge_kernel::mcp::{McpClient, McpToolInfo};
use std::collections::HashSet;

/// 获取远程工具目录并按名称过滤
/// Fetch the remote tool catalog and narrow it by name
///
/// An empty `tool_name_list` keeps every tool. Otherwise only tools whose
/// name is listed (exact match) are kept, in catalog order. Listing errors
/// are returned unchanged and no partial catalog is produced.
pub async fn fetch_tools(
    client: &dyn McpClient,
    tool_name_list: &[String],
) -> BridgeResult<Vec<McpToolInfo>> {
    let catalog = client.list_tools().await?;
    tracing::debug!("Remote MCP catalog lists {} tool(s)", catalog.len());

    let selected = select_tools(catalog, tool_name_list);
    tracing::info!("Selected {} MCP tool(s)", selected.len());

    Ok(selected)
}

/// 按名称过滤目录 (同名工具保留首个)
/// Narrow a catalog by name (first tool wins on duplicate names)
pub fn select_tools(catalog: Vec<McpToolInfo>, tool_name_list: &[String]) -> Vec<McpToolInfo> {
    let wanted: HashSet<&str> = tool_name_list.iter().map(String::as_str).collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(catalog.len());
    let mut selected = Vec::new();

    for tool in catalog {
        if !seen.insert(tool.name.clone()) {
            tracing::warn!(
                "MCP catalog lists tool '{}' more than once; keeping the first entry",
                tool.name
            );
            continue;
        }
        if !wanted.is_empty() && !wanted.contains(tool.name.as_str()) {
            continue;
        }
        selected.push(tool);
    }

    for name in &wanted {
        if !seen.contains(*name) {
            tracing::debug!("Requested MCP tool '{}' is not in the remote catalog", name);
        }
    }

    selected
}
