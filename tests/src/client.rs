use async_trait::async_trait;
use mcp_bridge_kernel::error::{BridgeError, BridgeResult};
use mcp_bridge_kernel::mcp::{McpCallResult, McpClient, McpToolCall, McpToolInfo};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// How the mock answers a `tools/call`.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this result as-is (set `is_error` to simulate a tool failure).
    Result(McpCallResult),
    /// Return the call's arguments serialized as a single text part.
    EchoArguments,
    /// Fail the way a broken connection would.
    TransportFailure(String),
    /// Never answer; the caller has to cancel.
    Hang,
}

/// An in-memory MCP server stand-in
///
/// Serves a fixed catalog, answers calls with stubbed responses (per tool or
/// a default) and records every call it receives. Clones share state, so a
/// test can keep one handle while the bridge holds another.
#[derive(Clone)]
pub struct MockMcpClient {
    catalog: Vec<McpToolInfo>,
    list_failure: Option<String>,
    tool_responses: Arc<RwLock<HashMap<String, MockResponse>>>,
    default_response: Arc<RwLock<MockResponse>>,
    /// Track all calls made through this client
    pub call_history: Arc<RwLock<Vec<McpToolCall>>>,
    list_count: Arc<AtomicUsize>,
}

impl Default for MockMcpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMcpClient {
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            list_failure: None,
            tool_responses: Arc::new(RwLock::new(HashMap::new())),
            default_response: Arc::new(RwLock::new(MockResponse::Result(McpCallResult::text(
                "Mock Execution Default",
            )))),
            call_history: Arc::new(RwLock::new(Vec::new())),
            list_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Adds a catalog entry. Entries are listed in insertion order.
    pub fn with_tool(mut self, name: &str, description: &str, input_schema: Value) -> Self {
        self.catalog
            .push(McpToolInfo::new(name, description, input_schema));
        self
    }

    pub fn with_tools(mut self, tools: impl IntoIterator<Item = McpToolInfo>) -> Self {
        self.catalog.extend(tools);
        self
    }

    /// Makes every `tools/list` fail with a transport error.
    pub fn with_list_failure(mut self, message: &str) -> Self {
        self.list_failure = Some(message.to_string());
        self
    }

    /// Sets the response for tools without a specific stub.
    pub async fn set_default_response(&self, response: MockResponse) {
        *self.default_response.write().await = response;
    }

    /// Sets the response for one tool.
    pub async fn set_response(&self, tool_name: &str, response: MockResponse) {
        self.tool_responses
            .write()
            .await
            .insert(tool_name.to_string(), response);
    }

    /// Retrieve the history of calls made to this client
    pub async fn history(&self) -> Vec<McpToolCall> {
        self.call_history.read().await.clone()
    }

    /// Total number of `tools/call` requests received
    pub async fn call_count(&self) -> usize {
        self.call_history.read().await.len()
    }

    /// Total number of `tools/list` requests received
    pub fn list_count(&self) -> usize {
        self.list_count.load(Ordering::SeqCst)
    }

    /// A shareable handle for the bridge
    pub fn shared(&self) -> Arc<dyn McpClient> {
        Arc::new(self.clone())
    }
}

#[async_trait]
impl McpClient for MockMcpClient {
    async fn list_tools(&self) -> BridgeResult<Vec<McpToolInfo>> {
        self.list_count.fetch_add(1, Ordering::SeqCst);
        match &self.list_failure {
            Some(message) => Err(BridgeError::transport("tools/list", message.clone())),
            None => Ok(self.catalog.clone()),
        }
    }

    async fn call_tool(&self, call: McpToolCall) -> BridgeResult<McpCallResult> {
        self.call_history.write().await.push(call.clone());

        let stubbed = self.tool_responses.read().await.get(&call.name).cloned();
        let response = match stubbed {
            Some(response) => response,
            None => self.default_response.read().await.clone(),
        };

        match response {
            MockResponse::Result(result) => Ok(result),
            MockResponse::EchoArguments => Ok(McpCallResult::text(
                Value::Object(call.arguments).to_string(),
            )),
            MockResponse::TransportFailure(message) => Err(BridgeError::transport(
                "tools/call",
                format!("{}: {}", call.name, message),
            )),
            MockResponse::Hang => std::future::pending().await,
        }
    }
}

#[macro_export]
macro_rules! assert_mcp_called {
    ($client:expr, $expected_count:expr) => {
        let count = $client.call_count().await;
        assert_eq!(
            count, $expected_count,
            "Expected {} MCP tool call(s), but {} were made",
            $expected_count, count
        );
    };
}
