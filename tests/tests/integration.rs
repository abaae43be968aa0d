use mcp_bridge_kernel::error::BridgeError;
use mcp_bridge_kernel::mcp::{McpCallResult, McpClient, McpToolCall};
use mcp_bridge_testing::{MockMcpClient, MockResponse};
use serde_json::json;

fn args(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    value.as_object().cloned().unwrap_or_default()
}

#[tokio::test]
async fn test_mock_client_records_calls() {
    let mock = MockMcpClient::new().with_tool("calculator", "Adds two numbers", json!({"type": "object"}));

    assert_eq!(mock.call_count().await, 0);

    let result = mock
        .call_tool(McpToolCall::new("calculator", args(json!({"a": 1, "b": 2}))))
        .await
        .unwrap();
    assert_eq!(result, McpCallResult::text("Mock Execution Default"));

    assert_eq!(mock.call_count().await, 1);
    let history = mock.history().await;
    assert_eq!(history[0].name, "calculator");
    assert_eq!(history[0].arguments["a"], json!(1));

    mcp_bridge_testing::assert_mcp_called!(mock, 1);
}

#[tokio::test]
async fn test_mock_client_lists_catalog_in_order() {
    let mock = MockMcpClient::new()
        .with_tool("b", "", json!({}))
        .with_tool("a", "", json!({}));

    let tools = mock.list_tools().await.unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a"]);
    assert_eq!(mock.list_count(), 1);
}

#[tokio::test]
async fn test_mock_client_per_tool_stubs_and_clones_share_state() {
    let mock = MockMcpClient::new();
    let shared = mock.shared();

    mock.set_default_response(MockResponse::EchoArguments).await;
    mock.set_response("broken", MockResponse::TransportFailure("reset".into()))
        .await;

    let echoed = shared
        .call_tool(McpToolCall::new("echo", args(json!({"x": "y"}))))
        .await
        .unwrap();
    assert_eq!(echoed.joined_text(), r#"{"x":"y"}"#);

    let err = shared
        .call_tool(McpToolCall::new("broken", args(json!({}))))
        .await
        .unwrap_err();
    assert!(err.is_transport());

    assert_eq!(mock.call_count().await, 2);
}

#[tokio::test]
async fn test_mock_client_list_failure() {
    let mock = MockMcpClient::new()
        .with_tool("name", "description", json!({}))
        .with_list_failure("connection refused");

    let err = mock.list_tools().await.unwrap_err();
    assert!(matches!(err, BridgeError::Transport { .. }));
    assert!(err.to_string().contains("connection refused"));
}
