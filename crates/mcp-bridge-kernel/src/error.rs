//! 桥接错误类型定义
//!
//! Error types shared by every layer of the bridge.
//!
//! Failures are reported upward unchanged; each variant only adds the
//! operation or tool name needed to make the message actionable.

use thiserror::Error;

/// 桥接操作结果类型
pub type BridgeResult<T> = Result<T, BridgeError>;

/// 桥接错误类型
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BridgeError {
    /// 远程调用未能完成 (连接、协议帧、服务端故障)
    /// The remote call could not complete (connection, framing, server fault).
    #[error("Transport error during {operation}: {message}")]
    Transport { operation: String, message: String },

    /// 调用参数不是合法的 JSON 对象
    /// The invocation payload is not a JSON object.
    #[error("Invalid arguments for tool '{tool_name}': {message}")]
    ArgumentDecode { tool_name: String, message: String },

    /// 远程工具返回 isError
    /// The remote tool reported an application-level failure.
    #[error("MCP tool '{tool_name}' returned an error: {detail}")]
    RemoteInvocation { tool_name: String, detail: String },

    /// 配置错误
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 序列化错误
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BridgeError {
    /// 创建传输错误
    pub fn transport(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// 创建参数解码错误
    pub fn argument_decode(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ArgumentDecode {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }

    /// 创建远程调用错误
    pub fn remote_invocation(tool_name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::RemoteInvocation {
            tool_name: tool_name.into(),
            detail: detail.into(),
        }
    }

    /// Whether the failure happened below the protocol's application layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// The tool this error is about, if it is tool-scoped.
    pub fn tool_name(&self) -> Option<&str> {
        match self {
            Self::ArgumentDecode { tool_name, .. } | Self::RemoteInvocation { tool_name, .. } => {
                Some(tool_name)
            }
            _ => None,
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Serialization(err.to_string())
    }
}

#[cfg(feature = "config")]
impl From<crate::config::ConfigError> for BridgeError {
    fn from(err: crate::config::ConfigError) -> Self {
        BridgeError::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BridgeError::transport("tools/list", "connection reset");
        assert_eq!(
            err.to_string(),
            "Transport error during tools/list: connection reset"
        );
        assert!(err.is_transport());
        assert_eq!(err.tool_name(), None);
    }

    #[test]
    fn test_tool_scoped_errors() {
        let err = BridgeError::argument_decode("search", "expected value at line 1 column 1");
        assert_eq!(err.tool_name(), Some("search"));
        assert!(err.to_string().contains("search"));

        let err = BridgeError::remote_invocation("search", r#"{"content":[],"isError":true}"#);
        assert_eq!(err.tool_name(), Some("search"));
        assert!(err.to_string().contains("isError"));
        assert!(!err.is_transport());
    }

    #[test]
    fn test_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: BridgeError = parse_err.into();
        assert!(matches!(err, BridgeError::Serialization(_)));
    }
}
