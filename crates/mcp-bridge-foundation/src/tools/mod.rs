//! 工具注册
//! Tool registration

mod registry;

pub use registry::{ToolRegistry, ToolSource};
