//! Chat-completion runtime — model types, backends, and tool hosting.
//!
//! The runtime is organized around these concepts:
//!
//! - **Backend**: a trait abstracting chat-completion providers
//!   ([`AnthropicBackend`] is the one shipped).
//! - **ToolHost**: a trait supplying tool specifications and executing tool
//!   calls; [`McpToolHost`] bridges to a spawned tool server.
//! - **ChatClient**: a one-shot prompt entry point that runs the tool-use
//!   loop until the model produces text.
//!
//! # Example
//!
//! ```ignore
//! use runtime::{AnthropicBackend, ChatClient, McpToolHost};
//!
//! # async fn example() -> runtime::Result<()> {
//! let backend = AnthropicBackend::builder("sk-ant-api01-...", "claude-sonnet-4-20250514").build();
//! let tools = McpToolHost::spawn(mcp::ServerConfig {
//!     name: "quotes".into(),
//!     command: "stockd".into(),
//!     args: vec![],
//!     env: Default::default(),
//! })
//! .await?;
//!
//! let client = ChatClient::new(backend, tools);
//! let answer = client.prompt("Gimme SAP company stock price?", "Be precise.").await?;
//! println!("{answer}");
//! # Ok(())
//! # }
//! ```

mod anthropic;
mod chat;
mod error;
mod model;
mod tools;

pub use anthropic::{AnthropicBackend, AnthropicBackendBuilder};
pub use chat::ChatClient;
pub use error::{Error, Result};
pub use model::{
    Backend, Message, ModelRequest, ModelResponse, Part, Role, ToolCall, ToolResult, ToolSpec,
    Usage,
};
pub use tools::{McpToolHost, ToolError, ToolHost};
