//! Tool boundary between a chat-completion client and a tool server.
//!
//! Tools are named, described functions a model may invoke while composing a
//! response. This crate implements both ends of that boundary over
//! newline-delimited JSON-RPC 2.0 on a child process's stdio:
//!
//! - [`Client`] spawns a tool server, performs the handshake, and exposes
//!   `tools/list` + `tools/call`.
//! - [`serve`] runs a [`ToolHandler`] as the server side of the same wire.
//!
//! # Example
//!
//! ```no_run
//! use mcp::{Client, ServerConfig};
//! use std::collections::HashMap;
//!
//! # async fn example() -> mcp::Result<()> {
//! let config = ServerConfig {
//!     name: "quotes".to_string(),
//!     command: "stockd".to_string(),
//!     args: vec![],
//!     env: HashMap::new(),
//! };
//!
//! let client = Client::spawn(config).await?;
//! for tool in client.tools() {
//!     println!("Tool: {}", tool.name);
//! }
//!
//! let result = client.call_tool("get_stock_price", Some(serde_json::json!({
//!     "company": "SAP"
//! }))).await?;
//!
//! client.shutdown().await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod protocol;
mod service;

pub use client::{Client, DEFAULT_TIMEOUT, MAX_OUTPUT_SIZE, ServerConfig};
pub use error::{Error, Result};
pub use protocol::{
    CallToolParams, CallToolResult, InitializeParams, InitializeResult, JsonRpcError,
    JsonRpcRequest, JsonRpcResponse, ListToolsResult, PROTOCOL_VERSION, RequestId,
    ServerCapabilities, ServerInfo, Tool, ToolContent,
};
pub use service::{ToolHandler, serve, serve_io};
