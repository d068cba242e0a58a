//! Tool execution hosts.

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::model::{ToolCall, ToolSpec};

/// Errors that can occur during tool execution.
///
/// Serializable because failures travel back to the model inside a
/// tool-result part.
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
pub enum ToolError {
    #[error("tool not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("execution failed: {0}")]
    Execution(String),
}

/// Trait for tool execution hosts.
///
/// Implementations provide tool specifications and execute tool calls.
/// This is the boundary between the model loop and side effects.
pub trait ToolHost: Send + Sync {
    /// Get available tool specifications.
    fn specs(&self) -> &[ToolSpec];

    /// Execute a tool call.
    fn execute(&self, call: &ToolCall) -> impl Future<Output = Result<Value, ToolError>> + Send;
}

/// Tool host backed by a spawned tool server.
pub struct McpToolHost {
    client: mcp::Client,
    specs: Vec<ToolSpec>,
}

impl McpToolHost {
    /// Spawn the tool server and cache its advertised specs.
    pub async fn spawn(config: mcp::ServerConfig) -> crate::Result<Self> {
        let client = mcp::Client::spawn(config).await?;
        let specs = client.tools().iter().map(ToolSpec::from).collect();
        Ok(Self { client, specs })
    }
}

impl From<&mcp::Tool> for ToolSpec {
    fn from(tool: &mcp::Tool) -> Self {
        Self {
            name: tool.name.clone(),
            description: tool.description.clone().unwrap_or_default(),
            schema: tool.input_schema.clone(),
        }
    }
}

impl ToolHost for McpToolHost {
    fn specs(&self) -> &[ToolSpec] {
        &self.specs
    }

    async fn execute(&self, call: &ToolCall) -> Result<Value, ToolError> {
        let arguments = match &call.input {
            Value::Null => None,
            input => Some(input.clone()),
        };

        let result = self
            .client
            .call_tool(&call.name, arguments)
            .await
            .map_err(|e| ToolError::Execution(e.to_string()))?;

        let text = result
            .content
            .iter()
            .filter_map(|c| c.as_text())
            .collect::<Vec<_>>()
            .join("\n");

        Ok(Value::String(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn spec_from_wire_tool() {
        let tool = mcp::Tool {
            name: "get_stock_price".to_string(),
            description: Some("Get the current stock price for a given company".to_string()),
            input_schema: json!({"type": "object"}),
        };
        let spec = ToolSpec::from(&tool);
        assert_eq!(spec.name, "get_stock_price");
        assert!(spec.description.contains("stock price"));
    }

    #[test]
    fn missing_description_becomes_empty() {
        let tool = mcp::Tool {
            name: "hows_stocks".to_string(),
            description: None,
            input_schema: json!({"type": "object"}),
        };
        assert_eq!(ToolSpec::from(&tool).description, "");
    }
}
