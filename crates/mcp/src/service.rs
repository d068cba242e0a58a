//! Server side of the boundary: the stdio serve loop.
//!
//! A tool server reads newline-delimited JSON-RPC requests from stdin and
//! writes responses to stdout. Anything else a server wants to say (logs,
//! diagnostics) must go to stderr or the framing breaks.

use std::future::Future;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::error::Result;
use crate::protocol::{
    CallToolParams, CallToolResult, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, PROTOCOL_VERSION, ServerCapabilities, ServerInfo, Tool,
    ToolsCapability,
};

/// The functions a tool server exposes over the boundary.
///
/// `call` is total: failures are expressed as `is_error` results, never as
/// protocol faults.
pub trait ToolHandler: Send + Sync {
    /// The tool descriptors advertised by `tools/list`.
    fn tools(&self) -> Vec<Tool>;

    /// Execute a tool by name.
    fn call(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> impl Future<Output = CallToolResult> + Send;
}

/// Serve a handler over this process's stdin/stdout until EOF or `shutdown`.
pub async fn serve<H: ToolHandler>(handler: H, info: ServerInfo) -> Result<()> {
    serve_io(&handler, &info, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Serve over arbitrary reader/writer halves (tests use an in-memory duplex).
pub async fn serve_io<H, R, W>(handler: &H, info: &ServerInfo, reader: R, writer: W) -> Result<()>
where
    H: ToolHandler,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut writer = writer;
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            // EOF: the client hung up
            return Ok(());
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let request: JsonRpcRequest = match serde_json::from_str(trimmed) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed request line");
                continue;
            }
        };

        if request.method == "shutdown" {
            tracing::info!("shutdown requested");
            return Ok(());
        }

        if let Some(response) = dispatch(handler, info, request).await {
            let json = serde_json::to_string(&response)?;
            writer.write_all(json.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }
}

async fn dispatch<H: ToolHandler>(
    handler: &H,
    info: &ServerInfo,
    request: JsonRpcRequest,
) -> Option<JsonRpcResponse> {
    let Some(id) = request.id else {
        // Notifications expect no response
        if request.method != "notifications/initialized" {
            tracing::debug!(method = %request.method, "ignoring notification");
        }
        return None;
    };

    let response = match request.method.as_str() {
        "initialize" => {
            let result = InitializeResult {
                protocol_version: PROTOCOL_VERSION.to_string(),
                capabilities: ServerCapabilities {
                    tools: Some(ToolsCapability {
                        list_changed: false,
                    }),
                },
                server_info: info.clone(),
            };
            JsonRpcResponse::success(
                id,
                serde_json::to_value(result).unwrap_or(Value::Null),
            )
        }
        "tools/list" => {
            let result = ListToolsResult {
                tools: handler.tools(),
            };
            JsonRpcResponse::success(
                id,
                serde_json::to_value(result).unwrap_or(Value::Null),
            )
        }
        "tools/call" => {
            let params: CallToolParams =
                match serde_json::from_value(request.params.unwrap_or(Value::Null)) {
                    Ok(params) => params,
                    Err(e) => {
                        return Some(JsonRpcResponse::failure(
                            id,
                            JsonRpcError::invalid_params(e.to_string()),
                        ));
                    }
                };

            tracing::debug!(tool = %params.name, "tool call");
            let result = handler.call(&params.name, params.arguments).await;
            JsonRpcResponse::success(
                id,
                serde_json::to_value(result).unwrap_or(Value::Null),
            )
        }
        method => JsonRpcResponse::failure(id, JsonRpcError::method_not_found(method)),
    };

    Some(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::AsyncWriteExt;

    struct EchoTools;

    impl ToolHandler for EchoTools {
        fn tools(&self) -> Vec<Tool> {
            vec![Tool {
                name: "echo".to_string(),
                description: Some("Echo the input back".to_string()),
                input_schema: json!({
                    "type": "object",
                    "properties": {"text": {"type": "string"}},
                    "required": ["text"]
                }),
            }]
        }

        async fn call(&self, name: &str, arguments: Option<Value>) -> CallToolResult {
            match name {
                "echo" => {
                    let text = arguments
                        .as_ref()
                        .and_then(|a| a.get("text"))
                        .and_then(Value::as_str)
                        .unwrap_or_default();
                    CallToolResult::text(text)
                }
                other => CallToolResult::error(format!("unknown tool: {other}")),
            }
        }
    }

    fn info() -> ServerInfo {
        ServerInfo {
            name: "echo-server".to_string(),
            version: Some("0.0.0".to_string()),
        }
    }

    async fn round_trip(request: Value) -> JsonRpcResponse {
        let request = serde_json::from_value(request).unwrap();
        dispatch(&EchoTools, &info(), request).await.unwrap()
    }

    #[tokio::test]
    async fn initialize_reports_tools_capability() {
        let response =
            round_trip(json!({"jsonrpc": "2.0", "id": 1, "method": "initialize"})).await;
        let result: InitializeResult = serde_json::from_value(response.into_result().unwrap()).unwrap();
        assert_eq!(result.protocol_version, PROTOCOL_VERSION);
        assert!(result.capabilities.tools.is_some());
        assert_eq!(result.server_info.name, "echo-server");
    }

    #[tokio::test]
    async fn lists_and_calls_tools() {
        let response =
            round_trip(json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})).await;
        let listed: ListToolsResult = serde_json::from_value(response.into_result().unwrap()).unwrap();
        assert_eq!(listed.tools.len(), 1);
        assert_eq!(listed.tools[0].name, "echo");

        let response = round_trip(json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {"name": "echo", "arguments": {"text": "hello"}}
        }))
        .await;
        let result: CallToolResult = serde_json::from_value(response.into_result().unwrap()).unwrap();
        assert!(!result.is_error);
        assert_eq!(result.content[0].as_text(), Some("hello"));
    }

    #[tokio::test]
    async fn unknown_method_is_rejected() {
        let response =
            round_trip(json!({"jsonrpc": "2.0", "id": 4, "method": "resources/list"})).await;
        let error = response.into_result().unwrap_err();
        assert_eq!(error.code, JsonRpcError::METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error_result_not_a_fault() {
        let response = round_trip(json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "tools/call",
            "params": {"name": "no_such_tool"}
        }))
        .await;
        let result: CallToolResult = serde_json::from_value(response.into_result().unwrap()).unwrap();
        assert!(result.is_error);
    }

    #[tokio::test]
    async fn serve_loop_over_duplex_shuts_down_cleanly() {
        let (client_io, server_io) = tokio::io::duplex(64 * 1024);
        let (server_read, server_write) = tokio::io::split(server_io);

        let server = tokio::spawn(async move {
            serve_io(&EchoTools, &info(), server_read, server_write).await
        });

        let (client_read, mut client_write) = tokio::io::split(client_io);
        let mut client_read = BufReader::new(client_read);

        client_write
            .write_all(b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"tools/list\"}\n")
            .await
            .unwrap();

        let mut line = String::new();
        client_read.read_line(&mut line).await.unwrap();
        let response: JsonRpcResponse = serde_json::from_str(&line).unwrap();
        assert!(response.error.is_none());

        // Malformed line is skipped, not fatal
        client_write.write_all(b"not json\n").await.unwrap();

        client_write
            .write_all(b"{\"jsonrpc\":\"2.0\",\"method\":\"shutdown\"}\n")
            .await
            .unwrap();

        server.await.unwrap().unwrap();
    }
}
