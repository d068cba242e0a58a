//! One-shot chat with tool use.

use crate::error::{Error, Result};
use crate::model::{Backend, Message, ModelRequest, ToolResult};
use crate::tools::ToolHost;

/// Upper bound on model→tool→model rounds for a single prompt.
const MAX_TOOL_ROUNDS: usize = 8;

/// A chat-completion client configured with a tool host.
///
/// Holds no per-request state: every [`prompt`](ChatClient::prompt) builds a
/// fresh one-shot conversation, so one instance can be shared across
/// concurrent requests.
pub struct ChatClient<B, H> {
    backend: B,
    tools: H,
    max_tool_rounds: usize,
}

impl<B: Backend, H: ToolHost> ChatClient<B, H> {
    pub fn new(backend: B, tools: H) -> Self {
        Self {
            backend,
            tools,
            max_tool_rounds: MAX_TOOL_ROUNDS,
        }
    }

    /// Submit a user prompt with a system instruction and return the model's
    /// final text.
    ///
    /// While the model keeps requesting tools, each call is executed against
    /// the tool host and its result fed back before asking the model again.
    pub async fn prompt(&self, user: &str, system: &str) -> Result<String> {
        let mut messages = vec![Message::user(user)];

        for _ in 0..self.max_tool_rounds {
            let response = self
                .backend
                .call(ModelRequest {
                    system: Some(system),
                    messages: &messages,
                    tools: self.tools.specs(),
                })
                .await?;

            let calls = response.message.tool_calls();
            if calls.is_empty() {
                return Ok(response.message.text());
            }

            messages.push(response.message);

            let mut results = Vec::with_capacity(calls.len());
            for call in calls {
                tracing::debug!(tool = %call.name, "executing tool call");
                let result = match self.tools.execute(&call).await {
                    Ok(output) => ToolResult::Success {
                        tool_call_id: call.id,
                        output,
                    },
                    Err(error) => {
                        tracing::warn!(tool = %call.name, error = %error, "tool call failed");
                        ToolResult::Failure {
                            tool_call_id: call.id,
                            error,
                        }
                    }
                };
                results.push(result);
            }
            messages.push(Message::tool_results(results));
        }

        Err(Error::ToolRoundsExceeded(self.max_tool_rounds))
    }
}
