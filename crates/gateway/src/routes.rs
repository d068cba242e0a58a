//! The HTTP surface: three endpoints over one shared chat client.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use runtime::{AnthropicBackend, ChatClient, McpToolHost};

const NO_REPEAT_INSTRUCTION: &str = "do not repeat the answer";
const PRECISE_INSTRUCTION: &str = "Be precise.";

const GREETING_PROMPT: &str = "how are you doing?";
const SAP_PRICE_PROMPT: &str = "Gimme SAP company stock price?";

/// Shared router state.
pub type App = Arc<ChatClient<AnthropicBackend, McpToolHost>>;

pub fn router(app: App, cors: CorsLayer) -> Router {
    Router::new()
        .route("/1", get(greeting))
        .route("/2", get(sap_price))
        .route("/chat", post(chat))
        .layer(cors)
        .with_state(app)
}

async fn greeting(State(app): State<App>) -> Result<String, AppError> {
    Ok(app.prompt(GREETING_PROMPT, NO_REPEAT_INSTRUCTION).await?)
}

async fn sap_price(State(app): State<App>) -> Result<String, AppError> {
    Ok(app.prompt(SAP_PRICE_PROMPT, PRECISE_INSTRUCTION).await?)
}

async fn chat(State(app): State<App>, body: String) -> Result<String, AppError> {
    Ok(app.prompt(&body, NO_REPEAT_INSTRUCTION).await?)
}

/// Upstream failures surface to the caller as a bare 500; the detail only
/// goes to the log.
struct AppError(runtime::Error);

impl From<runtime::Error> for AppError {
    fn from(error: runtime::Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "chat request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_a_generic_500() {
        let response = AppError(runtime::Error::Api("429: overloaded".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
