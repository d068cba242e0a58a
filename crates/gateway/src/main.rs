mod config;
mod error;
mod routes;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use axum::http::{HeaderValue, Method, header};
use clap::Parser;
use tower_http::cors::CorsLayer;

use config::Config;
use error::{Error, Result};
use runtime::{AnthropicBackend, ChatClient, McpToolHost, ToolHost};

#[derive(Parser)]
#[command(name = "stockgw")]
#[command(about = "HTTP gateway for the stock chat demo", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "stockgw.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let config = if cli.config.exists() {
        tracing::info!(path = %cli.config.display(), "loading config");
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    let api_key = config.api_key()?;
    let backend = AnthropicBackend::builder(api_key, &config.backend.model)
        .max_tokens(config.backend.max_tokens)
        .build();
    tracing::info!(model = %config.backend.model, "backend ready");

    let tools = McpToolHost::spawn(mcp::ServerConfig {
        name: "quotes".to_string(),
        command: config.tools.command.clone(),
        args: config.tools.args.clone(),
        env: HashMap::new(),
    })
    .await?;

    let tool_names: Vec<&str> = tools.specs().iter().map(|s| s.name.as_str()).collect();
    tracing::info!(tools = ?tool_names, "tool server ready");

    let app = Arc::new(ChatClient::new(backend, tools));
    let cors = cors_layer(config.http.cors_origin.as_deref())?;

    let listener = tokio::net::TcpListener::bind(&config.http.bind).await?;
    tracing::info!("listening on http://{}", config.http.bind);
    axum::serve(listener, routes::router(app, cors)).await?;

    Ok(())
}

/// Cross-origin access is only granted to the one configured development
/// origin; no origin configured means no CORS headers at all.
fn cors_layer(origin: Option<&str>) -> Result<CorsLayer> {
    let Some(origin) = origin else {
        return Ok(CorsLayer::new());
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| Error::InvalidCorsOrigin(origin.to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_cors_origin() {
        let err = cors_layer(Some("not\na\nheader")).unwrap_err();
        assert!(matches!(err, Error::InvalidCorsOrigin(_)));
    }

    #[test]
    fn accepts_the_default_dev_origin() {
        assert!(cors_layer(Some("http://localhost:3000")).is_ok());
        assert!(cors_layer(None).is_ok());
    }
}
