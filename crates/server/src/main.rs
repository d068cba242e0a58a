use mcp::ServerInfo;
use quotes::StockTools;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> mcp::Result<()> {
    // stdout carries the protocol; logging must stay on stderr
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let info = ServerInfo {
        name: "stockd".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    };

    tracing::info!("serving stock tools over stdio");
    mcp::serve(StockTools, info).await
}
