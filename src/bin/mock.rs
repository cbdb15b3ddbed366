//! MacroLens Mock Analysis Server
//!
//! Run with: cargo run --bin macrolens-mock
//!
//! # Configuration
//!
//! Read from the config file (`[mock]` and `[server]` sections), then:
//! - `MACROLENS_MOCK_HOST`: Host to bind to (default: 127.0.0.1)
//! - `MACROLENS_MOCK_PORT`: Port to listen on (default: 5000)
//! - `MACROLENS_ANALYZE_PATH`: Route for uploads (default: /analyze-image)
//! - `RUST_LOG`: Log filter (default: macrolens=info)

use clap::Parser;
use std::path::PathBuf;

use macrolens::config::Config;

#[derive(Parser)]
#[command(name = "macrolens-mock")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Local stand-in for the meal analysis server")]
struct Args {
    /// Config file (default: search the usual locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file with the analysis response to serve
    #[arg(short, long)]
    fixture: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(fixture) = args.fixture {
        config.mock.fixture = Some(fixture.to_string_lossy().to_string());
    }
    if let Some(port) = args.port {
        config.mock.port = port;
    }

    macrolens::telemetry::init(&config.logging)?;

    tracing::info!("Starting MacroLens mock server v{}", env!("CARGO_PKG_VERSION"));
    match &config.mock.fixture {
        Some(fixture) => tracing::info!("Serving fixture {}", fixture),
        None => tracing::info!("Serving built-in sample response"),
    }

    macrolens::mock::serve(&config.mock, &config.server).await?;

    tracing::info!("MacroLens mock server stopped");
    Ok(())
}
