//! Hearth service entry point: load the lookup tables once, then serve
//! the scoring API.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hearth::api::{AppState, router};
use hearth::data::LookupTables;

/// Serve the housing-affordability scoring API.
#[derive(Debug, Parser)]
#[command(name = "hearth", version, about)]
struct Args {
    /// Directory holding the lookup tables (crosswalk, score and
    /// factor CSVs, description map).
    #[arg(long, env = "HEARTH_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Socket address to bind.
    #[arg(long, env = "HEARTH_BIND_ADDR", default_value = "0.0.0.0:8000")]
    bind_addr: SocketAddr,
}

/// Startup configuration, built once in `main` and passed explicitly.
/// Nothing below this layer reads the environment.
#[derive(Debug, Clone)]
struct ServerConfig {
    data_dir: PathBuf,
    bind_addr: SocketAddr,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            data_dir: args.data_dir,
            bind_addr: args.bind_addr,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from(Args::parse());

    let tables = LookupTables::load(&config.data_dir)?;
    let app = router(AppState {
        tables: Arc::new(tables),
    });

    info!("listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
