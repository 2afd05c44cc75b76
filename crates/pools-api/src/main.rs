use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, LevelFilter};
use pools_api::{start_server, PoolRepository, PoolStore, ResponseDelay};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
struct Args {
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port
    #[arg(short = 'P', long, default_value = "3000")]
    port: u16,

    /// JSON file with the pool dataset. Uses the built-in dataset if not provided.
    #[arg(short = 'f', long)]
    fixture: Option<PathBuf>,

    /// Delay before answering list requests, in milliseconds
    #[arg(long, default_value = "500")]
    list_delay_ms: u64,

    /// Delay before answering detail requests, in milliseconds
    #[arg(long, default_value = "300")]
    detail_delay_ms: u64,

    /// Log level
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();
    debug!("Log level: {log_level}");

    let store = match &args.fixture {
        Some(path) => PoolStore::from_file(path)
            .with_context(|| format!("failed to load fixture {}", path.display()))?,
        None => PoolStore::with_mock_pools(),
    };
    info!("Serving {} pools", store.len());
    let pool_store: Arc<dyn PoolRepository> = Arc::new(store);

    let delay = ResponseDelay {
        list: Duration::from_millis(args.list_delay_ms),
        detail: Duration::from_millis(args.detail_delay_ms),
    };

    start_server(&args.host, args.port, pool_store, delay).await
}
