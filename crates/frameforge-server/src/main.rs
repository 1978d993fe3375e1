use anyhow::Context;
use clap::{CommandFactory, FromArgMatches, Parser};
use frameforge_core::catalog::HardwareCatalog;
use frameforge_core::config::ModelParams;
use frameforge_server::build_router;
use frameforge_server::state::AppState;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Catalog directory. Built-in data when absent or missing.
    #[arg(long, short)]
    data: Option<PathBuf>,

    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// JSON file overriding model params. Explicit flags still win.
    #[arg(long)]
    params: Option<PathBuf>,

    #[command(flatten)]
    model: ModelParams,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    info!("🎮 FrameForge server is initializing...");

    let params = match &args.params {
        Some(path) => {
            info!("⚖️  Loading model params from: {:?}", path);
            let mut params = ModelParams::load_from_file(path).map_err(anyhow::Error::msg)?;
            params.merge_from_cli(&args.model, &matches);
            params
        }
        None => args.model.clone(),
    };
    params.validate().map_err(anyhow::Error::msg)?;

    let catalog = HardwareCatalog::load_or_builtin(args.data.as_deref())
        .context("Failed to load hardware catalogs")?;
    info!(
        "📦 Catalog ready: {} CPUs, {} GPUs, {} games",
        catalog.cpus.len(),
        catalog.gpus.len(),
        catalog.games.len()
    );

    let state = Arc::new(AppState::new(catalog, params));
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("🚀 Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
