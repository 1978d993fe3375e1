use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use frameforge_core::catalog::HardwareCatalog;
use frameforge_core::config::ModelParams;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "FPS prediction from CPU, GPU and memory", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory with cpus/gpus/games/baselines catalogs. Built-in data when absent.
    #[arg(global = true, short, long)]
    data: Option<PathBuf>,

    /// JSON file overriding model params. Explicit flags still win.
    #[arg(global = true, long)]
    params: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Predict(cmd::predict::PredictArgs),
    Parts(cmd::parts::PartsArgs),
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// File params (if any) overlaid with flags the user actually typed.
fn resolve_params(
    path: Option<&Path>,
    cli_params: &ModelParams,
    matches: &ArgMatches,
) -> ModelParams {
    let Some(path) = path else {
        return cli_params.clone();
    };

    info!("⚖️  Loading model params from: {:?}", path);
    let mut params = ModelParams::load_from_file(path).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    params.merge_from_cli(cli_params, matches);
    params
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    let catalog = HardwareCatalog::load_or_builtin(cli.data.as_deref()).unwrap_or_else(|e| {
        error!("❌ Failed to load catalogs: {}", e);
        process::exit(1);
    });

    match cli.command {
        Commands::Predict(args) => {
            let sub_matches = matches
                .subcommand_matches("predict")
                .unwrap_or_else(|| process::exit(2));
            let params = resolve_params(cli.params.as_deref(), &args.params, sub_matches);
            cmd::predict::run(args, catalog, params);
        }
        Commands::Parts(args) => cmd::parts::run(args, &catalog),
    }
}
