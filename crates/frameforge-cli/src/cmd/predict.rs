use crate::reports;
use clap::Args;
use frameforge_core::api::Predictor;
use frameforge_core::catalog::HardwareCatalog;
use frameforge_core::config::ModelParams;
use frameforge_core::hardware::RamGen;
use frameforge_core::prediction::PredictRequest;
use std::process;
use std::sync::Arc;
use tracing::error;

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    #[arg(long)]
    pub cpu: String,

    #[arg(long)]
    pub gpu: String,

    #[arg(long)]
    pub game: String,

    #[arg(long, default_value_t = 16.0)]
    pub ram_gb: f64,

    #[arg(long, value_enum, default_value_t = RamGen::Ddr4)]
    pub ram_gen: RamGen,

    /// MHz
    #[arg(long, default_value_t = 3200.0)]
    pub ram_speed: f64,

    /// Print the raw response instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[command(flatten)]
    pub params: ModelParams,
}

impl PredictArgs {
    fn request(&self) -> PredictRequest {
        PredictRequest {
            cpu_id: self.cpu.clone(),
            gpu_id: self.gpu.clone(),
            game_id: self.game.clone(),
            ram_gb: self.ram_gb,
            ram_gen: self.ram_gen,
            ram_speed: self.ram_speed,
        }
    }
}

pub fn run(args: PredictArgs, catalog: HardwareCatalog, params: ModelParams) {
    let predictor = Predictor::builder()
        .catalog(Arc::new(catalog))
        .params(params)
        .build();
    let request = args.request();

    let response = predictor.predict(&request).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    if args.json {
        match serde_json::to_string_pretty(&response) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                error!("❌ Failed to serialize response: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let cpu_name = predictor
        .catalog
        .cpus
        .by_id(&request.cpu_id)
        .map_or(request.cpu_id.as_str(), |c| c.name.as_str());
    let gpu_name = predictor
        .catalog
        .gpus
        .by_id(&request.gpu_id)
        .map_or(request.gpu_id.as_str(), |g| g.name.as_str());
    let game_name = predictor
        .catalog
        .games
        .by_id(&request.game_id)
        .map_or(request.game_id.as_str(), |g| g.name.as_str());

    println!(
        "\n🎮 === {} :: {} + {} + {} === 🎮",
        game_name,
        cpu_name,
        gpu_name,
        request.memory().label()
    );

    reports::print_fps_table(&response.fps_table);
    reports::print_bottleneck(&response.bottleneck);
    reports::print_upgrades(&response.upgrades);
}
