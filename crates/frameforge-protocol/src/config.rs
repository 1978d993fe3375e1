use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable constants of the scaling model.
///
/// The defaults are the calibrated values; every field can be overridden from
/// a JSON file or from the command line.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    // === AVERAGE FPS (GPU bound) ===
    #[arg(long, default_value_t = 0.85)]
    pub gpu_weight_avg: f64,
    #[arg(long, default_value_t = 0.12)]
    pub cpu_weight_avg: f64,
    #[arg(long, default_value_t = 0.03)]
    pub ram_weight_avg: f64,

    // === 1% LOWS (CPU / memory sensitive) ===
    #[arg(long, default_value_t = 0.60)]
    pub gpu_weight_low: f64,
    #[arg(long, default_value_t = 0.30)]
    pub cpu_weight_low: f64,
    #[arg(long, default_value_t = 0.10)]
    pub ram_weight_low: f64,

    // === RATIO CLAMPS ===
    #[arg(long, default_value_t = 0.1)]
    pub gpu_ratio_min: f64,
    #[arg(long, default_value_t = 5.0)]
    pub gpu_ratio_max: f64,
    #[arg(long, default_value_t = 0.3)]
    pub cpu_ratio_min: f64,
    #[arg(long, default_value_t = 2.0)]
    pub cpu_ratio_max: f64,

    // === RECOMMENDER ===
    #[arg(long, default_value_t = 5)]
    pub max_suggestions: usize,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            gpu_weight_avg: 0.85,
            cpu_weight_avg: 0.12,
            ram_weight_avg: 0.03,
            gpu_weight_low: 0.60,
            cpu_weight_low: 0.30,
            ram_weight_low: 0.10,
            gpu_ratio_min: 0.1,
            gpu_ratio_max: 5.0,
            cpu_ratio_min: 0.3,
            cpu_ratio_max: 2.0,
            max_suggestions: 5,
        }
    }
}

impl ModelParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read params file {:?}: {}", path, e))?;

        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse params JSON {:?}: {}", path, e))
    }

    /// Checks that the params can be fed to `f64::clamp` and `powf` safely.
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("gpu_weight_avg", self.gpu_weight_avg),
            ("cpu_weight_avg", self.cpu_weight_avg),
            ("ram_weight_avg", self.ram_weight_avg),
            ("gpu_weight_low", self.gpu_weight_low),
            ("cpu_weight_low", self.cpu_weight_low),
            ("ram_weight_low", self.ram_weight_low),
        ];
        for (name, w) in weights {
            if !w.is_finite() || w < 0.0 {
                return Err(format!("{} must be a finite non-negative number, got {}", name, w));
            }
        }

        let ranges = [
            ("gpu_ratio", self.gpu_ratio_min, self.gpu_ratio_max),
            ("cpu_ratio", self.cpu_ratio_min, self.cpu_ratio_max),
        ];
        for (name, min, max) in ranges {
            if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
                return Err(format!(
                    "{} range must satisfy 0 < min <= max, got [{}, {}]",
                    name, min, max
                ));
            }
        }

        if self.max_suggestions == 0 {
            return Err("max_suggestions must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli_params: &ModelParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field;
                }
            };
        }

        update_if_present!(gpu_weight_avg, "gpu_weight_avg");
        update_if_present!(cpu_weight_avg, "cpu_weight_avg");
        update_if_present!(ram_weight_avg, "ram_weight_avg");

        update_if_present!(gpu_weight_low, "gpu_weight_low");
        update_if_present!(cpu_weight_low, "cpu_weight_low");
        update_if_present!(ram_weight_low, "ram_weight_low");

        update_if_present!(gpu_ratio_min, "gpu_ratio_min");
        update_if_present!(gpu_ratio_max, "gpu_ratio_max");
        update_if_present!(cpu_ratio_min, "cpu_ratio_min");
        update_if_present!(cpu_ratio_max, "cpu_ratio_max");

        update_if_present!(max_suggestions, "max_suggestions");
    }
}
