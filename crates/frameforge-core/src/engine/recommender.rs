use crate::catalog::HardwareCatalog;
use crate::config::ModelParams;
use crate::consts::{NEUTRAL_CAPACITY_GB, RAM_UPGRADE_CEILING_GB};
use crate::engine::memory::upgrade_target_speed;
use crate::engine::scaler::{scale_fps_table, HardwareProfile, ReferencePoint};
use crate::fps::{FpsTable, Quality, Resolution};
use crate::hardware::{Cpu, GameBaseline, Gpu, MemoryConfig, RamGen};
use crate::prediction::{Component, UpgradeSuggestion};
use itertools::Itertools;
use tracing::{debug, warn};

/// Ultra-preset average FPS gain per resolution, `new - current`.
pub fn ultra_gains(new: &FpsTable, current: &FpsTable) -> (i32, i32, i32) {
    let gain = |res: Resolution| {
        let delta = i64::from(new.get(res, Quality::Ultra).avg)
            - i64::from(current.get(res, Quality::Ultra).avg);
        delta as i32
    };
    (
        gain(Resolution::Fhd),
        gain(Resolution::Qhd),
        gain(Resolution::Uhd),
    )
}

/// The memory configuration a RAM upgrade would move to, if one is proposed.
pub fn ram_upgrade_target(memory: &MemoryConfig) -> Option<MemoryConfig> {
    let is_small = memory.capacity_gb < RAM_UPGRADE_CEILING_GB;
    let is_small_ddr3 =
        memory.generation == RamGen::Ddr3 && memory.capacity_gb < NEUTRAL_CAPACITY_GB;
    if !(is_small || is_small_ddr3) {
        return None;
    }

    let capacity_gb = if memory.capacity_gb < NEUTRAL_CAPACITY_GB {
        NEUTRAL_CAPACITY_GB
    } else {
        RAM_UPGRADE_CEILING_GB
    };
    let generation = match memory.generation {
        RamGen::Ddr3 => RamGen::Ddr4,
        other => other,
    };

    Some(MemoryConfig::new(
        capacity_gb,
        generation,
        upgrade_target_speed(generation),
    ))
}

/// Searches single-part swaps against one fixed current configuration.
pub struct Recommender<'a> {
    catalog: &'a HardwareCatalog,
    params: &'a ModelParams,
}

impl<'a> Recommender<'a> {
    pub fn new(catalog: &'a HardwareCatalog, params: &'a ModelParams) -> Self {
        Self { catalog, params }
    }

    /// Ranked upgrades, best mean Ultra gain first, at most
    /// `params.max_suggestions` long.
    ///
    /// Every candidate is evaluated against the current configuration, not
    /// against each other. Returns an empty list when the baseline GPU is
    /// not in the catalog.
    pub fn suggest(
        &self,
        cpu: &Cpu,
        gpu: &Gpu,
        baseline: &GameBaseline,
        memory: &MemoryConfig,
        current: &FpsTable,
    ) -> Vec<UpgradeSuggestion> {
        let baseline_gpu = match self.catalog.gpus.by_id(&baseline.baseline_gpu_id) {
            Some(g) => g,
            None => {
                warn!(
                    "Baseline GPU '{}' for '{}' not found, skipping upgrades",
                    baseline.baseline_gpu_id, baseline.game_id
                );
                return Vec::new();
            }
        };

        let reference = ReferencePoint {
            cpu_score: baseline.baseline_cpu_score,
            gpu_score: baseline_gpu.score,
        };
        let current_hw = HardwareProfile {
            cpu_score: cpu.score,
            gpu_score: gpu.score,
            memory: *memory,
        };

        let evaluate = |kind: Component, from: String, to: String, hw: HardwareProfile| {
            let table = scale_fps_table(&baseline.table, &hw, &reference, self.params);
            let (gain1080, gain1440, gain4k) = ultra_gains(&table, current);
            UpgradeSuggestion {
                kind,
                from,
                to,
                gain1080,
                gain1440,
                gain4k,
            }
        };

        let mut out = Vec::new();

        // 1. GPU: anything faster
        for new_gpu in self.catalog.gpus.all().iter().filter(|g| g.score > gpu.score) {
            out.push(evaluate(
                Component::Gpu,
                gpu.name.clone(),
                new_gpu.name.clone(),
                HardwareProfile {
                    gpu_score: new_gpu.score,
                    ..current_hw
                },
            ));
        }

        // 2. CPU: drop-in only
        for new_cpu in self
            .catalog
            .cpus
            .all()
            .iter()
            .filter(|c| c.socket == cpu.socket && c.score > cpu.score)
        {
            out.push(evaluate(
                Component::Cpu,
                cpu.name.clone(),
                new_cpu.name.clone(),
                HardwareProfile {
                    cpu_score: new_cpu.score,
                    ..current_hw
                },
            ));
        }

        // 3. RAM
        if let Some(target) = ram_upgrade_target(memory) {
            out.push(evaluate(
                Component::Ram,
                memory.label(),
                target.label(),
                HardwareProfile {
                    memory: target,
                    ..current_hw
                },
            ));
        }

        debug!(
            "Evaluated {} upgrade candidates for '{}'",
            out.len(),
            baseline.game_id
        );

        // Stable: equal gains keep GPU, CPU, RAM catalog order.
        out.into_iter()
            .sorted_by_key(|u| std::cmp::Reverse(u.total_gain()))
            .take(self.params.max_suggestions)
            .collect()
    }
}
