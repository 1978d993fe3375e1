#![allow(dead_code)]

use frameforge_core::catalog::HardwareCatalog;
use frameforge_core::fps::{FpsPoint, FpsTable, Quality, Resolution};
use frameforge_core::hardware::{Cpu, Game, GameBaseline, Gpu};
use frameforge_core::prediction::PredictRequest;

/// Builder for Cpu to clean up tests
pub struct CpuBuilder {
    cpu: Cpu,
}

impl CpuBuilder {
    pub fn new(id: &str, score: f64) -> Self {
        Self {
            cpu: Cpu {
                id: id.to_string(),
                name: id.to_uppercase(),
                score,
                socket: "AM5".to_string(),
                tdp: 65,
            },
        }
    }

    pub fn socket(mut self, socket: &str) -> Self {
        self.cpu.socket = socket.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.cpu.name = name.to_string();
        self
    }

    pub fn build(self) -> Cpu {
        self.cpu
    }
}

pub fn gpu(id: &str, score: f64) -> Gpu {
    Gpu {
        id: id.to_string(),
        name: id.to_uppercase(),
        score,
        vram: 8,
        tdp: 200,
    }
}

pub fn game(id: &str) -> Game {
    Game {
        id: id.to_string(),
        name: id.to_uppercase(),
    }
}

/// Baseline shaped like the Cyberpunk reference table.
pub fn reference_table() -> FpsTable {
    let rows = [
        [(220, 190), (190, 160), (160, 130), (130, 105)],
        [(200, 170), (175, 145), (145, 120), (115, 90)],
        [(150, 120), (130, 105), (110, 90), (85, 70)],
    ];
    FpsTable::from_fn(|res, q| {
        let r = match res {
            Resolution::Fhd => 0,
            Resolution::Qhd => 1,
            Resolution::Uhd => 2,
        };
        let c = match q {
            Quality::Low => 0,
            Quality::Medium => 1,
            Quality::High => 2,
            Quality::Ultra => 3,
        };
        let (avg, low1) = rows[r][c];
        FpsPoint::new(avg, low1)
    })
}

pub fn baseline(game_id: &str, gpu_id: &str, cpu_score: f64) -> GameBaseline {
    GameBaseline {
        game_id: game_id.to_string(),
        baseline_gpu_id: gpu_id.to_string(),
        baseline_cpu_score: cpu_score,
        table: reference_table(),
    }
}

/// Small controlled catalog:
/// - CPUs: lo (AM5, 100), mid (AM5, 200), top (AM5, 300), alien (AM4, 400)
/// - GPUs: g1 (1000), g2 (2000), ref (4000)
/// - Game "bench" measured on "ref" with CPU score 300.
pub fn mock_catalog() -> HardwareCatalog {
    HardwareCatalog::new(
        vec![
            CpuBuilder::new("lo", 100.0).build(),
            CpuBuilder::new("mid", 200.0).build(),
            CpuBuilder::new("top", 300.0).build(),
            CpuBuilder::new("alien", 400.0).socket("AM4").build(),
        ],
        vec![gpu("g1", 1000.0), gpu("g2", 2000.0), gpu("ref", 4000.0)],
        vec![game("bench"), game("orphan")],
        vec![baseline("bench", "ref", 300.0)],
    )
    .expect("mock catalog should be valid")
}

pub fn request(cpu: &str, gpu: &str, game: &str) -> PredictRequest {
    PredictRequest {
        cpu_id: cpu.to_string(),
        gpu_id: gpu.to_string(),
        game_id: game.to_string(),
        ram_gb: 16.0,
        ram_gen: frameforge_core::hardware::RamGen::Ddr4,
        ram_speed: 3200.0,
    }
}
