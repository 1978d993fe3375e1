use crate::fps::FpsTable;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    ValueEnum,
)]
#[strum(ascii_case_insensitive)]
pub enum RamGen {
    #[serde(rename = "DDR3")]
    #[strum(serialize = "DDR3")]
    #[value(name = "DDR3", alias = "ddr3")]
    Ddr3,
    #[serde(rename = "DDR4")]
    #[strum(serialize = "DDR4")]
    #[value(name = "DDR4", alias = "ddr4")]
    Ddr4,
    #[serde(rename = "DDR5")]
    #[strum(serialize = "DDR5")]
    #[value(name = "DDR5", alias = "ddr5")]
    Ddr5,
}

impl fmt::Display for RamGen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RamGen::Ddr3 => "DDR3",
            RamGen::Ddr4 => "DDR4",
            RamGen::Ddr5 => "DDR5",
        };
        f.write_str(label)
    }
}

/// Installed system memory, supplied per request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryConfig {
    pub capacity_gb: f64,
    pub generation: RamGen,
    pub speed_mhz: f64,
}

impl MemoryConfig {
    pub fn new(capacity_gb: f64, generation: RamGen, speed_mhz: f64) -> Self {
        Self {
            capacity_gb,
            generation,
            speed_mhz,
        }
    }

    /// The neutral point of the memory model: 16GB DDR4 @ 3200MHz.
    pub fn neutral() -> Self {
        Self::new(16.0, RamGen::Ddr4, 3200.0)
    }

    /// Display label, e.g. `16GB DDR4 @ 3200MHz`.
    pub fn label(&self) -> String {
        format!(
            "{}GB {} @ {}MHz",
            self.capacity_gb, self.generation, self.speed_mhz
        )
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self::neutral()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cpu {
    pub id: String,
    pub name: String,
    pub score: f64,
    pub socket: String,
    #[serde(default)]
    pub tdp: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gpu {
    pub id: String,
    pub name: String,
    pub score: f64,
    /// GB
    #[serde(default)]
    pub vram: u32,
    #[serde(default)]
    pub tdp: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub name: String,
}

/// Reference table for one game, measured on `baseline_gpu_id` with a CPU
/// scoring `baseline_cpu_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameBaseline {
    pub game_id: String,
    pub baseline_gpu_id: String,
    pub baseline_cpu_score: f64,
    pub table: FpsTable,
}
