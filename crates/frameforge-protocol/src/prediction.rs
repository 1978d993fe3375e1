use crate::fps::FpsTable;
use crate::hardware::{MemoryConfig, RamGen};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// A hardware class that can limit performance or be upgraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Component {
    Cpu,
    Gpu,
    Ram,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottleneckInfo {
    pub primary: Component,
    pub cpu_score_norm: f64,
    pub gpu_score_norm: f64,
    pub ram_score_norm: f64,
}

impl BottleneckInfo {
    pub fn norm(&self, component: Component) -> f64 {
        match component {
            Component::Cpu => self.cpu_score_norm,
            Component::Gpu => self.gpu_score_norm,
            Component::Ram => self.ram_score_norm,
        }
    }
}

/// A single hardware swap and its projected Ultra-preset FPS gain per resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeSuggestion {
    #[serde(rename = "type")]
    pub kind: Component,
    pub from: String,
    pub to: String,
    pub gain1080: i32,
    pub gain1440: i32,
    pub gain4k: i32,
}

impl UpgradeSuggestion {
    /// Sum of the three Ultra gains. Ranks identically to their mean.
    pub fn total_gain(&self) -> i64 {
        i64::from(self.gain1080) + i64::from(self.gain1440) + i64::from(self.gain4k)
    }

    pub fn mean_gain(&self) -> f64 {
        self.total_gain() as f64 / 3.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    pub cpu_id: String,
    pub gpu_id: String,
    pub game_id: String,
    pub ram_gb: f64,
    pub ram_gen: RamGen,
    /// MHz
    pub ram_speed: f64,
}

impl PredictRequest {
    pub fn memory(&self) -> MemoryConfig {
        MemoryConfig::new(self.ram_gb, self.ram_gen, self.ram_speed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub fps_table: FpsTable,
    pub bottleneck: BottleneckInfo,
    pub upgrades: Vec<UpgradeSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
