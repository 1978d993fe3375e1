use crate::config::ModelParams;
use crate::engine::memory::scale_memory;
use crate::fps::{FpsPoint, FpsTable};
use crate::hardware::MemoryConfig;

/// The hardware being predicted for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardwareProfile {
    pub cpu_score: f64,
    pub gpu_score: f64,
    pub memory: MemoryConfig,
}

/// The hardware a baseline table was measured on.
///
/// Both scores must be non-zero; catalog loading guarantees this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub cpu_score: f64,
    pub gpu_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub gpu_ratio: f64,
    pub cpu_ratio: f64,
    pub ram_ratio: f64,
    /// Multiplier applied to average FPS.
    pub avg_scale: f64,
    /// Multiplier applied to 1% lows.
    pub low_scale: f64,
}

impl ScaleFactors {
    pub fn compute(hw: &HardwareProfile, reference: &ReferencePoint, params: &ModelParams) -> Self {
        let gpu_ratio =
            (hw.gpu_score / reference.gpu_score).clamp(params.gpu_ratio_min, params.gpu_ratio_max);
        let cpu_ratio =
            (hw.cpu_score / reference.cpu_score).clamp(params.cpu_ratio_min, params.cpu_ratio_max);
        let ram_ratio = scale_memory(&hw.memory);

        // Weighted geometric blend: a collapsed dominant ratio drags the
        // whole product down instead of flooring at the minor terms.
        let avg_scale = gpu_ratio.powf(params.gpu_weight_avg)
            * cpu_ratio.powf(params.cpu_weight_avg)
            * ram_ratio.powf(params.ram_weight_avg);

        let low_scale = gpu_ratio.powf(params.gpu_weight_low)
            * cpu_ratio.powf(params.cpu_weight_low)
            * ram_ratio.powf(params.ram_weight_low);

        Self {
            gpu_ratio,
            cpu_ratio,
            ram_ratio,
            avg_scale,
            low_scale,
        }
    }
}

#[inline(always)]
fn scale_value(value: u32, factor: f64) -> u32 {
    // Values are non-negative, so round() is round-half-up here.
    (f64::from(value) * factor).round() as u32
}

/// Predicts every cell of `baseline` for the given hardware.
pub fn scale_fps_table(
    baseline: &FpsTable,
    hw: &HardwareProfile,
    reference: &ReferencePoint,
    params: &ModelParams,
) -> FpsTable {
    let factors = ScaleFactors::compute(hw, reference, params);

    FpsTable::from_fn(|res, q| {
        let base = baseline.get(res, q);
        FpsPoint {
            avg: scale_value(base.avg, factors.avg_scale),
            low1: scale_value(base.low1, factors.low_scale),
        }
    })
}
