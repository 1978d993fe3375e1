use crate::engine::memory::normalized_memory_score;
use crate::hardware::MemoryConfig;
use crate::prediction::{BottleneckInfo, Component};

#[inline(always)]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Picks the component furthest from the best its catalog offers.
///
/// `max_cpu_score` / `max_gpu_score` are catalog-wide maxima. Ties go to the
/// earlier of CPU, GPU, RAM. Output norms are rounded to 2 decimals; the
/// choice of `primary` uses the unrounded values.
pub fn classify_bottleneck(
    cpu_score: f64,
    gpu_score: f64,
    max_cpu_score: f64,
    max_gpu_score: f64,
    memory: &MemoryConfig,
) -> BottleneckInfo {
    let cpu_norm = (cpu_score / max_cpu_score).clamp(0.0, 1.0);
    let gpu_norm = (gpu_score / max_gpu_score).clamp(0.0, 1.0);
    let ram_norm = normalized_memory_score(memory);

    let candidates = [
        (Component::Cpu, cpu_norm),
        (Component::Gpu, gpu_norm),
        (Component::Ram, ram_norm),
    ];

    let mut primary = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 < primary.1 {
            primary = *candidate;
        }
    }

    BottleneckInfo {
        primary: primary.0,
        cpu_score_norm: round2(cpu_norm),
        gpu_score_norm: round2(gpu_norm),
        ram_score_norm: round2(ram_norm),
    }
}
