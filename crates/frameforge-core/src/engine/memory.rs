use crate::consts::*;
use crate::hardware::{MemoryConfig, RamGen};

/// Clock the memory model treats as a 1.0 speed factor.
pub fn reference_speed(gen: RamGen) -> f64 {
    match gen {
        RamGen::Ddr3 => DDR3_REFERENCE_MHZ,
        RamGen::Ddr4 => DDR4_REFERENCE_MHZ,
        RamGen::Ddr5 => DDR5_REFERENCE_MHZ,
    }
}

/// Clock a RAM upgrade of this generation is assumed to run at.
pub fn upgrade_target_speed(gen: RamGen) -> f64 {
    match gen {
        RamGen::Ddr3 => DDR3_UPGRADE_TARGET_MHZ,
        RamGen::Ddr4 => DDR4_UPGRADE_TARGET_MHZ,
        RamGen::Ddr5 => DDR5_UPGRADE_TARGET_MHZ,
    }
}

/// Memory performance multiplier in `[0.6, 1.6]`.
///
/// Out of range capacities and clocks are clamped, never rejected.
pub fn scale_memory(memory: &MemoryConfig) -> f64 {
    let speed_factor = (memory.speed_mhz / reference_speed(memory.generation))
        .clamp(SPEED_FACTOR_MIN, SPEED_FACTOR_MAX);
    let capacity_factor =
        (memory.capacity_gb / NEUTRAL_CAPACITY_GB).clamp(CAPACITY_FACTOR_MIN, CAPACITY_FACTOR_MAX);

    (speed_factor * capacity_factor).clamp(MEMORY_MULTIPLIER_MIN, MEMORY_MULTIPLIER_MAX)
}

/// Maps the memory multiplier back onto `[0, 1]`.
pub fn normalized_memory_score(memory: &MemoryConfig) -> f64 {
    let span = MEMORY_MULTIPLIER_MAX - MEMORY_MULTIPLIER_MIN;
    ((scale_memory(memory) - MEMORY_MULTIPLIER_MIN) / span).clamp(0.0, 1.0)
}
