/// Scaling reference clocks (MHz) per memory generation.
pub const DDR3_REFERENCE_MHZ: f64 = 1600.0;
pub const DDR4_REFERENCE_MHZ: f64 = 3200.0;
pub const DDR5_REFERENCE_MHZ: f64 = 5600.0;

/// Clocks (MHz) proposed by a RAM upgrade suggestion.
/// DDR3 intentionally differs from its scaling reference.
pub const DDR3_UPGRADE_TARGET_MHZ: f64 = 1866.0;
pub const DDR4_UPGRADE_TARGET_MHZ: f64 = 3200.0;
pub const DDR5_UPGRADE_TARGET_MHZ: f64 = 5600.0;

/// Capacity treated as a 1.0 factor by the memory model.
pub const NEUTRAL_CAPACITY_GB: f64 = 16.0;

pub const SPEED_FACTOR_MIN: f64 = 0.6;
pub const SPEED_FACTOR_MAX: f64 = 1.4;
pub const CAPACITY_FACTOR_MIN: f64 = 0.7;
pub const CAPACITY_FACTOR_MAX: f64 = 1.3;

/// Bounds of the memory multiplier.
pub const MEMORY_MULTIPLIER_MIN: f64 = 0.6;
pub const MEMORY_MULTIPLIER_MAX: f64 = 1.6;

/// RAM upgrades are proposed below this capacity.
pub const RAM_UPGRADE_CEILING_GB: f64 = 32.0;
