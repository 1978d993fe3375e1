pub mod bottleneck;
pub mod memory;
pub mod recommender;
pub mod scaler;

pub use self::bottleneck::classify_bottleneck;
pub use self::memory::scale_memory;
pub use self::recommender::Recommender;
pub use self::scaler::{scale_fps_table, HardwareProfile, ReferencePoint, ScaleFactors};
