use frameforge_core::engine::classify_bottleneck;
use frameforge_core::hardware::{MemoryConfig, RamGen};
use frameforge_core::prediction::Component;
use rstest::rstest;

#[rstest]
#[case::weak_cpu(100.0, 4000.0, MemoryConfig::neutral(), Component::Cpu)]
#[case::weak_gpu(400.0, 1000.0, MemoryConfig::neutral(), Component::Gpu)]
#[case::weak_ram(400.0, 4000.0, MemoryConfig::new(8.0, RamGen::Ddr4, 2133.0), Component::Ram)]
#[case::cpu_gpu_tie_prefers_cpu(100.0, 1000.0, MemoryConfig::neutral(), Component::Cpu)]
fn test_primary_bottleneck(
    #[case] cpu: f64,
    #[case] gpu: f64,
    #[case] memory: MemoryConfig,
    #[case] expected: Component,
) {
    let info = classify_bottleneck(cpu, gpu, 400.0, 4000.0, &memory);
    assert_eq!(info.primary, expected);
}

#[test]
fn test_norms_are_clamped_and_rounded() {
    let info = classify_bottleneck(19000.0, 9000.0, 36000.0, 24000.0, &MemoryConfig::neutral());
    assert_eq!(info.primary, Component::Gpu);
    assert_eq!(info.cpu_score_norm, 0.53);
    assert_eq!(info.gpu_score_norm, 0.38);
    assert_eq!(info.ram_score_norm, 0.4);

    // A part above the catalog ceiling still reads as 1.0
    let over = classify_bottleneck(500.0, 5000.0, 400.0, 4000.0, &MemoryConfig::neutral());
    assert_eq!(over.cpu_score_norm, 1.0);
    assert_eq!(over.gpu_score_norm, 1.0);
    assert_eq!(over.primary, Component::Ram);
}

#[test]
fn test_primary_uses_unrounded_norms() {
    // 0.504 vs 0.496 both round to 0.50; GPU is still the weaker one.
    let info = classify_bottleneck(504.0, 496.0, 1000.0, 1000.0, &MemoryConfig::new(64.0, RamGen::Ddr5, 8000.0));
    assert_eq!(info.cpu_score_norm, info.gpu_score_norm);
    assert_eq!(info.primary, Component::Gpu);
}
