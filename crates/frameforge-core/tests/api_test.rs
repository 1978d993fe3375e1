use frameforge_core::api::{predict, PartKind, PredictError, Predictor};
use frameforge_core::catalog::HardwareCatalog;
use frameforge_core::config::ModelParams;
use frameforge_core::fps::{FpsPoint, Quality, Resolution};
use frameforge_core::prediction::{Component, PredictRequest};
use std::sync::Arc;

mod common;
use common::{baseline, game, gpu, mock_catalog, request, CpuBuilder};

fn builtin_predictor() -> Predictor {
    Predictor::builder()
        .catalog(Arc::new(HardwareCatalog::builtin().unwrap()))
        .build()
}

#[test]
fn test_predict_midrange_cyberpunk() {
    let predictor = builtin_predictor();
    let res = predictor
        .predict(&request("intel-core-i5-13400f", "rtx-3060-12g", "cyberpunk"))
        .unwrap();

    let table = &res.fps_table;
    assert_eq!(table.get(Resolution::Fhd, Quality::Ultra), FpsPoint::new(61, 72));
    assert_eq!(table.get(Resolution::Qhd, Quality::Ultra), FpsPoint::new(54, 62));
    assert_eq!(table.get(Resolution::Uhd, Quality::Ultra), FpsPoint::new(40, 48));

    assert_eq!(res.bottleneck.primary, Component::Gpu);
    assert_eq!(res.bottleneck.cpu_score_norm, 0.53);
    assert_eq!(res.bottleneck.gpu_score_norm, 0.38);
    assert_eq!(res.bottleneck.ram_score_norm, 0.4);

    assert_eq!(res.upgrades.len(), 5);
    let top = &res.upgrades[0];
    assert_eq!(top.kind, Component::Gpu);
    assert_eq!(top.from, "RTX 3060 12GB");
    assert_eq!(top.to, "RTX 4090");
    assert_eq!((top.gain1080, top.gain1440, top.gain4k), (80, 71, 52));

    // Equal gains keep catalog order.
    let targets: Vec<_> = res.upgrades.iter().map(|u| u.to.as_str()).collect();
    assert_eq!(
        targets,
        vec!["RTX 4090", "RX 7900 XTX", "RTX 4080 Super", "RX 7900 XT", "RTX 4080"]
    );
}

#[test]
fn test_reference_rig_reproduces_baseline() {
    let catalog = HardwareCatalog::builtin().unwrap();
    let reference = catalog.baselines.by_game_id("cyberpunk").unwrap().clone();

    // A catalog CPU scored exactly like the baseline's CPU.
    let mut cpus = catalog.cpus.all().to_vec();
    cpus.push(CpuBuilder::new("bench-cpu", reference.baseline_cpu_score).build());
    let catalog = HardwareCatalog::new(
        cpus,
        catalog.gpus.all().to_vec(),
        catalog.games.all().to_vec(),
        catalog.baselines.all().to_vec(),
    )
    .unwrap();

    let res = predict(
        &catalog,
        &request("bench-cpu", "rtx-4090", "cyberpunk"),
        &ModelParams::default(),
    )
    .unwrap();
    assert_eq!(res.fps_table, reference.table);
}

#[test]
fn test_unknown_ids_are_client_errors() {
    let catalog = mock_catalog();
    let params = ModelParams::default();

    let cases = [
        (request("nope", "g1", "bench"), PartKind::Cpu, "nope"),
        (request("lo", "nope", "bench"), PartKind::Gpu, "nope"),
        (request("lo", "g1", "nope"), PartKind::Game, "nope"),
    ];
    for (req, kind, id) in cases {
        let err = predict(&catalog, &req, &params).unwrap_err();
        assert_eq!(
            err,
            PredictError::NotFound {
                kind,
                id: id.to_string()
            }
        );
        assert!(err.is_client_error());
    }
}

#[test]
fn test_cpu_is_checked_before_gpu() {
    let err = predict(&mock_catalog(), &request("x", "y", "z"), &ModelParams::default()).unwrap_err();
    assert!(matches!(err, PredictError::NotFound { kind: PartKind::Cpu, .. }));
}

#[test]
fn test_game_without_baseline() {
    let err = predict(&mock_catalog(), &request("lo", "g1", "orphan"), &ModelParams::default())
        .unwrap_err();
    assert_eq!(
        err,
        PredictError::MissingBaseline {
            game_id: "orphan".into()
        }
    );
    assert!(!err.is_client_error());
}

#[test]
fn test_baseline_gpu_missing_from_catalog() {
    let catalog = HardwareCatalog::new(
        vec![CpuBuilder::new("lo", 100.0).build()],
        vec![gpu("g1", 1000.0)],
        vec![game("bench")],
        vec![baseline("bench", "ghost", 300.0)],
    )
    .unwrap();

    let err = predict(&catalog, &request("lo", "g1", "bench"), &ModelParams::default()).unwrap_err();
    assert_eq!(
        err,
        PredictError::MissingBaselineGpu {
            game_id: "bench".into(),
            gpu_id: "ghost".into()
        }
    );
    assert!(!err.is_client_error());
}

#[test]
fn test_invalid_params_are_rejected() {
    let params = ModelParams {
        cpu_ratio_min: 3.0,
        ..Default::default()
    };
    let err = predict(&mock_catalog(), &request("lo", "g1", "bench"), &params).unwrap_err();
    assert!(matches!(err, PredictError::InvalidParams(_)));
}

#[test]
fn test_wire_shape() {
    let res = predict(&mock_catalog(), &request("lo", "g1", "bench"), &ModelParams::default())
        .unwrap();
    let json = serde_json::to_value(&res).unwrap();

    assert!(json["fpsTable"]["1080p"]["ultra"]["avg"].is_u64());
    assert!(json["fpsTable"]["4k"]["low"]["low1"].is_u64());
    assert_eq!(json["bottleneck"]["primary"], "CPU");
    assert!(json["bottleneck"]["cpuScoreNorm"].is_f64());
    assert_eq!(json["upgrades"][0]["type"], "GPU");
    assert_eq!(json["upgrades"][0]["gain1080"], 79);
    assert_eq!(json["upgrades"][4]["type"], "RAM");
}

#[test]
fn test_request_parses_from_json() {
    let raw = r#"{
        "cpuId": "lo",
        "gpuId": "g1",
        "gameId": "bench",
        "ramGb": 16,
        "ramGen": "DDR4",
        "ramSpeed": 3200
    }"#;
    let req: PredictRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(req, request("lo", "g1", "bench"));
}
