use frameforge_core::catalog::loader::{load_catalog_dir, load_csv_list, load_json_list};
use frameforge_core::catalog::HardwareCatalog;
use frameforge_core::error::FrameForgeError;
use frameforge_core::hardware::{Cpu, Gpu};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::tempdir;

mod common;
use common::{baseline, game};

const CPUS_CSV: &str = "id,name,score,socket,tdp\n\
                        lo, Low End ,100,AM5,65\n\
                        hi,High End,300,AM5,105\n";
const GPUS_CSV: &str = "id,name,score,vram,tdp\n\
                        g1,G One,1000,8,150\n\
                        ref,Reference,4000,24,450\n";

fn write_games_and_baselines(dir: &Path) {
    let games = vec![game("bench")];
    let baselines = vec![baseline("bench", "ref", 300.0)];
    fs::write(dir.join("games.json"), serde_json::to_string(&games).unwrap()).unwrap();
    fs::write(
        dir.join("baselines.json"),
        serde_json::to_string_pretty(&baselines).unwrap(),
    )
    .unwrap();
}

#[test]
fn test_csv_list_trims_fields() {
    let cpus: Vec<Cpu> = load_csv_list(Cursor::new(CPUS_CSV)).unwrap();
    assert_eq!(cpus.len(), 2);
    assert_eq!(cpus[0].name, "Low End");
    assert_eq!(cpus[1].score, 300.0);
    assert_eq!(cpus[1].tdp, 105);
}

#[test]
fn test_json_list_fills_optional_fields() {
    let raw = r#"[{"id": "g1", "name": "G One", "score": 1000}]"#;
    let gpus: Vec<Gpu> = load_json_list(Cursor::new(raw)).unwrap();
    assert_eq!(gpus[0].vram, 0);
    assert_eq!(gpus[0].tdp, 0);
}

#[test]
fn test_loads_csv_parts_and_json_games() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cpus.csv"), CPUS_CSV).unwrap();
    fs::write(dir.path().join("gpus.csv"), GPUS_CSV).unwrap();
    write_games_and_baselines(dir.path());

    let catalog = load_catalog_dir(dir.path()).unwrap();
    assert_eq!(catalog.cpus.len(), 2);
    assert_eq!(catalog.gpus.max_score(), 4000.0);
    assert_eq!(catalog.games.len(), 1);
    assert_eq!(
        catalog.baselines.by_game_id("bench").unwrap().table,
        common::reference_table()
    );
}

#[test]
fn test_json_wins_over_csv() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cpus.csv"), CPUS_CSV).unwrap();
    fs::write(
        dir.path().join("cpus.json"),
        r#"[{"id": "only", "name": "Only", "score": 50, "socket": "AM4"}]"#,
    )
    .unwrap();
    fs::write(dir.path().join("gpus.csv"), GPUS_CSV).unwrap();
    write_games_and_baselines(dir.path());

    let catalog = load_catalog_dir(dir.path()).unwrap();
    assert_eq!(catalog.cpus.len(), 1);
    assert!(catalog.cpus.by_id("only").is_some());
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cpus.csv"), CPUS_CSV).unwrap();
    fs::write(dir.path().join("gpus.csv"), GPUS_CSV).unwrap();

    let err = load_catalog_dir(dir.path()).unwrap_err();
    match err {
        FrameForgeError::Config(msg) => assert!(msg.contains("games.json"), "got: {}", msg),
        other => panic!("expected Config error, got {:?}", other),
    }
}

#[test]
fn test_games_do_not_fall_back_to_csv() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cpus.csv"), CPUS_CSV).unwrap();
    fs::write(dir.path().join("gpus.csv"), GPUS_CSV).unwrap();
    fs::write(dir.path().join("games.csv"), "id,name\nbench,Bench\n").unwrap();

    assert!(matches!(
        load_catalog_dir(dir.path()),
        Err(FrameForgeError::Config(_))
    ));
}

#[test]
fn test_duplicate_ids_rejected() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("cpus.csv"),
        "id,name,score,socket\nlo,A,100,AM5\nlo,B,200,AM5\n",
    )
    .unwrap();
    fs::write(dir.path().join("gpus.csv"), GPUS_CSV).unwrap();
    write_games_and_baselines(dir.path());

    match load_catalog_dir(dir.path()) {
        Err(FrameForgeError::Validation(msg)) => assert!(msg.contains("'lo'")),
        other => panic!("expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_non_positive_score_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cpus.csv"), CPUS_CSV).unwrap();
    fs::write(
        dir.path().join("gpus.csv"),
        "id,name,score\nref,Reference,4000\nzero,Zero,0\n",
    )
    .unwrap();
    write_games_and_baselines(dir.path());

    assert!(matches!(
        load_catalog_dir(dir.path()),
        Err(FrameForgeError::Validation(_))
    ));
}

#[test]
fn test_incomplete_table_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("cpus.csv"), CPUS_CSV).unwrap();
    fs::write(dir.path().join("gpus.csv"), GPUS_CSV).unwrap();
    fs::write(dir.path().join("games.json"), r#"[{"id": "bench", "name": "Bench"}]"#).unwrap();

    let mut value = serde_json::to_value(vec![baseline("bench", "ref", 300.0)]).unwrap();
    value[0]["table"]["4k"]
        .as_object_mut()
        .unwrap()
        .remove("ultra");
    fs::write(dir.path().join("baselines.json"), value.to_string()).unwrap();

    assert!(matches!(
        load_catalog_dir(dir.path()),
        Err(FrameForgeError::Json(_))
    ));
}

#[test]
fn test_load_or_builtin_falls_back() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let catalog = HardwareCatalog::load_or_builtin(Some(missing.as_path())).unwrap();
    assert!(catalog.gpus.by_id("rtx-4090").is_some());

    let catalog = HardwareCatalog::load_or_builtin(None).unwrap();
    assert_eq!(catalog.games.len(), 3);
}
