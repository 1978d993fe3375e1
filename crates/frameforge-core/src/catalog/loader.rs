use crate::catalog::HardwareCatalog;
use crate::error::{FfResult, FrameForgeError};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Parses a JSON array of records.
pub fn load_json_list<T: DeserializeOwned, R: Read>(reader: R) -> FfResult<Vec<T>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parses a headed CSV list of records (`id,name,score,...`).
pub fn load_csv_list<T: DeserializeOwned, R: Read>(reader: R) -> FfResult<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut out = Vec::new();
    for record in rdr.deserialize() {
        out.push(record?);
    }
    Ok(out)
}

/// Reads `<stem>.json`, or `<stem>.csv` when `allow_csv` and no JSON exists.
fn load_list<T: DeserializeOwned>(dir: &Path, stem: &str, allow_csv: bool) -> FfResult<Vec<T>> {
    let json_path = dir.join(format!("{}.json", stem));
    if json_path.exists() {
        debug!("   Loading {} from {:?}", stem, json_path);
        return load_json_list(BufReader::new(File::open(json_path)?));
    }

    if allow_csv {
        let csv_path = dir.join(format!("{}.csv", stem));
        if csv_path.exists() {
            debug!("   Loading {} from {:?}", stem, csv_path);
            return load_csv_list(File::open(csv_path)?);
        }
    }

    Err(FrameForgeError::Config(format!(
        "Missing catalog file '{}.json' in {:?}",
        stem, dir
    )))
}

/// Loads `cpus`, `gpus`, `games` and `baselines` from a data directory.
pub fn load_catalog_dir<P: AsRef<Path>>(dir: P) -> FfResult<HardwareCatalog> {
    let dir = dir.as_ref();

    let cpus = load_list(dir, "cpus", true)?;
    let gpus = load_list(dir, "gpus", true)?;
    let games = load_list(dir, "games", false)?;
    let baselines = load_list(dir, "baselines", false)?;

    let catalog = HardwareCatalog::new(cpus, gpus, games, baselines)?;
    info!(
        "   -> Loaded {} CPUs, {} GPUs, {} games, {} baselines.",
        catalog.cpus.len(),
        catalog.gpus.len(),
        catalog.games.len(),
        catalog.baselines.len()
    );
    Ok(catalog)
}
