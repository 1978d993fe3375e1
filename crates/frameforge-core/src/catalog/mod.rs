pub mod loader;

use crate::error::{FfResult, FrameForgeError};
use crate::fps::FpsTable;
use crate::hardware::{Cpu, Game, GameBaseline, Gpu};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Anything with a stable id and a relative performance score.
pub trait Part {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn score(&self) -> f64;
}

impl Part for Cpu {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn score(&self) -> f64 {
        self.score
    }
}

impl Part for Gpu {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn score(&self) -> f64 {
        self.score
    }
}

/// Read-only repository of CPUs or GPUs.
///
/// Ids are unique, scores strictly positive, and the maximum score is
/// computed once on construction.
#[derive(Debug, Clone)]
pub struct PartCatalog<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
    max_score: f64,
}

impl<T: Part> PartCatalog<T> {
    pub fn new(items: Vec<T>, label: &str) -> FfResult<Self> {
        if items.is_empty() {
            return Err(FrameForgeError::Validation(format!(
                "{} catalog is empty",
                label
            )));
        }

        let mut index = HashMap::with_capacity(items.len());
        let mut max_score = 0.0f64;

        for (i, item) in items.iter().enumerate() {
            let score = item.score();
            if !score.is_finite() || score <= 0.0 {
                return Err(FrameForgeError::Validation(format!(
                    "{} '{}' has invalid score {}",
                    label,
                    item.id(),
                    score
                )));
            }
            if index.insert(item.id().to_string(), i).is_some() {
                return Err(FrameForgeError::Validation(format!(
                    "Duplicate {} id '{}'",
                    label,
                    item.id()
                )));
            }
            max_score = max_score.max(score);
        }

        Ok(Self {
            items,
            index,
            max_score,
        })
    }

    pub fn by_id(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// Entries in catalog order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn max_score(&self) -> f64 {
        self.max_score
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct GameCatalog {
    games: Vec<Game>,
    index: HashMap<String, usize>,
}

impl GameCatalog {
    pub fn new(games: Vec<Game>) -> FfResult<Self> {
        let mut index = HashMap::with_capacity(games.len());
        for (i, g) in games.iter().enumerate() {
            if index.insert(g.id.clone(), i).is_some() {
                return Err(FrameForgeError::Validation(format!(
                    "Duplicate game id '{}'",
                    g.id
                )));
            }
        }
        Ok(Self { games, index })
    }

    pub fn by_id(&self, id: &str) -> Option<&Game> {
        self.index.get(id).map(|&i| &self.games[i])
    }

    pub fn all(&self) -> &[Game] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct BaselineCatalog {
    baselines: Vec<GameBaseline>,
    index: HashMap<String, usize>,
}

impl BaselineCatalog {
    pub fn new(baselines: Vec<GameBaseline>) -> FfResult<Self> {
        let mut index = HashMap::with_capacity(baselines.len());
        for (i, b) in baselines.iter().enumerate() {
            if !b.baseline_cpu_score.is_finite() || b.baseline_cpu_score <= 0.0 {
                return Err(FrameForgeError::Validation(format!(
                    "Baseline for '{}' has invalid CPU score {}",
                    b.game_id, b.baseline_cpu_score
                )));
            }
            if index.insert(b.game_id.clone(), i).is_some() {
                return Err(FrameForgeError::Validation(format!(
                    "Duplicate baseline for game '{}'",
                    b.game_id
                )));
            }
        }
        Ok(Self { baselines, index })
    }

    pub fn by_game_id(&self, game_id: &str) -> Option<&GameBaseline> {
        self.index.get(game_id).map(|&i| &self.baselines[i])
    }

    pub fn all(&self) -> &[GameBaseline] {
        &self.baselines
    }

    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }
}

/// All reference data the engine reads. Immutable once built.
#[derive(Debug, Clone)]
pub struct HardwareCatalog {
    pub cpus: PartCatalog<Cpu>,
    pub gpus: PartCatalog<Gpu>,
    pub games: GameCatalog,
    pub baselines: BaselineCatalog,
}

const BUILTIN_CPUS: &str = include_str!("../../data/cpus.json");
const BUILTIN_GPUS: &str = include_str!("../../data/gpus.json");
const BUILTIN_GAMES: &str = include_str!("../../data/games.json");
const BUILTIN_BASELINES: &str = include_str!("../../data/baselines.json");

impl HardwareCatalog {
    pub fn new(
        cpus: Vec<Cpu>,
        gpus: Vec<Gpu>,
        games: Vec<Game>,
        baselines: Vec<GameBaseline>,
    ) -> FfResult<Self> {
        let catalog = Self {
            cpus: PartCatalog::new(cpus, "CPU")?,
            gpus: PartCatalog::new(gpus, "GPU")?,
            games: GameCatalog::new(games)?,
            baselines: BaselineCatalog::new(baselines)?,
        };
        catalog.audit();
        Ok(catalog)
    }

    /// The reference catalogs compiled into this crate.
    pub fn builtin() -> FfResult<Self> {
        Self::new(
            serde_json::from_str(BUILTIN_CPUS)?,
            serde_json::from_str(BUILTIN_GPUS)?,
            serde_json::from_str(BUILTIN_GAMES)?,
            serde_json::from_str(BUILTIN_BASELINES)?,
        )
    }

    /// Loads `dir` if given and present, otherwise the built-in catalogs.
    pub fn load_or_builtin(dir: Option<&Path>) -> FfResult<Self> {
        match dir {
            Some(d) if d.exists() => {
                info!("📂 Loading catalogs from {:?}", d);
                loader::load_catalog_dir(d)
            }
            Some(d) => {
                warn!("⚠️  Catalog directory {:?} not found. Using built-in catalogs.", d);
                Self::builtin()
            }
            None => Self::builtin(),
        }
    }

    /// Logs data-quality issues that are tolerated at load time.
    fn audit(&self) {
        for b in self.baselines.all() {
            if self.gpus.by_id(&b.baseline_gpu_id).is_none() {
                warn!(
                    "Baseline for '{}' references unknown GPU '{}'",
                    b.game_id, b.baseline_gpu_id
                );
            }
            if self.games.by_id(&b.game_id).is_none() {
                warn!("Baseline references unknown game '{}'", b.game_id);
            }
            for (res, q) in inverted_cells(&b.table) {
                warn!(
                    "Baseline for '{}' has 1% low above average at {} {}",
                    b.game_id, res, q
                );
            }
        }
        for g in self.games.all() {
            if self.baselines.by_game_id(&g.id).is_none() {
                warn!("Game '{}' has no baseline table", g.id);
            }
        }
    }
}

fn inverted_cells(
    table: &FpsTable,
) -> impl Iterator<Item = (crate::fps::Resolution, crate::fps::Quality)> + '_ {
    table
        .cells()
        .filter(|(_, _, p)| p.low1 > p.avg)
        .map(|(r, q, _)| (r, q))
}
