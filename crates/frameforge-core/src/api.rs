use crate::catalog::HardwareCatalog;
use crate::config::ModelParams;
use crate::engine::{classify_bottleneck, scale_fps_table, HardwareProfile, ReferencePoint, Recommender};
use crate::prediction::{PredictRequest, PredictResponse};
use std::sync::Arc;
use strum_macros::Display;
use thiserror::Error;
use tracing::debug;
use typed_builder::TypedBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PartKind {
    #[strum(serialize = "CPU")]
    Cpu,
    #[strum(serialize = "GPU")]
    Gpu,
    #[strum(serialize = "game")]
    Game,
}

/// Typed outcomes of a prediction that could not be completed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictError {
    #[error("Unknown {kind} id '{id}'")]
    NotFound { kind: PartKind, id: String },

    #[error("No baseline data for game '{game_id}'")]
    MissingBaseline { game_id: String },

    #[error("Baseline GPU '{gpu_id}' for game '{game_id}' is not in the GPU catalog")]
    MissingBaselineGpu { game_id: String, gpu_id: String },

    #[error("Invalid model params: {0}")]
    InvalidParams(String),
}

impl PredictError {
    /// True when the caller sent ids that do not resolve.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PredictError::NotFound { .. })
    }
}

/// Resolves the request against the catalogs, then scales, classifies and
/// recommends. Nothing is computed unless every lookup succeeds.
pub fn predict(
    catalog: &HardwareCatalog,
    request: &PredictRequest,
    params: &ModelParams,
) -> Result<PredictResponse, PredictError> {
    params.validate().map_err(PredictError::InvalidParams)?;

    let not_found = |kind: PartKind, id: &str| PredictError::NotFound {
        kind,
        id: id.to_string(),
    };
    let cpu = catalog
        .cpus
        .by_id(&request.cpu_id)
        .ok_or_else(|| not_found(PartKind::Cpu, &request.cpu_id))?;
    let gpu = catalog
        .gpus
        .by_id(&request.gpu_id)
        .ok_or_else(|| not_found(PartKind::Gpu, &request.gpu_id))?;
    catalog
        .games
        .by_id(&request.game_id)
        .ok_or_else(|| not_found(PartKind::Game, &request.game_id))?;

    let baseline = catalog.baselines.by_game_id(&request.game_id).ok_or_else(|| {
        PredictError::MissingBaseline {
            game_id: request.game_id.clone(),
        }
    })?;
    let baseline_gpu = catalog.gpus.by_id(&baseline.baseline_gpu_id).ok_or_else(|| {
        PredictError::MissingBaselineGpu {
            game_id: baseline.game_id.clone(),
            gpu_id: baseline.baseline_gpu_id.clone(),
        }
    })?;

    let memory = request.memory();
    let hw = HardwareProfile {
        cpu_score: cpu.score,
        gpu_score: gpu.score,
        memory,
    };
    let reference = ReferencePoint {
        cpu_score: baseline.baseline_cpu_score,
        gpu_score: baseline_gpu.score,
    };

    let fps_table = scale_fps_table(&baseline.table, &hw, &reference, params);
    let bottleneck = classify_bottleneck(
        cpu.score,
        gpu.score,
        catalog.cpus.max_score(),
        catalog.gpus.max_score(),
        &memory,
    );
    let upgrades = Recommender::new(catalog, params).suggest(cpu, gpu, baseline, &memory, &fps_table);

    debug!(
        "Predicted {} + {} on '{}': primary bottleneck {}, {} upgrades",
        cpu.id,
        gpu.id,
        request.game_id,
        bottleneck.primary,
        upgrades.len()
    );

    Ok(PredictResponse {
        fps_table,
        bottleneck,
        upgrades,
    })
}

/// Shareable prediction service: a catalog plus the params to run it with.
#[derive(Debug, Clone, TypedBuilder)]
pub struct Predictor {
    pub catalog: Arc<HardwareCatalog>,
    #[builder(default)]
    pub params: ModelParams,
}

impl Predictor {
    pub fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, PredictError> {
        predict(&self.catalog, request, &self.params)
    }
}
