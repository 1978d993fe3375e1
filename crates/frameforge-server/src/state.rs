use frameforge_core::api::Predictor;
use frameforge_core::catalog::HardwareCatalog;
use frameforge_core::config::ModelParams;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
}

impl AppState {
    pub fn new(catalog: HardwareCatalog, params: ModelParams) -> Self {
        Self {
            predictor: Predictor::builder()
                .catalog(Arc::new(catalog))
                .params(params)
                .build(),
        }
    }

    pub fn catalog(&self) -> &HardwareCatalog {
        &self.predictor.catalog
    }
}
