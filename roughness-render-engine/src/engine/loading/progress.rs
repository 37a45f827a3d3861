use bevy::prelude::*;

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub catalog_loaded: bool,
    /// The first model request has either produced a model or failed.
    pub initial_model_settled: bool,
}

impl LoadingProgress {
    pub fn is_complete(&self) -> bool {
        self.catalog_loaded && self.initial_model_settled
    }
}
