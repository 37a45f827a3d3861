use bevy::asset::LoadState;
use bevy::prelude::*;

use super::loaded_model::LoadedModel;
use super::progress::LoadingProgress;
use crate::engine::assets::model_catalog::ModelCatalog;
use crate::engine::assets::point_cloud_file::PointCloudData;
use crate::engine::surface::roughness_tree::SurfaceRoughnessFile;
use crate::rpc::web_rpc::WebRpcInterface;

/// Asset handles of the load currently in progress.
#[derive(Debug)]
pub struct InFlightLoad {
    pub model_id: String,
    pub cloud: Handle<PointCloudData>,
    pub planes: Handle<SurfaceRoughnessFile>,
}

/// Serialises model loads.
///
/// A new request replaces any queued one and drops the in-flight handles,
/// which cancels that load. Only the latest request ever completes.
#[derive(Resource, Default, Debug)]
pub struct ModelLoader {
    requested: Option<String>,
    in_flight: Option<InFlightLoad>,
}

impl ModelLoader {
    pub fn request(&mut self, model_id: impl Into<String>) {
        let model_id = model_id.into();
        if let Some(cancelled) = self.in_flight.take() {
            info!(
                "Cancelling load of {} in favour of {}",
                cancelled.model_id, model_id
            );
        }
        self.requested = Some(model_id);
    }

    pub fn has_request(&self) -> bool {
        self.requested.is_some()
    }

    pub fn take_request(&mut self) -> Option<String> {
        self.requested.take()
    }

    pub fn begin(&mut self, load: InFlightLoad) {
        self.in_flight = Some(load);
    }

    pub fn in_flight(&self) -> Option<&InFlightLoad> {
        self.in_flight.as_ref()
    }

    pub fn finish(&mut self) -> Option<InFlightLoad> {
        self.in_flight.take()
    }

    /// Model currently queued or loading, if any.
    pub fn pending_model(&self) -> Option<&str> {
        self.requested
            .as_deref()
            .or_else(|| self.in_flight.as_ref().map(|load| load.model_id.as_str()))
    }
}

/// Where an in-flight load stands, given the state of its two assets.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStep {
    Waiting,
    Complete,
    CloudFailed(String),
}

/// The cloud is required. The plane tree is optional: once it has either
/// loaded or failed the load can complete.
pub fn load_step(cloud: &LoadState, planes: &LoadState) -> LoadStep {
    match cloud {
        LoadState::Failed(err) => LoadStep::CloudFailed(err.to_string()),
        LoadState::Loaded if matches!(planes, LoadState::Loaded | LoadState::Failed(_)) => {
            LoadStep::Complete
        }
        _ => LoadStep::Waiting,
    }
}

/// Start the queued request once the catalog is available.
pub fn start_requested_load(
    mut loader: ResMut<ModelLoader>,
    catalog: Option<Res<ModelCatalog>>,
    asset_server: Res<AssetServer>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut progress: ResMut<LoadingProgress>,
) {
    if !loader.has_request() {
        return;
    }
    let Some(catalog) = catalog else {
        return;
    };
    let Some(model_id) = loader.take_request() else {
        return;
    };

    let entry = match catalog.find(&model_id) {
        Ok(entry) => entry,
        Err(err) => {
            error!("Cannot load model: {}", err);
            rpc_interface.send_notification(
                "model_load_failed",
                serde_json::json!({ "model_id": model_id, "error": err.to_string() }),
            );
            progress.initial_model_settled = true;
            return;
        }
    };

    let cloud_path = entry.cloud_path();
    let plane_path = entry.plane_tree_path();
    println!("Loading model {}:", model_id);
    println!("  Cloud: {}", cloud_path);
    println!("  Planes: {}", plane_path);

    loader.begin(InFlightLoad {
        model_id,
        cloud: asset_server.load(cloud_path),
        planes: asset_server.load(plane_path),
    });
}

/// Turn a finished load into a fresh [`LoadedModel`] resource.
pub fn poll_model_load(
    mut commands: Commands,
    mut loader: ResMut<ModelLoader>,
    asset_server: Res<AssetServer>,
    clouds: Res<Assets<PointCloudData>>,
    plane_files: Res<Assets<SurfaceRoughnessFile>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut progress: ResMut<LoadingProgress>,
) {
    let step = match loader.in_flight() {
        Some(load) => load_step(
            &asset_server.load_state(&load.cloud),
            &asset_server.load_state(&load.planes),
        ),
        None => return,
    };

    match step {
        LoadStep::Waiting => {}
        LoadStep::CloudFailed(reason) => {
            let Some(load) = loader.finish() else {
                return;
            };
            report_load_failure(&load.model_id, &reason, &mut rpc_interface, &mut progress);
        }
        LoadStep::Complete => {
            let Some(load) = loader.finish() else {
                return;
            };
            let Some(cloud) = clouds.get(&load.cloud) else {
                report_load_failure(
                    &load.model_id,
                    "point cloud reported loaded but is missing",
                    &mut rpc_interface,
                    &mut progress,
                );
                return;
            };

            let extent = cloud.bounds().map(|bounds| bounds.size()).unwrap_or(Vec3::ZERO);
            let model = LoadedModel::build(load.model_id, cloud, plane_files.get(&load.planes));
            println!(
                "Model {} ready: {} points spanning {:?}, {} planes",
                model.model_id,
                model.positions.len(),
                extent,
                model.planes.len()
            );

            rpc_interface.send_notification(
                "model_loaded",
                serde_json::json!({
                    "model_id": model.model_id,
                    "points": model.positions.len(),
                    "planes": model.planes.len(),
                }),
            );
            commands.insert_resource(model);
            progress.initial_model_settled = true;
        }
    }
}

/// A failed load leaves the current model in place but still settles startup.
fn report_load_failure(
    model_id: &str,
    reason: &str,
    rpc_interface: &mut WebRpcInterface,
    progress: &mut LoadingProgress,
) {
    error!("Point cloud for {} failed to load: {}", model_id, reason);
    rpc_interface.send_notification(
        "model_load_failed",
        serde_json::json!({ "model_id": model_id, "error": reason }),
    );
    progress.initial_model_settled = true;
}
