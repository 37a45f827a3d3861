use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::path::catalog_path;

use super::model_loader::ModelLoader;
use super::progress::LoadingProgress;
use crate::engine::assets::model_catalog::ModelCatalog;
use crate::rpc::web_rpc::WebRpcInterface;

#[derive(Resource, Default)]
pub struct CatalogLoader {
    pub handle: Option<Handle<ModelCatalog>>,
}

/// Kick off the catalog request at startup.
pub fn start_loading(mut catalog_loader: ResMut<CatalogLoader>, asset_server: Res<AssetServer>) {
    let path = catalog_path();
    println!("Loading model catalog from: {}", path);
    catalog_loader.handle = Some(asset_server.load(path));
}

/// Publish the catalog as a resource and queue its first model.
pub fn load_catalog_system(
    mut commands: Commands,
    catalog_loader: Res<CatalogLoader>,
    asset_server: Res<AssetServer>,
    catalogs: Res<Assets<ModelCatalog>>,
    mut model_loader: ResMut<ModelLoader>,
    mut progress: ResMut<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if progress.catalog_loaded {
        return;
    }
    let Some(handle) = catalog_loader.handle.as_ref() else {
        return;
    };

    if let LoadState::Failed(err) = asset_server.load_state(handle) {
        error!("Model catalog failed to load: {}", err);
        rpc_interface.send_notification(
            "model_load_failed",
            serde_json::json!({ "model_id": null, "error": err.to_string() }),
        );
        progress.catalog_loaded = true;
        progress.initial_model_settled = true;
        return;
    }

    let Some(catalog) = catalogs.get(handle) else {
        return;
    };

    println!("Model catalog lists {} models", catalog.models.len());
    match catalog.models.first() {
        // A request made before the catalog arrived takes precedence.
        Some(first) if !model_loader.has_request() => model_loader.request(first.id.clone()),
        Some(_) => {}
        None => {
            warn!("Model catalog is empty");
            progress.initial_model_settled = true;
        }
    }

    commands.insert_resource(catalog.clone());
    progress.catalog_loaded = true;
}
