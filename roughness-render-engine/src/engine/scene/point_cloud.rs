use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;

use crate::engine::colour::config::ColourConfig;
use crate::engine::colour::depth_colouriser::PointColouring;
use crate::engine::loading::loaded_model::LoadedModel;
use crate::engine::mesh::point_cloud_mesh::{PointCloud, create_point_cloud_mesh, set_point_colours};
use crate::engine::render::point_material::PointCloudMaterial;
use crate::engine::systems::display_settings::PointStyle;
use crate::rpc::web_rpc::WebRpcInterface;

pub fn despawn_point_cloud(commands: &mut Commands, clouds: &Query<Entity, With<PointCloud>>) {
    for entity in clouds.iter() {
        commands.entity(entity).despawn();
    }
}

/// Spawn the coloured sprite mesh for the loaded model.
pub fn spawn_point_cloud(
    commands: &mut Commands,
    model: &LoadedModel,
    config: &ColourConfig,
    style: &PointStyle,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<PointCloudMaterial>,
) {
    let colours = model.colours(config);
    let mesh = meshes.add(create_point_cloud_mesh(&model.positions, &colours));
    let material = materials.add(PointCloudMaterial::with_size(style.size));

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::default(),
        // Sprites extend past the vertex positions the culling bounds are built from.
        NoFrustumCulling,
        Pickable::IGNORE,
        PointCloud,
    ));
}

/// Recompute every point colour after a colour setting changed.
pub fn recolour_point_cloud(
    config: Res<ColourConfig>,
    model: Res<LoadedModel>,
    clouds: Query<&Mesh3d, With<PointCloud>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let colours = model.colours(&config);
    for mesh in &clouds {
        if let Some(mesh) = meshes.get_mut(&mesh.0) {
            set_point_colours(mesh, &colours);
        }
    }
}

/// Push the point size into the sprite material.
pub fn apply_point_style(
    style: Res<PointStyle>,
    clouds: Query<&MeshMaterial3d<PointCloudMaterial>, With<PointCloud>>,
    mut materials: ResMut<Assets<PointCloudMaterial>>,
) {
    for material in &clouds {
        if let Some(material) = materials.get_mut(&material.0) {
            material.set_size(style.size);
        }
    }
}

/// Tell the frontend when colouring switches between gradient and threshold.
pub fn notify_colour_mode(
    config: Res<ColourConfig>,
    model: Res<LoadedModel>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut last_mode: Local<Option<&'static str>>,
) {
    let colouring = model.colouring(&config);
    if *last_mode == Some(colouring.name()) {
        return;
    }
    *last_mode = Some(colouring.name());

    let threshold = match colouring {
        PointColouring::Threshold(value) => Some(value),
        _ => None,
    };
    info!("Point colouring: {}", colouring.name());
    rpc_interface.send_notification(
        "colour_mode_changed",
        serde_json::json!({ "mode": colouring.name(), "threshold": threshold }),
    );
}
