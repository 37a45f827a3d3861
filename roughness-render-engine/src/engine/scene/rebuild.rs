use bevy::prelude::*;

use super::planes::{PlaneSlab, despawn_plane_slabs, spawn_plane_slabs};
use super::point_cloud::{despawn_point_cloud, spawn_point_cloud};
use crate::engine::colour::config::ColourConfig;
use crate::engine::loading::loaded_model::LoadedModel;
use crate::engine::mesh::point_cloud_mesh::PointCloud;
use crate::engine::render::point_material::PointCloudMaterial;
use crate::engine::systems::display_settings::{PlaneDisplay, PointStyle};

/// Replace the scene contents with the newly loaded model.
///
/// Order matters: old slabs go first, then the cloud is rebuilt and
/// recoloured, then the new slabs are spawned. All of it is queued in this
/// one run, so no frame renders a mix of old and new entities.
pub fn rebuild_scene(
    mut commands: Commands,
    model: Res<LoadedModel>,
    config: Res<ColourConfig>,
    style: Res<PointStyle>,
    display: Res<PlaneDisplay>,
    slabs: Query<Entity, With<PlaneSlab>>,
    clouds: Query<Entity, With<PointCloud>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut point_materials: ResMut<Assets<PointCloudMaterial>>,
    mut slab_materials: ResMut<Assets<StandardMaterial>>,
) {
    despawn_plane_slabs(&mut commands, &slabs);

    despawn_point_cloud(&mut commands, &clouds);
    spawn_point_cloud(
        &mut commands,
        &model,
        &config,
        &style,
        &mut meshes,
        &mut point_materials,
    );

    spawn_plane_slabs(
        &mut commands,
        &model,
        &display,
        &mut meshes,
        &mut slab_materials,
    );

    println!(
        "Scene rebuilt for {}: {} slabs replaced by {}",
        model.model_id,
        slabs.iter().count(),
        model.planes.len()
    );
}
