use bevy::prelude::*;
use constants::render_settings::{SLAB_COLOUR, SLAB_HOVER_COLOUR};

use crate::engine::loading::loaded_model::LoadedModel;
use crate::engine::mesh::plane_slab::{create_slab_mesh, slab_material, slab_opacity};
use crate::engine::systems::display_settings::PlaneDisplay;

/// One roughness plane slab. Each slab owns its material so it can be tinted alone.
#[derive(Component, Debug)]
pub struct PlaneSlab {
    pub depth: u32,
}

/// Slab colour for its hover state, with the depth-derived opacity.
pub fn slab_tint(hovered: bool, depth: u32) -> Color {
    let base = if hovered { SLAB_HOVER_COLOUR } else { SLAB_COLOUR };
    base.with_alpha(slab_opacity(depth))
}

pub fn despawn_plane_slabs(commands: &mut Commands, slabs: &Query<Entity, With<PlaneSlab>>) {
    for entity in slabs.iter() {
        commands.entity(entity).despawn();
    }
}

/// Spawn one pickable slab per plane of the loaded model.
pub fn spawn_plane_slabs(
    commands: &mut Commands,
    model: &LoadedModel,
    display: &PlaneDisplay,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    for plane in &model.planes {
        let mesh = meshes.add(create_slab_mesh(plane, model.cloud_center));
        let material = materials.add(slab_material(SLAB_COLOUR, plane.depth));

        commands
            .spawn((
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::default(),
                display.visibility(),
                PlaneSlab { depth: plane.depth },
            ))
            .observe(highlight_slab)
            .observe(restore_slab);
    }
}

fn highlight_slab(
    trigger: Trigger<Pointer<Over>>,
    slabs: Query<(&PlaneSlab, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    tint_slab(trigger.target(), true, &slabs, &mut materials);
}

fn restore_slab(
    trigger: Trigger<Pointer<Out>>,
    slabs: Query<(&PlaneSlab, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    tint_slab(trigger.target(), false, &slabs, &mut materials);
}

fn tint_slab(
    entity: Entity,
    hovered: bool,
    slabs: &Query<(&PlaneSlab, &MeshMaterial3d<StandardMaterial>)>,
    materials: &mut Assets<StandardMaterial>,
) {
    let Ok((slab, material)) = slabs.get(entity) else {
        return;
    };
    if let Some(material) = materials.get_mut(&material.0) {
        material.base_color = slab_tint(hovered, slab.depth);
    }
}

/// Show or hide every slab when the plane display setting changes.
pub fn apply_plane_visibility(
    display: Res<PlaneDisplay>,
    mut slabs: Query<&mut Visibility, With<PlaneSlab>>,
) {
    for mut visibility in &mut slabs {
        visibility.set_if_neq(display.visibility());
    }
}
