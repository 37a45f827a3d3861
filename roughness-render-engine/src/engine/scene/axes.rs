use bevy::prelude::*;
use constants::render_settings::AXES_HELPER_LENGTH;

/// Draw the X/Y/Z axes helper at the origin of the re-centred scene.
pub fn draw_axes_helper(mut gizmos: Gizmos) {
    gizmos.axes(Transform::IDENTITY, AXES_HELPER_LENGTH);
}
