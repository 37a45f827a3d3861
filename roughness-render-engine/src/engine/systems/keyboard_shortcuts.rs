use bevy::prelude::*;

use crate::engine::colour::config::Axis;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::assets::model_catalog::ModelCatalog;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::colour::config::ColourConfig;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::loading::loaded_model::LoadedModel;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::loading::model_loader::ModelLoader;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::display_settings::{PlaneDisplay, PointStyle};
#[cfg(not(target_arch = "wasm32"))]
use constants::render_settings::POINT_SIZE_STEP;

/// Viewer actions reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shortcut {
    SetAxis(Axis),
    ToggleHsvLerp,
    ToggleMidColour,
    InvertRange,
    TogglePlanes,
    GrowPoints,
    ShrinkPoints,
    NextModel,
}

pub fn shortcut_for(key: KeyCode) -> Option<Shortcut> {
    match key {
        KeyCode::Digit1 => Some(Shortcut::SetAxis(Axis::X)),
        KeyCode::Digit2 => Some(Shortcut::SetAxis(Axis::Y)),
        KeyCode::Digit3 => Some(Shortcut::SetAxis(Axis::Z)),
        KeyCode::KeyH => Some(Shortcut::ToggleHsvLerp),
        KeyCode::KeyM => Some(Shortcut::ToggleMidColour),
        KeyCode::KeyR => Some(Shortcut::InvertRange),
        KeyCode::KeyP => Some(Shortcut::TogglePlanes),
        KeyCode::BracketRight => Some(Shortcut::GrowPoints),
        KeyCode::BracketLeft => Some(Shortcut::ShrinkPoints),
        KeyCode::KeyN => Some(Shortcut::NextModel),
        _ => None,
    }
}

/// Apply shortcuts pressed this frame. Resources are only touched by the
/// shortcut that targets them, so change detection stays quiet otherwise.
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut colour_config: ResMut<ColourConfig>,
    mut point_style: ResMut<PointStyle>,
    mut plane_display: ResMut<PlaneDisplay>,
    mut model_loader: ResMut<ModelLoader>,
    catalog: Option<Res<ModelCatalog>>,
    loaded_model: Option<Res<LoadedModel>>,
) {
    for shortcut in keyboard.get_just_pressed().filter_map(|key| shortcut_for(*key)) {
        match shortcut {
            Shortcut::SetAxis(axis) => {
                colour_config.axis = axis;
                info!("Colour axis: {:?}", axis);
            }
            Shortcut::ToggleHsvLerp => {
                colour_config.use_hsv_lerp = !colour_config.use_hsv_lerp;
                info!("HSV interpolation: {}", colour_config.use_hsv_lerp);
            }
            Shortcut::ToggleMidColour => {
                colour_config.use_mid_colour = !colour_config.use_mid_colour;
                info!("Mid colour: {}", colour_config.use_mid_colour);
            }
            Shortcut::InvertRange => {
                colour_config.invert_range();
                info!(
                    "Depth range: {} -> {}",
                    colour_config.min_depth, colour_config.max_depth
                );
            }
            Shortcut::TogglePlanes => {
                plane_display.visible = !plane_display.visible;
                info!("Planes visible: {}", plane_display.visible);
            }
            Shortcut::GrowPoints => {
                point_style.size = point_style.scaled_size(POINT_SIZE_STEP);
                info!("Point size: {}", point_style.size);
            }
            Shortcut::ShrinkPoints => {
                point_style.size = point_style.scaled_size(1.0 / POINT_SIZE_STEP);
                info!("Point size: {}", point_style.size);
            }
            Shortcut::NextModel => {
                let Some(catalog) = catalog.as_ref() else {
                    continue;
                };
                let current = model_loader
                    .pending_model()
                    .map(str::to_owned)
                    .or_else(|| loaded_model.as_ref().map(|m| m.model_id.clone()));
                if let Some(next) = catalog.next_after(current.as_deref()) {
                    info!("Switching to model {}", next.id);
                    model_loader.request(next.id.clone());
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn handle_keyboard_shortcuts() {
    // No keyboard shortcuts in WASM builds - the viewer is controlled via RPC only.
}
