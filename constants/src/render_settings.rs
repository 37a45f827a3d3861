use bevy::prelude::*;

/// Engine axis used for depth colouring on startup (vertical after the remap).
pub const DEFAULT_COLOUR_AXIS: usize = 2;

/// Lower end of the user depth range.
pub const DEFAULT_MIN_DEPTH: f32 = 0.0;

/// Upper end of the user depth range.
pub const DEFAULT_MAX_DEPTH: f32 = 1.0;

/// Gradient start colour (0-255 per channel).
pub const DEFAULT_MIN_COLOUR: [u8; 3] = [239, 138, 98];

/// Optional gradient midpoint colour.
pub const DEFAULT_MID_COLOUR: [u8; 3] = [247, 247, 247];

/// Gradient end colour.
pub const DEFAULT_MAX_COLOUR: [u8; 3] = [103, 169, 207];

pub const DEFAULT_USE_MID_COLOUR: bool = false;
pub const DEFAULT_USE_HSV_LERP: bool = true;

/// World-space point sprite size and its accepted range.
pub const DEFAULT_POINT_SIZE: f32 = 0.01;
pub const MIN_POINT_SIZE: f32 = 0.0001;
pub const MAX_POINT_SIZE: f32 = 1.0;

/// Multiplicative step used by the point size shortcuts.
pub const POINT_SIZE_STEP: f32 = 1.25;

/// Slab base colour; alpha is derived from tree depth.
pub const SLAB_COLOUR: Color = Color::srgb(1.0, 1.0, 1.0);

/// Tint applied to a slab while the pointer hovers it.
pub const SLAB_HOVER_COLOUR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Length of the axes helper drawn at the origin.
pub const AXES_HELPER_LENGTH: f32 = 5.0;

/// Camera start position and orbit limits.
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(0.0, 0.0, 10.0);
pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_MIN_DISTANCE: f32 = 0.5;
pub const CAMERA_MAX_DISTANCE: f32 = 80.0;
