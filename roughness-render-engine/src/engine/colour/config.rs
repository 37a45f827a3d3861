use bevy::prelude::*;
use constants::render_settings::{
    DEFAULT_COLOUR_AXIS, DEFAULT_MAX_COLOUR, DEFAULT_MAX_DEPTH, DEFAULT_MID_COLOUR,
    DEFAULT_MIN_COLOUR, DEFAULT_MIN_DEPTH, DEFAULT_USE_HSV_LERP, DEFAULT_USE_MID_COLOUR,
};
use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};

/// Coordinate axis of the (re-centred) point cloud used for depth colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    /// Component index into a position triple.
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl TryFrom<i64> for Axis {
    type Error = ViewerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::X),
            1 => Ok(Self::Y),
            2 => Ok(Self::Z),
            other => Err(ViewerError::InvalidAxis(other)),
        }
    }
}

impl From<Axis> for u8 {
    fn from(axis: Axis) -> Self {
        axis.index() as u8
    }
}

/// User-editable depth colouring settings.
///
/// Edits go through `ResMut<ColourConfig>`; bevy change detection re-runs
/// the colouring systems, so nothing else needs notifying.
/// Both depths are normalised to `[0, 1]`. `min_depth > max_depth` is
/// accepted and reverses the gradient.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColourConfig {
    pub axis: Axis,
    pub min_depth: f32,
    pub max_depth: f32,
    pub min_colour: [u8; 3],
    pub mid_colour: [u8; 3],
    pub max_colour: [u8; 3],
    pub use_mid_colour: bool,
    pub use_hsv_lerp: bool,
}

impl Default for ColourConfig {
    fn default() -> Self {
        Self {
            axis: Axis::try_from(DEFAULT_COLOUR_AXIS as i64).unwrap_or_default(),
            min_depth: DEFAULT_MIN_DEPTH,
            max_depth: DEFAULT_MAX_DEPTH,
            min_colour: DEFAULT_MIN_COLOUR,
            mid_colour: DEFAULT_MID_COLOUR,
            max_colour: DEFAULT_MAX_COLOUR,
            use_mid_colour: DEFAULT_USE_MID_COLOUR,
            use_hsv_lerp: DEFAULT_USE_HSV_LERP,
        }
    }
}

impl ColourConfig {
    /// Accepts a normalised depth in `0.0..=1.0`; NaN and infinities fail.
    pub fn validated_depth(depth: f32) -> ViewerResult<f32> {
        if (0.0..=1.0).contains(&depth) {
            Ok(depth)
        } else {
            Err(ViewerError::InvalidParameter {
                reason: format!("depth {depth} outside 0..=1"),
            })
        }
    }

    /// Swap the ends of the depth range, flipping the gradient direction.
    pub fn invert_range(&mut self) {
        std::mem::swap(&mut self.min_depth, &mut self.max_depth);
    }
}
