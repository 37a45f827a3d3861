use bevy::prelude::*;
use constants::render_settings::{DEFAULT_POINT_SIZE, MAX_POINT_SIZE, MIN_POINT_SIZE};

use crate::error::{ViewerError, ViewerResult};

/// Point sprite appearance.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    /// World-space sprite size.
    pub size: f32,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_POINT_SIZE,
        }
    }
}

impl PointStyle {
    /// Accept a size only inside the supported range.
    pub fn validated_size(size: f32) -> ViewerResult<f32> {
        if (MIN_POINT_SIZE..=MAX_POINT_SIZE).contains(&size) {
            Ok(size)
        } else {
            Err(ViewerError::InvalidParameter {
                reason: format!(
                    "point size {size} outside {MIN_POINT_SIZE}..={MAX_POINT_SIZE}"
                ),
            })
        }
    }

    /// Size multiplied by `factor`, kept inside the supported range.
    pub fn scaled_size(&self, factor: f32) -> f32 {
        (self.size * factor).clamp(MIN_POINT_SIZE, MAX_POINT_SIZE)
    }
}

/// Visibility of all plane slabs at once.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlaneDisplay {
    pub visible: bool,
}

impl Default for PlaneDisplay {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl PlaneDisplay {
    pub fn visibility(&self) -> Visibility {
        if self.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        }
    }
}
