use bevy::prelude::*;
use constants::coordinate_system::source_to_target;

use super::config::{Axis, ColourConfig};
use super::interpolation::{Rgb, inverse_lerp, lerp, lerp_colour, lerp_colour_hsv, rgb_u8_to_unit};
use crate::engine::surface::flatten::PlaneDescriptor;

/// How point colours are derived for the current model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointColouring {
    /// Continuous gradient over the cloud's extent on the configured axis.
    Gradient,
    /// Hard split at a plane position on the configured axis.
    Threshold(f32),
}

impl PointColouring {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::Threshold(_) => "threshold",
        }
    }
}

/// Pick the colouring mode: threshold against the first plane whenever the
/// model has planes, gradient otherwise.
pub fn select_colouring(
    config: &ColourConfig,
    planes: &[PlaneDescriptor],
    cloud_center: Vec3,
) -> PointColouring {
    planes
        .first()
        .map(|plane| PointColouring::Threshold(plane_threshold(plane, config.axis, cloud_center)))
        .unwrap_or(PointColouring::Gradient)
}

/// Plane centre on `axis`, expressed in the re-centred point cloud frame.
pub fn plane_threshold(plane: &PlaneDescriptor, axis: Axis, cloud_center: Vec3) -> f32 {
    (source_to_target(plane.center) - cloud_center)[axis.index()]
}

/// Compute one colour per point. The result replaces any previous colours.
pub fn colour_points(
    points: &[[f32; 3]],
    config: &ColourConfig,
    colouring: PointColouring,
) -> Vec<Rgb> {
    match colouring {
        PointColouring::Gradient => colours_by_gradient(points, config.axis, config),
        PointColouring::Threshold(threshold) => {
            colours_by_threshold(points, config.axis, threshold, config)
        }
    }
}

/// Gradient colouring over the data extent on `axis`, remapped into the
/// configured depth range. Parameters are not clamped: values outside [0, 1]
/// extrapolate, and a flat cloud yields NaN or infinite channels.
pub fn colours_by_gradient(points: &[[f32; 3]], axis: Axis, config: &ColourConfig) -> Vec<Rgb> {
    let axis = axis.index();

    let (min_v, max_v) = points.iter().fold(
        (f32::INFINITY, f32::NEG_INFINITY),
        |(min_v, max_v), point| (min_v.min(point[axis]), max_v.max(point[axis])),
    );

    let min_colour = rgb_u8_to_unit(config.min_colour);
    let mid_colour = rgb_u8_to_unit(config.mid_colour);
    let max_colour = rgb_u8_to_unit(config.max_colour);

    let lerp_fn: fn(Rgb, Rgb, f32) -> Rgb = if config.use_hsv_lerp {
        lerp_colour_hsv
    } else {
        lerp_colour
    };

    points
        .iter()
        .map(|point| {
            let normalized = inverse_lerp(min_v, max_v, point[axis]);
            let value = lerp(config.min_depth, config.max_depth, normalized);

            if !config.use_mid_colour {
                lerp_fn(min_colour, max_colour, value)
            } else if value <= 0.5 {
                lerp_fn(min_colour, mid_colour, value * 2.0)
            } else {
                lerp_fn(mid_colour, max_colour, (value - 0.5) * 2.0)
            }
        })
        .collect()
}

/// Binary colouring: points beyond `threshold` on `axis` take the minimum
/// colour, all others the maximum colour.
pub fn colours_by_threshold(
    points: &[[f32; 3]],
    axis: Axis,
    threshold: f32,
    config: &ColourConfig,
) -> Vec<Rgb> {
    let axis = axis.index();
    let min_colour = rgb_u8_to_unit(config.min_colour);
    let max_colour = rgb_u8_to_unit(config.max_colour);

    points
        .iter()
        .map(|point| {
            if threshold - point[axis] < 0.0 {
                min_colour
            } else {
                max_colour
            }
        })
        .collect()
}
