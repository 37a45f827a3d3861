//! Shared constants for the surface roughness viewer.
//!
//! Holds the source-to-engine axis remap, default render and colour
//! settings, and the asset layout used to locate model data.

/// Axis remap between surface-roughness source data and engine space.
pub mod coordinate_system;

/// Asset paths for the model catalog, point clouds and plane trees.
pub mod path;

/// Default appearance values for points, slabs, camera and helpers.
pub mod render_settings;
