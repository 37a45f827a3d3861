//! Scene contents for the loaded model.
//!
//! Spawns and updates the point cloud sprite entity, the roughness plane
//! slabs with their hover highlight, and the axes helper.

/// Axes helper gizmo at the scene origin.
pub mod axes;

/// Plane slab entities, visibility toggling and pointer hover tinting.
pub mod planes;

/// Point cloud entity, recolouring and point size updates.
///
/// Also reports gradient/threshold mode switches to the frontend.
pub mod point_cloud;

/// Ordered scene replacement when a new model finishes loading.
pub mod rebuild;
