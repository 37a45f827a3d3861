//! Asset types for model data.
//!
//! Covers the model catalog, raw point clouds with their loader, and the
//! spatial bounds derived from them. Plane trees are defined under
//! `engine::surface` and registered alongside these in `app_setup`.

/// Axis-aligned bounds of a point cloud and the centre used for re-centring.
pub mod bounds;

/// Model catalog listing every model folder and its cloud file.
pub mod model_catalog;

/// Point cloud asset and its XYZ/LAS/LAZ loader.
pub mod point_cloud_file;
