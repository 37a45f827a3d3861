//! Mesh builders for the point cloud and the roughness plane slabs.

/// Plane slab geometry: remapped, re-centred quads offset by the roughness amplitude.
pub mod plane_slab;

/// Point sprite mesh with per-point vertex colours.
///
/// Four vertices per point; the point material expands them into camera-facing quads.
pub mod point_cloud_mesh;
