//! Viewport camera for inspecting the point cloud and plane slabs.
//!
//! Orbit controls around a focus point with smoothed interpolation and
//! keyboard/mouse input handling.

/// Viewport camera resource and controller system for scene navigation.
pub mod viewport_camera;
