//! Point colouring: interpolation primitives, the user colour configuration
//! and the depth colouriser that turns positions into per-point colours.
//!
//! Everything here is engine independent apart from the `Resource` derive on
//! [`config::ColourConfig`], so it is unit tested without a running app.

/// User-editable colour settings and the colouring axis.
pub mod config;

/// Gradient and threshold colouring over point positions.
///
/// Also decides which of the two applies to the loaded model.
pub mod depth_colouriser;

/// RGB/HSV conversion and linear and hue-aware interpolation.
pub mod interpolation;
