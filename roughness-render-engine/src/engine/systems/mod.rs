//! Runtime systems for viewer settings and diagnostics.
//!
//! Holds the display setting resources edited from RPC and the keyboard,
//! the native keyboard shortcuts, and FPS reporting.

/// Point style and plane display resources with validation helpers.
pub mod display_settings;

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to frontend via RPC and updates native UI overlays.
pub mod fps_tracking;

/// Keyboard shortcuts for colour, display and model switching (native only).
pub mod keyboard_shortcuts;
