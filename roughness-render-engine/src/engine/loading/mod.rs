//! Model loading pipeline.
//!
//! The catalog is fetched once at startup; each model is then loaded as a
//! point cloud plus an optional plane tree through the asset server, and
//! published as a [`loaded_model::LoadedModel`] resource when both settle.

/// Model catalog request at startup and first-model selection.
pub mod catalog_loader;

/// Per-load derived data: re-centred points, cloud centre and planes.
pub mod loaded_model;

/// Cancel-and-restart load queue and completion polling.
///
/// Only the most recent request completes; earlier in-flight handles are dropped.
pub mod model_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;
