//! Surface roughness trees.
//!
//! Plane-tree files are parsed as plain data and flattened into plane
//! descriptors for the slab mesh builder.

/// Flattening of a roughness tree into depth-tagged plane descriptors.
pub mod flatten;

/// Serde model of plane-tree files and the asset type they load into.
pub mod roughness_tree;
