//! Custom render materials.

/// Point sprite material: billboards each point in the vertex shader and
/// shades it with its vertex colour.
pub mod point_material;
