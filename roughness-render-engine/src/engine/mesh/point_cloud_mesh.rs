use bevy::asset::RenderAssetUsages;
use bevy::color::ColorToComponents;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

use crate::engine::colour::interpolation::Rgb;

/// Marker for the entity drawing the loaded point cloud.
#[derive(Component)]
pub struct PointCloud;

/// Sprite corners in UV space. The vertex shader expands each point along
/// the camera's right and up vectors using these.
const QUAD_CORNERS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Create the point sprite mesh: four vertices per point sharing its position.
///
/// Kept in the main world too, so recolouring can rewrite the colour attribute
/// in place without rebuilding the geometry.
pub fn create_point_cloud_mesh(positions: &[[f32; 3]], colours: &[Rgb]) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());

    let vertex_positions: Vec<[f32; 3]> = positions
        .iter()
        .flat_map(|position| [*position; 4])
        .collect();
    let uvs: Vec<[f32; 2]> = (0..positions.len()).flat_map(|_| QUAD_CORNERS).collect();
    let indices: Vec<u32> = (0..positions.len() as u32)
        .flat_map(|point| QUAD_INDICES.map(|i| point * 4 + i))
        .collect();

    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertex_positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    set_point_colours(&mut mesh, colours);
    mesh
}

/// Replace the per-point colours of a sprite mesh.
pub fn set_point_colours(mesh: &mut Mesh, colours: &[Rgb]) {
    let vertex_colours: Vec<[f32; 4]> = colours
        .iter()
        .flat_map(|colour| [to_vertex_colour(*colour); 4])
        .collect();
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, vertex_colours);
}

/// Convert a raw colour to a linear RGBA vertex colour.
///
/// Raw colours may hold NaN or values outside [0, 1] after extrapolation;
/// NaN becomes 0 and everything else is clamped.
pub fn to_vertex_colour(colour: Rgb) -> [f32; 4] {
    let [r, g, b] = colour.map(|c| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) });
    Color::srgb(r, g, b).to_linear().to_f32_array()
}
