use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use constants::coordinate_system::source_to_target;

use crate::engine::surface::flatten::PlaneDescriptor;

/// Vertices per slab: two faces of two triangles each, no index buffer.
pub const SLAB_VERTEX_COUNT: usize = 12;

/// Slab opacity for a tree depth. Deeper planes are fainter.
pub fn slab_opacity(depth: u32) -> f32 {
    0.5 + 0.5 / depth as f32
}

/// Triangle positions of a plane slab in engine space, re-centred on the cloud.
///
/// The quad spans the plane's two in-plane extents, shrunk by `1 / depth`.
/// One copy sits `ra` along the normal and one `ra` against it.
pub fn build_slab_positions(
    plane: &PlaneDescriptor,
    cloud_center: Vec3,
) -> [[f32; 3]; SLAB_VERTEX_COUNT] {
    let center = source_to_target(plane.center);
    let first = source_to_target(plane.first);
    let second = source_to_target(plane.second);
    let normal = source_to_target(plane.normal).normalize_or_zero();

    let scale = 1.0 / plane.depth as f32;
    let df = (first - center) * scale;
    let ds = (second - center) * scale;

    let corners = [center - df, center - ds, center + df, center + ds];
    let offset = normal * plane.ra;

    let mut positions = [[0.0; 3]; SLAB_VERTEX_COUNT];
    for (face, side_offset) in [offset, -offset].into_iter().enumerate() {
        let [a, b, c, d] = corners.map(|corner| corner + side_offset - cloud_center);
        for (i, vertex) in [a, b, c, c, d, a].into_iter().enumerate() {
            positions[face * 6 + i] = vertex.to_array();
        }
    }

    positions
}

/// Build the slab mesh for one plane.
/// Geometry stays in the main world as well so pointer picking can ray cast it.
pub fn create_slab_mesh(plane: &PlaneDescriptor, cloud_center: Vec3) -> Mesh {
    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());

    let positions = build_slab_positions(plane, cloud_center).to_vec();
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

/// Unlit, double sided, alpha blended material for a slab at `depth`.
pub fn slab_material(base: Color, depth: u32) -> StandardMaterial {
    StandardMaterial {
        base_color: base.with_alpha(slab_opacity(depth)),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bevy::render::mesh::VertexAttributeValues;

    fn unit_plane(depth: u32, ra: f32) -> PlaneDescriptor {
        PlaneDescriptor {
            center: Vec3::ZERO,
            first: Vec3::X,
            second: Vec3::Y,
            normal: Vec3::Z,
            depth,
            ra,
        }
    }

    #[test]
    fn opacity_fades_with_depth() {
        assert_eq!(slab_opacity(1), 1.0);
        assert_eq!(slab_opacity(2), 0.75);
        assert_relative_eq!(slab_opacity(4), 0.625);
    }

    #[test]
    fn corners_follow_remapped_extents() {
        let positions = build_slab_positions(&unit_plane(1, 0.5), Vec3::ZERO);

        // Source Y extent and Z normal become engine Z extent and Y offset.
        let upper = [
            [-1.0, 0.5, 0.0],
            [0.0, 0.5, -1.0],
            [1.0, 0.5, 0.0],
            [1.0, 0.5, 0.0],
            [0.0, 0.5, 1.0],
            [-1.0, 0.5, 0.0],
        ];
        let lower = upper.map(|[x, y, z]| [x, -y, z]);

        assert_eq!(&positions[..6], &upper);
        assert_eq!(&positions[6..], &lower);
    }

    #[test]
    fn depth_shrinks_quad() {
        let positions = build_slab_positions(&unit_plane(2, 0.0), Vec3::ZERO);
        assert_eq!(positions[0], [-0.5, 0.0, 0.0]);
        assert_eq!(positions[4], [0.0, 0.0, 0.5]);
    }

    #[test]
    fn positions_are_recentred_on_cloud() {
        let plane = PlaneDescriptor {
            center: Vec3::new(10.0, 20.0, 30.0),
            first: Vec3::new(11.0, 20.0, 30.0),
            second: Vec3::new(10.0, 21.0, 30.0),
            normal: Vec3::Z,
            depth: 1,
            ra: 0.0,
        };
        // Engine-space centre is (10, 30, 20).
        let positions = build_slab_positions(&plane, Vec3::new(10.0, 30.0, 20.0));
        assert_eq!(positions[0], [-1.0, 0.0, 0.0]);
        assert_eq!(positions[1], [0.0, 0.0, -1.0]);
    }

    #[test]
    fn normal_is_normalised_before_offset() {
        let plane = PlaneDescriptor {
            normal: Vec3::new(0.0, 0.0, 4.0),
            ..unit_plane(1, 0.25)
        };
        let positions = build_slab_positions(&plane, Vec3::ZERO);
        assert_eq!(positions[0][1], 0.25);
        assert_eq!(positions[6][1], -0.25);
    }

    #[test]
    fn zero_normal_collapses_faces() {
        let plane = PlaneDescriptor {
            normal: Vec3::ZERO,
            ..unit_plane(1, 1.0)
        };
        let positions = build_slab_positions(&plane, Vec3::ZERO);
        assert_eq!(&positions[..6], &positions[6..]);
    }

    #[test]
    fn mesh_is_non_indexed_triangle_list() {
        let mesh = create_slab_mesh(&unit_plane(1, 0.1), Vec3::ZERO);
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::TriangleList);
        assert!(mesh.indices().is_none());
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(values)) => {
                assert_eq!(values.len(), SLAB_VERTEX_COUNT)
            }
            other => panic!("unexpected position attribute: {other:?}"),
        }
    }

    #[test]
    fn material_is_translucent_and_double_sided() {
        let material = slab_material(Color::WHITE, 2);
        assert_eq!(material.base_color.alpha(), 0.75);
        assert!(material.unlit);
        assert!(material.double_sided);
        assert!(material.cull_mode.is_none());
        assert!(matches!(material.alpha_mode, AlphaMode::Blend));
    }
}
