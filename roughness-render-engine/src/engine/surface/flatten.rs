use bevy::prelude::*;

use super::roughness_tree::SurfaceNode;

/// Plane extracted from one internal tree node. Coordinates stay in source
/// axis order; the mesh builder remaps them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneDescriptor {
    pub center: Vec3,
    pub first: Vec3,
    pub second: Vec3,
    pub normal: Vec3,
    /// 1-based tree depth, root = 1.
    pub depth: u32,
    /// Roughness amplitude: offset of each slab face from the plane.
    pub ra: f32,
}

impl PlaneDescriptor {
    fn from_node(node: &SurfaceNode, depth: u32) -> Self {
        let ra = node.roughness_amplitude().unwrap_or_else(|| {
            warn!("Surface node at depth {} has no roughness parameters", depth);
            0.0
        });

        Self {
            center: node.plane.center.into(),
            first: node.plane.first.into(),
            second: node.plane.second.into(),
            normal: node.plane.normal.into(),
            depth,
            ra,
        }
    }
}

/// Flatten a surface tree into plane descriptors in depth-first pre-order.
///
/// Only internal nodes contribute: leaves carry no usable roughness data.
/// Children are visited in file order, one level deeper than their parent.
pub fn flatten_surface_tree(root: &SurfaceNode) -> Vec<PlaneDescriptor> {
    let mut planes = Vec::new();
    let mut stack = vec![(root, 1u32)];

    while let Some((node, depth)) = stack.pop() {
        if node.is_leaf() {
            continue;
        }

        planes.push(PlaneDescriptor::from_node(node, depth));

        // Reversed so the first child is popped first.
        stack.extend(node.nodes.iter().rev().map(|child| (child, depth + 1)));
    }

    planes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::surface::roughness_tree::{
        RoughnessParam, RoughnessParams, SourceVector, SurfacePlane,
    };

    fn node(tag: f32, ra: Option<f32>, nodes: Vec<SurfaceNode>) -> SurfaceNode {
        SurfaceNode {
            plane: SurfacePlane {
                center: SourceVector {
                    x: tag,
                    y: 0.0,
                    z: 0.0,
                },
                ..default()
            },
            roughness_params: RoughnessParams {
                params: ra
                    .map(|value| {
                        vec![RoughnessParam {
                            name: "ra".to_string(),
                            value,
                        }]
                    })
                    .unwrap_or_default(),
            },
            nodes,
        }
    }

    fn leaf(tag: f32) -> SurfaceNode {
        node(tag, Some(0.0), Vec::new())
    }

    #[test]
    fn single_leaf_yields_nothing() {
        assert!(flatten_surface_tree(&leaf(0.0)).is_empty());
    }

    #[test]
    fn leaves_are_skipped_at_every_level() {
        let grandchild = node(3.0, Some(0.3), vec![leaf(4.0)]);
        let child = node(2.0, Some(0.2), vec![grandchild]);
        let root = node(1.0, Some(0.1), vec![leaf(5.0), child, leaf(6.0)]);

        let planes = flatten_surface_tree(&root);
        let depths: Vec<u32> = planes.iter().map(|p| p.depth).collect();
        let tags: Vec<f32> = planes.iter().map(|p| p.center.x).collect();
        assert_eq!(depths, vec![1, 2, 3]);
        assert_eq!(tags, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn leaf_children_leave_only_the_root() {
        let root = node(1.0, Some(0.1), vec![leaf(2.0), leaf(3.0)]);
        let planes = flatten_surface_tree(&root);
        assert_eq!(planes.len(), 1);
        assert_eq!(planes[0].depth, 1);
        assert_eq!(planes[0].ra, 0.1);
    }

    #[test]
    fn preserves_pre_order_and_amplitudes() {
        let left = node(2.0, Some(0.2), vec![node(3.0, Some(0.3), vec![leaf(9.0)])]);
        let right = node(4.0, Some(0.4), vec![leaf(9.0)]);
        let root = node(1.0, Some(0.1), vec![left, right]);

        let planes = flatten_surface_tree(&root);
        let tags: Vec<f32> = planes.iter().map(|p| p.center.x).collect();
        let depths: Vec<u32> = planes.iter().map(|p| p.depth).collect();
        let amplitudes: Vec<f32> = planes.iter().map(|p| p.ra).collect();

        assert_eq!(tags, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(depths, vec![1, 2, 3, 2]);
        assert_eq!(amplitudes, vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn missing_parameters_give_zero_amplitude() {
        let root = node(1.0, None, vec![leaf(2.0)]);
        let planes = flatten_surface_tree(&root);
        assert_eq!(planes.len(), 1);
        assert_eq!(planes[0].ra, 0.0);
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        let mut tree = leaf(0.0);
        for level in 0..1_000 {
            tree = node(level as f32, Some(0.01), vec![tree]);
        }
        let planes = flatten_surface_tree(&tree);
        assert_eq!(planes.len(), 1_000);
        assert_eq!(planes.last().map(|p| p.depth), Some(1_000));
    }
}
