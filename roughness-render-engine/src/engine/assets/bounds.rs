use bevy::prelude::*;

/// Axis-aligned extent of a loaded point cloud in engine coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCloudBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl PointCloudBounds {
    /// Bounding box of `positions`, or `None` for an empty cloud.
    pub fn from_positions(positions: &[[f32; 3]]) -> Option<Self> {
        let (first, rest) = positions.split_first()?;
        let first = Vec3::from_array(*first);

        let (min, max) = rest.iter().fold((first, first), |(min, max), p| {
            let p = Vec3::from_array(*p);
            (min.min(p), max.max(p))
        });

        Some(Self { min, max })
    }

    /// Centre of the box, removed from every point when a cloud is placed.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis, used to frame the camera.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cloud_has_no_bounds() {
        assert!(PointCloudBounds::from_positions(&[]).is_none());
    }

    #[test]
    fn bounds_cover_all_points() {
        let bounds = PointCloudBounds::from_positions(&[
            [1.0, -2.0, 3.0],
            [-1.0, 4.0, 0.0],
            [0.0, 0.0, 5.0],
        ])
        .unwrap();
        assert_eq!(bounds.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 4.0, 5.0));
        assert_eq!(bounds.center(), Vec3::new(0.0, 1.0, 2.5));
        assert_eq!(bounds.size(), Vec3::new(2.0, 6.0, 5.0));
    }
}
