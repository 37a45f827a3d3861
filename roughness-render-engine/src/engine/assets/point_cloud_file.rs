use std::io::Cursor;

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use bevy::math::DVec3;
use constants::coordinate_system::source_to_target_f64;
use las::Reader as LasReader;

use super::bounds::PointCloudBounds;
use crate::error::{ViewerError, ViewerResult};

/// Point positions as read from disk, in engine axis order.
///
/// `origin` is an offset already subtracted from `positions` at parse time.
/// It stays zero for text clouds; LAS clouds are centred in f64 so large
/// georeferenced coordinates keep their precision.
#[derive(Asset, TypePath, Debug, Clone, Default, PartialEq)]
pub struct PointCloudData {
    pub positions: Vec<[f32; 3]>,
    pub origin: DVec3,
}

impl PointCloudData {
    pub fn bounds(&self) -> Option<PointCloudBounds> {
        PointCloudBounds::from_positions(&self.positions)
    }

    /// Copy of the positions shifted so the bounding box centre sits at the
    /// origin, together with the centre that was removed (including `origin`).
    pub fn recentred(&self) -> (Vec<[f32; 3]>, Vec3) {
        let residual = self.bounds().map(|b| b.center()).unwrap_or(Vec3::ZERO);
        let positions = self
            .positions
            .iter()
            .map(|p| (Vec3::from_array(*p) - residual).to_array())
            .collect();
        (positions, (self.origin + residual.as_dvec3()).as_vec3())
    }
}

/// Parse an ASCII XYZ cloud: one point per line, whitespace separated.
///
/// Only the first three values are used, so `x y z r g b` lines are accepted.
/// Blank lines and lines starting with `#` or `//` are skipped.
pub fn parse_xyz(text: &str) -> ViewerResult<Vec<[f32; 3]>> {
    let mut positions = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }

        let line_number = index + 1;
        let mut values = line.split_whitespace();
        let mut point = [0.0f32; 3];

        for (axis, name) in ["x", "y", "z"].iter().enumerate() {
            let token = values.next().ok_or_else(|| ViewerError::PointCloudParse {
                line: line_number,
                reason: format!("missing {name} coordinate"),
            })?;
            point[axis] = token.parse().map_err(|_| ViewerError::PointCloudParse {
                line: line_number,
                reason: format!("invalid {name} coordinate: {token}"),
            })?;
        }

        positions.push(point);
    }

    Ok(positions)
}

/// Read LAS or LAZ bytes. LAS is Z-up, so points are remapped into engine axes.
///
/// Points are centred on their bounding box in f64 before narrowing to f32.
pub fn parse_las(bytes: Vec<u8>) -> ViewerResult<PointCloudData> {
    let mut reader = LasReader::new(Cursor::new(bytes))?;

    let points = reader
        .points()
        .map(|point| {
            let point = point?;
            Ok(source_to_target_f64(DVec3::new(point.x, point.y, point.z)))
        })
        .collect::<ViewerResult<Vec<DVec3>>>()?;

    let origin = match points.split_first() {
        Some((first, rest)) => {
            let (min, max) = rest
                .iter()
                .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
            (min + max) * 0.5
        }
        None => DVec3::ZERO,
    };

    let positions = points
        .iter()
        .map(|p| (*p - origin).as_vec3().to_array())
        .collect();

    Ok(PointCloudData { positions, origin })
}

/// Asset loader for `.xyz`, `.las` and `.laz` point clouds.
#[derive(Default)]
pub struct PointCloudLoader;

impl AssetLoader for PointCloudLoader {
    type Asset = PointCloudData;
    type Settings = ();
    type Error = ViewerError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &(),
        load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;

        let is_las = load_context
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("las") || ext.eq_ignore_ascii_case("laz"));

        let cloud = if is_las {
            parse_las(bytes)?
        } else {
            let text = String::from_utf8(bytes).map_err(|e| ViewerError::PointCloudParse {
                line: 0,
                reason: format!("file is not UTF-8: {e}"),
            })?;
            PointCloudData {
                positions: parse_xyz(&text)?,
                ..default()
            }
        };

        info!(
            "Parsed {} points from {}",
            cloud.positions.len(),
            load_context.path().display()
        );

        Ok(cloud)
    }

    fn extensions(&self) -> &[&str] {
        &["xyz", "las", "laz"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn parses_plain_and_coloured_lines() {
        let text = "1 2 3\n4.5 -6 7e-1 255 0 0\n";
        let points = parse_xyz(text).unwrap();
        assert_eq!(points, vec![[1.0, 2.0, 3.0], [4.5, -6.0, 0.7]]);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "# header\n\n// note\n  0 0 0  \n\t1\t1\t1\n";
        let points = parse_xyz(text).unwrap();
        assert_eq!(points, vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
    }

    #[test]
    fn short_line_reports_line_number() {
        let err = parse_xyz("0 0 0\n1 2\n").unwrap_err();
        assert!(matches!(
            err,
            ViewerError::PointCloudParse { line: 2, ref reason } if reason == "missing z coordinate"
        ));
    }

    #[test]
    fn bad_number_reports_token() {
        let err = parse_xyz("1 abc 3").unwrap_err();
        assert_eq!(err.to_string(), "point cloud line 1: invalid y coordinate: abc");
    }

    #[test]
    fn empty_file_is_an_empty_cloud() {
        assert!(parse_xyz("").unwrap().is_empty());
    }

    #[test]
    fn rejects_bytes_that_are_not_las() {
        assert!(matches!(
            parse_las(b"not a las file".to_vec()),
            Err(ViewerError::Las(_))
        ));
    }

    fn las_bytes(points: &[(f64, f64, f64)]) -> Vec<u8> {
        let mut writer = las::Writer::default();
        for &(x, y, z) in points {
            writer
                .write_point(las::Point {
                    x,
                    y,
                    z,
                    ..Default::default()
                })
                .unwrap();
        }
        writer.into_inner().unwrap().into_inner()
    }

    #[test]
    fn las_points_are_remapped_to_engine_axes() {
        let cloud = parse_las(las_bytes(&[(1.0, 2.0, 3.0)])).unwrap();

        // One point: all of it ends up in the origin.
        assert_eq!(cloud.positions, vec![[0.0, 0.0, 0.0]]);
        assert_abs_diff_eq!(cloud.origin.x, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cloud.origin.y, 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cloud.origin.z, 2.0, epsilon = 1e-9);

        let (_, center) = cloud.recentred();
        assert_abs_diff_eq!(center.x, 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(center.y, 3.0, epsilon = 1e-5);
        assert_abs_diff_eq!(center.z, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn las_offsets_swap_with_the_axes() {
        let cloud = parse_las(las_bytes(&[(1.0, 2.0, 3.0), (3.0, 2.0, 7.0)])).unwrap();

        let expected = [[-1.0, -2.0, 0.0], [1.0, 2.0, 0.0]];
        for (actual, expected) in cloud.positions.iter().zip(expected) {
            for axis in 0..3 {
                assert_abs_diff_eq!(actual[axis], expected[axis], epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn georeferenced_las_keeps_centimetres() {
        let cloud = parse_las(las_bytes(&[
            (500_000.01, 600_000.02, 10.0),
            (500_000.03, 600_000.06, 12.0),
        ]))
        .unwrap();

        assert_abs_diff_eq!(cloud.origin.x, 500_000.02, epsilon = 1e-6);
        assert_abs_diff_eq!(cloud.origin.z, 600_000.04, epsilon = 1e-6);

        let first = cloud.positions[0];
        assert_abs_diff_eq!(first[0], -0.01, epsilon = 1e-4);
        assert_abs_diff_eq!(first[1], -1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(first[2], -0.02, epsilon = 1e-4);
    }

    #[test]
    fn recentring_moves_box_centre_to_origin() {
        let cloud = PointCloudData {
            positions: vec![[0.0, 0.0, 0.0], [10.0, 2.0, -4.0]],
            ..default()
        };
        let (positions, center) = cloud.recentred();
        assert_eq!(center, Vec3::new(5.0, 1.0, -2.0));
        assert_eq!(positions, vec![[-5.0, -1.0, 2.0], [5.0, 1.0, -2.0]]);
    }

    #[test]
    fn recentring_adds_parse_origin_back() {
        let cloud = PointCloudData {
            positions: vec![[-1.0, 0.0, 0.0], [3.0, 0.0, 0.0]],
            origin: DVec3::new(100.0, 0.0, -50.0),
        };
        let (positions, center) = cloud.recentred();
        assert_eq!(center, Vec3::new(101.0, 0.0, -50.0));
        assert_eq!(positions, vec![[-2.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
    }

    #[test]
    fn recentring_empty_cloud_is_a_no_op() {
        let (positions, center) = PointCloudData::default().recentred();
        assert!(positions.is_empty());
        assert_eq!(center, Vec3::ZERO);
    }
}
