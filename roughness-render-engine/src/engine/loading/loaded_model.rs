use bevy::prelude::*;

use crate::engine::assets::point_cloud_file::PointCloudData;
use crate::engine::colour::config::ColourConfig;
use crate::engine::colour::depth_colouriser::{PointColouring, colour_points, select_colouring};
use crate::engine::colour::interpolation::Rgb;
use crate::engine::surface::flatten::{PlaneDescriptor, flatten_surface_tree};
use crate::engine::surface::roughness_tree::SurfaceRoughnessFile;

/// Everything derived from one completed model load.
///
/// Replaced wholesale on every load; nothing survives from the previous model.
#[derive(Resource, Debug, Clone, Default)]
pub struct LoadedModel {
    pub model_id: String,
    /// Re-centred positions, in file order.
    pub positions: Vec<[f32; 3]>,
    /// Bounding box centre removed from the raw positions.
    pub cloud_center: Vec3,
    pub planes: Vec<PlaneDescriptor>,
}

impl LoadedModel {
    pub fn build(
        model_id: impl Into<String>,
        cloud: &PointCloudData,
        plane_file: Option<&SurfaceRoughnessFile>,
    ) -> Self {
        let model_id = model_id.into();
        let (positions, cloud_center) = cloud.recentred();

        let planes = match plane_file.and_then(SurfaceRoughnessFile::root) {
            Some(root) => flatten_surface_tree(root),
            None => {
                warn!("Model {} has no usable plane tree, showing points only", model_id);
                Vec::new()
            }
        };

        Self {
            model_id,
            positions,
            cloud_center,
            planes,
        }
    }

    pub fn colouring(&self, config: &ColourConfig) -> PointColouring {
        select_colouring(config, &self.planes, self.cloud_center)
    }

    pub fn colours(&self, config: &ColourConfig) -> Vec<Rgb> {
        colour_points(&self.positions, config, self.colouring(config))
    }
}
