/// Asset directory holding the model catalog and one folder per model.
pub const RELATIVE_MODELS_PATH: &str = "models";

/// Catalog file listing the available models.
pub const MODEL_CATALOG_FILE: &str = "index.models.json";

/// Point cloud file used when the catalog entry names none.
pub const DEFAULT_CLOUD_FILE: &str = "cloud.xyz";

/// Surface roughness tree file inside each model folder.
pub const PLANE_TREE_FILE: &str = "surfaces.planes.json";

/// Shader used to expand points into camera-facing sprites.
pub const POINT_CLOUD_SHADER_PATH: &str = "shaders/point_cloud.wgsl";

pub fn catalog_path() -> String {
    format!("{}/{}", RELATIVE_MODELS_PATH, MODEL_CATALOG_FILE)
}

pub fn cloud_path(model_id: &str, cloud_file: Option<&str>) -> String {
    format!(
        "{}/{}/{}",
        RELATIVE_MODELS_PATH,
        model_id,
        cloud_file.unwrap_or(DEFAULT_CLOUD_FILE)
    )
}

pub fn plane_tree_path(model_id: &str) -> String {
    format!("{}/{}/{}", RELATIVE_MODELS_PATH, model_id, PLANE_TREE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_model_relative_paths() {
        assert_eq!(catalog_path(), "models/index.models.json");
        assert_eq!(cloud_path("geology_01", None), "models/geology_01/cloud.xyz");
        assert_eq!(
            cloud_path("geology_01", Some("scan.laz")),
            "models/geology_01/scan.laz"
        );
        assert_eq!(
            plane_tree_path("geology_01"),
            "models/geology_01/surfaces.planes.json"
        );
    }
}
