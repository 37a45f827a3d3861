use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Point or direction as stored in plane-tree files, in source axis order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceVector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<SourceVector> for Vec3 {
    fn from(v: SourceVector) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for SourceVector {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Fitted plane of a node: centre, two in-plane extent points and a normal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfacePlane {
    pub center: SourceVector,
    pub first: SourceVector,
    pub second: SourceVector,
    pub normal: SourceVector,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoughnessParam {
    #[serde(default)]
    pub name: String,
    pub value: f32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoughnessParams {
    #[serde(default)]
    pub params: Vec<RoughnessParam>,
}

/// One node of the surface-roughness subdivision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceNode {
    pub plane: SurfacePlane,
    #[serde(default)]
    pub roughness_params: RoughnessParams,
    #[serde(default)]
    pub nodes: Vec<SurfaceNode>,
}

impl SurfaceNode {
    /// First roughness parameter, used as the slab half-thickness.
    pub fn roughness_amplitude(&self) -> Option<f32> {
        self.roughness_params.params.first().map(|param| param.value)
    }

    pub fn is_leaf(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRoughnessData {
    pub node: SurfaceNode,
}

/// Top-level wrapper around a tree root, as exported per surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRecord {
    pub surface_roughness_data: SurfaceRoughnessData,
}

/// Plane-tree files hold either one record or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SurfaceRecords {
    Many(Vec<SurfaceRecord>),
    One(SurfaceRecord),
}

/// Plane-tree file loaded through the asset server. Parsed as data only.
#[derive(Asset, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceRoughnessFile {
    pub records: SurfaceRecords,
}

impl SurfaceRoughnessFile {
    /// Root node of the first record, if the file holds any.
    pub fn root(&self) -> Option<&SurfaceNode> {
        match &self.records {
            SurfaceRecords::Many(records) => records.first(),
            SurfaceRecords::One(record) => Some(record),
        }
        .map(|record| &record.surface_roughness_data.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE_RECORD: &str = r#"{
        "surface_roughness_data": {
            "node": {
                "plane": {
                    "center": { "x": 1.0, "y": 2.0, "z": 3.0 },
                    "first": { "x": 2.0, "y": 2.0, "z": 3.0 },
                    "second": { "x": 1.0, "y": 3.0, "z": 3.0 },
                    "normal": { "x": 0.0, "y": 0.0, "z": 1.0 }
                },
                "roughness_params": { "params": [
                    { "name": "ra", "value": 0.25 },
                    { "name": "rq", "value": 0.5 }
                ] },
                "nodes": [
                    {
                        "plane": {
                            "center": { "x": 0.0, "y": 0.0, "z": 0.0 },
                            "first": { "x": 1.0, "y": 0.0, "z": 0.0 },
                            "second": { "x": 0.0, "y": 1.0, "z": 0.0 },
                            "normal": { "x": 0.0, "y": 0.0, "z": 1.0 }
                        }
                    }
                ]
            }
        }
    }"#;

    #[test]
    fn parses_single_record() {
        let file: SurfaceRoughnessFile = serde_json::from_str(SINGLE_RECORD).unwrap();
        let root = file.root().unwrap();
        assert_eq!(root.roughness_amplitude(), Some(0.25));
        assert_eq!(root.nodes.len(), 1);
        assert!(root.nodes[0].is_leaf());
        assert_eq!(root.nodes[0].roughness_amplitude(), None);
        assert_eq!(Vec3::from(root.plane.center), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn parses_record_list_and_takes_first() {
        let json = format!("[{SINGLE_RECORD}, {SINGLE_RECORD}]");
        let file: SurfaceRoughnessFile = serde_json::from_str(&json).unwrap();
        assert!(matches!(file.records, SurfaceRecords::Many(ref r) if r.len() == 2));
        assert_eq!(file.root().unwrap().roughness_amplitude(), Some(0.25));
    }

    #[test]
    fn empty_record_list_has_no_root() {
        let file: SurfaceRoughnessFile = serde_json::from_str("[]").unwrap();
        assert!(file.root().is_none());
    }

    #[test]
    fn rejects_executable_looking_payloads() {
        let payload = r#"const SURFACES = [{ "surface_roughness_data": {} }];"#;
        assert!(serde_json::from_str::<SurfaceRoughnessFile>(payload).is_err());
    }
}
