use bevy::prelude::*;
use constants::path::{cloud_path, plane_tree_path};
use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};

/// One loadable model: a folder under `models/` holding a cloud and a plane tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub id: String,
    /// Cloud file name inside the model folder; `cloud.xyz` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<String>,
}

impl ModelEntry {
    pub fn cloud_path(&self) -> String {
        cloud_path(&self.id, self.cloud.as_deref())
    }

    pub fn plane_tree_path(&self) -> String {
        plane_tree_path(&self.id)
    }
}

/// Catalog of available models, loaded from `models/index.models.json`.
#[derive(Asset, TypePath, Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelCatalog {
    pub models: Vec<ModelEntry>,
}

impl ModelCatalog {
    pub fn find(&self, id: &str) -> ViewerResult<&ModelEntry> {
        self.models
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| ViewerError::UnknownModel(id.to_string()))
    }

    /// Entry after `current`, wrapping around. The first entry when `current`
    /// is `None` or not listed.
    pub fn next_after(&self, current: Option<&str>) -> Option<&ModelEntry> {
        let position = current.and_then(|id| self.models.iter().position(|e| e.id == id));
        match position {
            Some(index) => self.models.get((index + 1) % self.models.len()),
            None => self.models.first(),
        }
    }

    pub fn ids(&self) -> Vec<&str> {
        self.models.iter().map(|entry| entry.id.as_str()).collect()
    }
}
