//! ローカリティ設定

use crate::LocalityError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How named entities outside the signature are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalityKind {
    /// Replaced by the empty class / empty relation (⊥-locality)
    #[default]
    Bottom,
    /// Replaced by the universal class / universal relation (⊤-locality)
    Top,
}

impl LocalityKind {
    pub fn is_top(self) -> bool {
        self == LocalityKind::Top
    }
}

/// Locality flavour, chosen separately for classes and for properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalityConfig {
    pub classes: LocalityKind,
    pub properties: LocalityKind,
}

impl LocalityConfig {
    /// Same locality for classes and properties
    pub fn uniform(kind: LocalityKind) -> Self {
        Self {
            classes: kind,
            properties: kind,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, LocalityError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LocalityError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
