//! Model configuration
//!
//! Settings that shape the initial model, tessellation and export. They can
//! be serialized and loaded from RON configuration files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::body::{Geometry, SolidBody, Transform};
use crate::constants::{
    BASE_BLOCK_SIZE, CYLINDER_SEGMENTS, MAIN_BLOCK_NAME, MIN_CYLINDER_SEGMENTS,
    SKETCH_VIEW_DISTANCE,
};
use crate::error::{CadError, CadResult, require_positive};
use crate::export::ExportOptions;

/// Model configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Initial main block size [width, height, depth]
    pub base_block: [f32; 3],
    /// Number of segments used to tessellate cylinders
    pub cylinder_segments: u32,
    /// Distance at which the viewport frames a new sketch plane
    pub sketch_view_distance: f32,
    /// Mesh export settings
    pub export: ExportOptions,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_block: BASE_BLOCK_SIZE,
            cylinder_segments: CYLINDER_SEGMENTS,
            sketch_view_distance: SKETCH_VIEW_DISTANCE,
            export: ExportOptions::default(),
        }
    }
}

impl ModelConfig {
    /// Check every numeric setting
    pub fn validate(&self) -> CadResult<()> {
        let [w, h, d] = self.base_block;
        require_positive("base block width", w)?;
        require_positive("base block height", h)?;
        require_positive("base block depth", d)?;
        require_positive("sketch view distance", self.sketch_view_distance)?;
        if self.cylinder_segments < MIN_CYLINDER_SEGMENTS {
            return Err(CadError::InvalidInput(format!(
                "cylinder segments must be at least {MIN_CYLINDER_SEGMENTS}, got {}",
                self.cylinder_segments
            )));
        }
        Ok(())
    }

    /// Build the initial main block described by this configuration
    pub fn main_block(&self) -> SolidBody {
        let [width, height, depth] = self.base_block;
        SolidBody::with_segments(
            MAIN_BLOCK_NAME,
            Geometry::Box {
                width,
                height,
                depth,
            },
            Transform::IDENTITY,
            self.cylinder_segments,
        )
    }

    /// Parse a configuration from RON text
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron(&content)
    }

    /// Serialize to pretty RON text
    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Configuration-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error(transparent)]
    Invalid(#[from] CadError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_main_block() {
        let config = ModelConfig::default();
        config.validate().unwrap();
        let block = config.main_block();
        assert_eq!(block.name, "mainBlock");
        assert_eq!(
            *block.geometry(),
            Geometry::Box {
                width: 4.0,
                height: 1.0,
                depth: 4.0
            }
        );
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config = ModelConfig::from_ron("(cylinder_segments: 12)").unwrap();
        assert_eq!(config.cylinder_segments, 12);
        assert_eq!(config.base_block, BASE_BLOCK_SIZE);
        assert_eq!(config.export.file_name, "cad_model.stl");
    }

    #[test]
    fn test_ron_round_trip() {
        let mut config = ModelConfig::default();
        config.base_block = [2.0, 2.0, 0.5];
        config.export.solid_name = "part".into();
        let text = config.to_ron().unwrap();
        assert_eq!(ModelConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            ModelConfig::from_ron("(cylinder_segments: 2)"),
            Err(ConfigError::Invalid(CadError::InvalidInput(_)))
        ));
        assert!(ModelConfig::from_ron("(base_block: (1.0, 0.0, 1.0))").is_err());
        assert!(matches!(
            ModelConfig::from_ron("not ron"),
            Err(ConfigError::Deserialize(_))
        ));
    }
}
