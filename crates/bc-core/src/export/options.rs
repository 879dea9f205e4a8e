//! Export options for mesh document generation

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXPORT_FILE, DEFAULT_SOLID_NAME};

/// Export options for mesh document generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Name written after `solid` / `endsolid`
    pub solid_name: String,
    /// Suggested file name for the document
    pub file_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            solid_name: DEFAULT_SOLID_NAME.to_string(),
            file_name: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

impl ExportOptions {
    /// Solid name with whitespace replaced, so the header stays one token
    pub fn header_name(&self) -> String {
        let name: String = self
            .solid_name
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .collect();
        if name.is_empty() {
            DEFAULT_SOLID_NAME.to_string()
        } else {
            name
        }
    }
}
