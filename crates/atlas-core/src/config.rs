//! Configuration types for the exporter.

use crate::error::Result;
use crate::types::TargetFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Export settings, loadable from a JSON file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when the command line does not name one
    pub default_format: TargetFormat,
    /// Directory that receives download-named files
    pub output_dir: Option<PathBuf>,
    /// Wrap exports in a standalone HTML page
    pub html: bool,
    /// Fallback log filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: TargetFormat::Magma,
            output_dir: None,
            html: false,
            log_filter: "info".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded export config");
        Ok(config)
    }
}
