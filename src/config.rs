//! Per-category marker styling.

use crate::error::{GutterError, Result};
use crate::gutter::MarkerKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Visual style handed to the renderer along with each category's positions.
///
/// `scope` names the colour scope; `icon` is an opaque glyph identifier the
/// host resolves to an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub scope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl MarkerStyle {
    pub fn new(scope: &str, icon: &str) -> Self {
        Self {
            scope: scope.to_string(),
            icon: Some(icon.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GutterConfig {
    pub deleted_top: MarkerStyle,
    pub deleted_bottom: MarkerStyle,
    pub inserted: MarkerStyle,
    pub modified: MarkerStyle,
}

impl Default for GutterConfig {
    fn default() -> Self {
        Self {
            deleted_top: MarkerStyle::new("markup.deleted", "deleted_top"),
            deleted_bottom: MarkerStyle::new("markup.deleted", "deleted_bottom"),
            inserted: MarkerStyle::new("markup.inserted", "inserted"),
            modified: MarkerStyle::new("markup.changed", "changed"),
        }
    }
}

impl GutterConfig {
    /// Load a config from a JSON file. Categories left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| GutterError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&contents).map_err(|source| GutterError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded gutter config");
        Ok(config)
    }

    pub fn style(&self, kind: MarkerKind) -> &MarkerStyle {
        match kind {
            MarkerKind::DeletedTop => &self.deleted_top,
            MarkerKind::DeletedBottom => &self.deleted_bottom,
            MarkerKind::Inserted => &self.inserted,
            MarkerKind::Modified => &self.modified,
        }
    }
}
