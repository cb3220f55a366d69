//! Project manifest (brix.yaml) parsing.
//!
//! The manifest carries per-project defaults for the build command:
//! the brick texture, the palette, the target length, and the output
//! directory. Command-line flags override manifest values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BrixError, Result};

/// Manifest file name looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "brix.yaml";

/// Default target length in bricks for the longer image side.
pub const DEFAULT_LENGTH: u32 = 100;

/// Project manifest loaded from brix.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Path to a brick texture image overriding the built-in tile.
    #[serde(default)]
    pub texture: Option<PathBuf>,

    /// Default palette name (e.g. "all", "solid", "mono").
    #[serde(default = "default_palette")]
    pub palette: String,

    /// Default target length in bricks for the longer side.
    #[serde(default = "default_length")]
    pub length: u32,

    /// Output directory for composed mosaics.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_palette() -> String {
    "all".to_string()
}

fn default_length() -> u32 {
    DEFAULT_LENGTH
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            texture: None,
            palette: default_palette(),
            length: default_length(),
            output: default_output(),
        }
    }
}

impl Manifest {
    /// Load a manifest from a brix.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BrixError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a manifest from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| BrixError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check brix.yaml syntax".to_string()),
        })
    }

    /// Load `brix.yaml` from a directory if present, defaults otherwise.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
