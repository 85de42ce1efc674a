//! Project configuration file
//!
//! An optional `pivotgen.toml` in the base directory supplies defaults for
//! every run in that project:
//!
//! ```toml
//! format = "sql"
//! migrations_path = "/db/migrations"
//! stub_dir = "stubs"
//! use_foreign_keys = true
//! overwrite = false
//! on_delete = "cascade"
//! ```
//!
//! Command-line flags take precedence over anything set here.

use std::path::{Path, PathBuf};

use pivotgen_core::{EngineError, EngineResult, MigrationFormat, ReferentialAction};
use serde::Deserialize;

/// Name of the project configuration file looked up in the base directory
pub const CONFIG_FILE_NAME: &str = "pivotgen.toml";

/// Defaults read from `pivotgen.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub format: Option<MigrationFormat>,
    pub migrations_path: Option<String>,
    /// Relative paths are taken from the base directory
    pub stub_dir: Option<PathBuf>,
    pub use_foreign_keys: Option<bool>,
    pub overwrite: Option<bool>,
    pub on_delete: Option<ReferentialAction>,
}

impl ProjectConfig {
    /// Parse a configuration document
    pub fn from_toml(source: &str) -> EngineResult<Self> {
        toml::from_str(source).map_err(|e| EngineError::invalid_config(e.to_string()))
    }

    /// Load the configuration at `path`.
    ///
    /// A missing file yields the default configuration unless `required`
    /// is set.
    pub fn load(path: &Path, required: bool) -> EngineResult<Self> {
        if !path.is_file() {
            if required {
                return Err(EngineError::invalid_config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }

        let source = std::fs::read_to_string(path).map_err(|e| {
            EngineError::invalid_config(format!("{}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&source)?;
        tracing::debug!(path = %path.display(), ?config, "loaded project config");
        Ok(config)
    }

    /// Stub directory resolved against `base_path`
    pub fn stub_dir_in(&self, base_path: &Path) -> Option<PathBuf> {
        self.stub_dir.as_ref().map(|dir| base_path.join(dir))
    }
}

// ============================================================================
// Tests
// ============================================================================
