//! # Local Filesystem
//!
//! [`LocalFs`] is the [`MigrationFs`] used outside of tests. Paths are
//! resolved against an explicit base directory; stubs come from an optional
//! stub directory and fall back to the built-in catalog.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use pivotgen_core::{
    DEFAULT_MIGRATIONS_PATH, EngineError, EngineResult, MigrationFormat, MigrationFs,
};

use crate::GeneratorConfig;
use crate::stubs;

/// Filesystem access rooted at a base directory
#[derive(Debug, Clone)]
pub struct LocalFs {
    base_path: PathBuf,
    stub_dir: Option<PathBuf>,
}

impl LocalFs {
    /// Create a filesystem rooted at `base_path` using only built-in stubs
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            stub_dir: None,
        }
    }

    /// Build from generator configuration
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            base_path: config.base_path.clone(),
            stub_dir: config.stub_dir.clone(),
        }
    }

    /// Look for stubs in `dir` before the built-in ones
    pub fn with_stub_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stub_dir = Some(dir.into());
        self
    }

    /// Base directory output paths are resolved against
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn read_stub_file(&self, action: &str, format: MigrationFormat) -> EngineResult<Option<String>> {
        let Some(dir) = &self.stub_dir else {
            return Ok(None);
        };

        let path = dir.join(stubs::file_name(action, format));
        if !path.is_file() {
            return Ok(None);
        }

        tracing::debug!(stub = %path.display(), "loading stub from disk");
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| EngineError::StubRead {
                path,
                message: e.to_string(),
            })
    }
}

/// Strip leading separators so the value joins onto the base path
fn relative(segment: &str) -> &str {
    segment.trim_start_matches(['/', '\\'])
}

impl MigrationFs for LocalFs {
    fn resolve_output_path(&self, directory: Option<&str>, filename: &str) -> PathBuf {
        let directory = directory.unwrap_or(DEFAULT_MIGRATIONS_PATH);
        self.base_path
            .join(relative(directory))
            .join(relative(filename))
    }

    fn read_template(&self, action: &str, format: MigrationFormat) -> EngineResult<String> {
        if !stubs::is_valid_action(action) {
            return Err(EngineError::stub_not_found(action, format));
        }

        if let Some(content) = self.read_stub_file(action, format)? {
            return Ok(content);
        }

        stubs::builtin(action, format)
            .map(str::to_string)
            .ok_or_else(|| EngineError::stub_not_found(action, format))
    }

    fn write_file(&self, path: &Path, content: &str, overwrite: bool) -> EngineResult<()> {
        let mut options = OpenOptions::new();
        options.write(true);
        if overwrite {
            if path.exists() {
                tracing::warn!(path = %path.display(), "overwriting existing migration");
            }
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let file = options.open(path).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => EngineError::OutputExists(path.to_path_buf()),
            _ => EngineError::write_failure(path, e.to_string()),
        })?;

        write_or_remove(file, path, content)
    }
}

/// Write `content` to an opened `file`, removing it again if the write fails
/// so no truncated migration is left behind.
fn write_or_remove(mut file: File, path: &Path, content: &str) -> EngineResult<()> {
    if let Err(e) = file.write_all(content.as_bytes()).and_then(|()| file.flush()) {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(EngineError::write_failure(path, e.to_string()));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
