//! # pivotgen Codegen
//!
//! Generation engine for pivot table migrations.
//!
//! Given two table names this crate derives the pivot naming conventions,
//! picks a stub for the requested action, fills in its tokens and writes
//! the result under the migrations directory with a timestamped filename.
//!
//! ## Features
//!
//! - **Naming**: order-independent pivot table, class and column names
//! - **Stubs**: built-in `create`/`drop` stubs, overridable from a directory
//! - **Formats**: schema-builder (PHP) and plain SQL migrations
//! - **Foreign keys**: optional constraints with a configurable delete action
//!

// ============================================================================
// Modules
// ============================================================================

pub mod context;
pub mod filesystem;
pub mod generator;
pub mod migrations;
pub mod stubs;
pub mod template;

// ============================================================================
// Re-exports
// ============================================================================

pub use context::PivotNames;
pub use filesystem::LocalFs;
pub use generator::{Generator, generate};

use pivotgen_core::{MigrationFormat, ReferentialAction};
use std::path::PathBuf;

// ============================================================================
// GeneratorConfig
// ============================================================================

/// Configuration for the pivot generator
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory output paths are resolved against
    pub base_path: PathBuf,

    /// Directory searched for stubs before the built-in ones
    pub stub_dir: Option<PathBuf>,

    /// Schema language of generated migrations
    pub format: MigrationFormat,

    /// Whether to overwrite an existing migration at the target path
    pub overwrite: bool,

    /// Delete action used by generated foreign keys
    pub on_delete: ReferentialAction,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            stub_dir: None,
            format: MigrationFormat::default(),
            overwrite: false,
            on_delete: ReferentialAction::Cascade,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base directory
    pub fn with_base_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_path = dir.into();
        self
    }

    /// Set the stub directory
    pub fn with_stub_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stub_dir = Some(dir.into());
        self
    }

    /// Set the migration format
    pub fn with_format(mut self, format: MigrationFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the foreign-key delete action
    pub fn with_on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = action;
        self
    }

    /// Allow overwriting existing files
    pub fn allow_overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }
}

// ============================================================================
// PivotRequest
// ============================================================================

/// Per-invocation input for one pivot migration.
///
/// Every field except the table names is optional; unset or blank values
/// fall back to the derived defaults.
#[derive(Debug, Clone)]
pub struct PivotRequest {
    pub table_one: Option<String>,
    pub table_two: Option<String>,
    pub action: Option<String>,
    pub column_one: Option<String>,
    pub column_two: Option<String>,
    /// Output directory relative to the base path
    pub path: Option<String>,
    pub filename: Option<String>,
    pub table_name: Option<String>,
    pub class_name: Option<String>,
    pub use_foreign_keys: bool,
}

impl Default for PivotRequest {
    fn default() -> Self {
        Self {
            table_one: None,
            table_two: None,
            action: None,
            column_one: None,
            column_two: None,
            path: None,
            filename: None,
            table_name: None,
            class_name: None,
            use_foreign_keys: true,
        }
    }
}

impl PivotRequest {
    /// Request a pivot between two tables with every other option defaulted
    pub fn new(table_one: impl Into<String>, table_two: impl Into<String>) -> Self {
        Self {
            table_one: Some(table_one.into()),
            table_two: Some(table_two.into()),
            ..Self::default()
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Override both foreign-key columns
    pub fn with_columns(mut self, one: impl Into<String>, two: impl Into<String>) -> Self {
        self.column_one = Some(one.into());
        self.column_two = Some(two.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = Some(name.into());
        self
    }

    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }

    /// Skip foreign-key constraints
    pub fn without_foreign_keys(mut self) -> Self {
        self.use_foreign_keys = false;
        self
    }
}

// ============================================================================
// GeneratedMigration
// ============================================================================

/// A rendered migration that has not necessarily been written yet
#[derive(Debug, Clone)]
pub struct GeneratedMigration {
    /// Full output path
    pub path: PathBuf,

    /// Rendered file content
    pub content: String,

    /// Names the content was rendered from
    pub names: PivotNames,
}

impl GeneratedMigration {
    /// File name component of the output path
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
