//! # Pivot Generator
//!
//! The `Generator` is the entry point for pivot migration generation. It
//! takes a [`PivotRequest`], derives the names, loads the stub for the
//! requested action and writes the rendered migration.
//!
//! ## Pipeline
//!
//! ```text
//! PivotRequest
//!         │
//!         ▼
//!   PivotNames::derive()            → MissingArgument
//!         │
//!         ├──► MigrationFs::read_template()  → StubNotFound
//!         ├──► migrations::foreign_keys()
//!         ├──► template::render()
//!         ├──► MigrationFs::resolve_output_path()
//!         │
//!         ▼
//!   GeneratedMigration ──► MigrationFs::write_file()  → WriteFailure / OutputExists
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pivotgen_codegen::{Generator, GeneratorConfig, PivotRequest};
//!
//! let generator = Generator::new(GeneratorConfig::new().with_base_path("/srv/app"));
//! let path = generator.generate(&PivotRequest::new("users", "roles"))?;
//!
//! println!("wrote {}", path.display());
//! ```

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use pivotgen_core::{EngineResult, EnglishInflector, Inflector, MigrationFs};

use crate::context::PivotNames;
use crate::filesystem::LocalFs;
use crate::migrations;
use crate::template;
use crate::{GeneratedMigration, GeneratorConfig, PivotRequest};

// ============================================================================
// Generator
// ============================================================================

/// Pivot migration generator.
///
/// Stateless aside from its configuration, filesystem and inflector; each
/// call to [`generate`](Generator::generate) is independent.
#[derive(Debug, Clone)]
pub struct Generator<F = LocalFs, I = EnglishInflector> {
    config: GeneratorConfig,
    fs: F,
    inflector: I,
}

impl Generator {
    /// Create a generator on the local filesystem with the English inflector.
    pub fn new(config: GeneratorConfig) -> Self {
        let fs = LocalFs::from_config(&config);
        Self {
            config,
            fs,
            inflector: EnglishInflector::new(),
        }
    }

    /// Create a generator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<F: MigrationFs, I: Inflector> Generator<F, I> {
    /// Create a generator from explicit parts.
    pub fn from_parts(config: GeneratorConfig, fs: F, inflector: I) -> Self {
        Self {
            config,
            fs,
            inflector,
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Derive the names for a request without touching any stub or file.
    pub fn derive_names(&self, request: &PivotRequest) -> EngineResult<PivotNames> {
        PivotNames::derive(request, &self.inflector)
    }

    /// Render the migration for `request` at the current time.
    pub fn render(&self, request: &PivotRequest) -> EngineResult<GeneratedMigration> {
        self.render_at(request, Utc::now())
    }

    /// Render the migration for `request`, timestamping a default filename
    /// with `now`.
    ///
    /// # Errors
    ///
    /// - `MissingArgument` if either table name is absent.
    /// - `StubNotFound` if there is no stub for the action and format.
    pub fn render_at(
        &self,
        request: &PivotRequest,
        now: DateTime<Utc>,
    ) -> EngineResult<GeneratedMigration> {
        let format = self.config.format;
        let names = self.derive_names(request)?;
        let stub = self.fs.read_template(&names.action, format)?;

        let foreign_keys = if request.use_foreign_keys {
            migrations::foreign_keys(&names, format, self.config.on_delete)
        } else {
            String::new()
        };
        let content = template::render(&stub, &migrations::token_values(&names, foreign_keys));

        let filename = match request.filename.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => names.default_filename(now, format),
        };
        let directory = request.path.as_deref().map(str::trim).filter(|p| !p.is_empty());
        let path = self.fs.resolve_output_path(directory, &filename);

        tracing::debug!(
            action = %names.action,
            format = %format,
            path = %path.display(),
            "rendered pivot migration",
        );

        Ok(GeneratedMigration {
            path,
            content,
            names,
        })
    }

    /// Render and write the migration for `request`.
    ///
    /// Returns the path of the written file.
    pub fn generate(&self, request: &PivotRequest) -> EngineResult<PathBuf> {
        self.generate_at(request, Utc::now())
    }

    /// [`generate`](Generator::generate) with an explicit timestamp.
    pub fn generate_at(&self, request: &PivotRequest, now: DateTime<Utc>) -> EngineResult<PathBuf> {
        let migration = self.render_at(request, now)?;
        self.fs
            .write_file(&migration.path, &migration.content, self.config.overwrite)?;

        tracing::info!(
            path = %migration.path.display(),
            pivot_table = %migration.names.pivot_table,
            "migration written",
        );

        Ok(migration.path)
    }
}

// ============================================================================
// Standalone convenience function
// ============================================================================

/// Generate a pivot migration under `base_path` using default settings.
///
/// This is a shorthand for
/// `Generator::new(GeneratorConfig::new().with_base_path(base_path)).generate(request)`.
pub fn generate(request: &PivotRequest, base_path: impl Into<PathBuf>) -> EngineResult<PathBuf> {
    Generator::new(GeneratorConfig::new().with_base_path(base_path)).generate(request)
}

// ============================================================================
// Tests
// ============================================================================
