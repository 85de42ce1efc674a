//! Core traits for pivotgen
//!
//! These are the seams between the naming and templating logic and the
//! environment it runs in. The generator only talks to a [`MigrationFs`]
//! and an [`Inflector`]; concrete implementations decide where stubs live,
//! where files land, and how words are singularized.

use std::path::{Path, PathBuf};

use crate::error::EngineResult;
use crate::types::MigrationFormat;

// ============================================================================
// Inflector Trait
// ============================================================================

/// Trait for types that can turn a plural noun into its singular form
///
/// # Example
///
/// ```rust,ignore
/// use pivotgen_core::Inflector;
///
/// struct Naive;
///
/// impl Inflector for Naive {
///     fn singularize(&self, word: &str) -> String {
///         word.strip_suffix('s').unwrap_or(word).to_string()
///     }
/// }
/// ```
pub trait Inflector {
    /// Singularize a (lower-case) word
    fn singularize(&self, word: &str) -> String;
}

impl<T: Inflector + ?Sized> Inflector for &T {
    fn singularize(&self, word: &str) -> String {
        (**self).singularize(word)
    }
}

// ============================================================================
// MigrationFs Trait
// ============================================================================

/// Filesystem capability used by the generator
///
/// Implementations own the base directory and stub location so the
/// generator never consults process-wide state.
pub trait MigrationFs {
    /// Resolve the full output path for `filename`.
    ///
    /// `directory` is relative to the implementation's base path; `None`
    /// means the default migrations directory.
    fn resolve_output_path(&self, directory: Option<&str>, filename: &str) -> PathBuf;

    /// Load the stub for `action` in the given format
    ///
    /// Returns [`EngineError::StubNotFound`](crate::EngineError::StubNotFound)
    /// when no stub exists for the pair.
    fn read_template(&self, action: &str, format: MigrationFormat) -> EngineResult<String>;

    /// Write `content` to `path` as a single whole-file write
    ///
    /// When `overwrite` is false an existing file is left untouched and
    /// [`EngineError::OutputExists`](crate::EngineError::OutputExists) is
    /// returned.
    fn write_file(&self, path: &Path, content: &str, overwrite: bool) -> EngineResult<()>;
}
