//! # pivotgen Core
//!
//! Core types, traits, and error handling for pivotgen.
//!
//! This crate provides the building blocks shared by the generator and
//! the command-line front end:
//!
//! - **Types**: `MigrationFormat`, `ReferentialAction`, `TablePair`
//! - **Traits**: `Inflector` (singularization) and `MigrationFs` (stub and file access)
//! - **Inflector**: the default English singularizer
//! - **Errors**: Unified error handling with `EngineError` and `EngineResult`
//!

pub mod error;
pub mod inflector;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{EngineError, EngineResult};
pub use inflector::EnglishInflector;
pub use traits::{Inflector, MigrationFs};
pub use types::{MigrationFormat, ReferentialAction, TablePair};

/// Default output directory for migrations, relative to the base path
pub const DEFAULT_MIGRATIONS_PATH: &str = "/database/migrations";

/// Action used when none is given
pub const DEFAULT_ACTION: &str = "create";

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
