//! Error types for pivotgen
//!
//! This module provides unified error handling for the generator, covering
//! missing input, stub lookup, configuration and filesystem failures.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pivotgen
#[derive(Debug, Error)]
pub enum EngineError {
    // ========================================================================
    // Input Errors
    // ========================================================================
    /// A required argument was absent or empty
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    // ========================================================================
    // Template Errors
    // ========================================================================
    /// No stub exists for the requested action
    #[error("Stub not found for action '{action}' ({format})")]
    StubNotFound { action: String, format: String },

    /// Stub exists but could not be read
    #[error("Failed to read stub '{path}': {message}")]
    StubRead { path: PathBuf, message: String },

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// Destination could not be created or written
    #[error("Failed to write file '{path}': {message}")]
    WriteFailure { path: PathBuf, message: String },

    /// Destination already exists and overwriting is disabled
    #[error("Migration already exists: {0}")]
    OutputExists(PathBuf),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    /// Create a missing-argument error
    pub fn missing_argument(name: impl Into<String>) -> Self {
        EngineError::MissingArgument(name.into())
    }

    /// Create a stub-not-found error
    pub fn stub_not_found(action: impl Into<String>, format: impl std::fmt::Display) -> Self {
        EngineError::StubNotFound {
            action: action.into(),
            format: format.to_string(),
        }
    }

    /// Create a write-failure error
    pub fn write_failure(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        EngineError::WriteFailure {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create an invalid-configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        EngineError::InvalidConfig(msg.into())
    }

    /// Check if this error was caused by bad user input
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            EngineError::MissingArgument(_) | EngineError::InvalidConfig(_)
        )
    }

    /// Check if this error is a stub lookup error
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::StubNotFound { .. })
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            EngineError::StubRead { .. }
                | EngineError::WriteFailure { .. }
                | EngineError::OutputExists(_)
        )
    }
}

/// Result type alias using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

// ============================================================================
// Tests
// ============================================================================
