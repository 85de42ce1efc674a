//! Core types used throughout pivotgen
//!
//! This module contains the small value types shared by the generator and
//! the command-line front end.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

// ============================================================================
// Migration Formats
// ============================================================================

/// Schema language a generated migration is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MigrationFormat {
    /// PHP schema-builder migration class
    #[default]
    #[serde(alias = "php")]
    Laravel,
    /// Plain SQL DDL
    Sql,
}

impl MigrationFormat {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MigrationFormat::Laravel => "laravel",
            MigrationFormat::Sql => "sql",
        }
    }

    /// File extension of generated migrations (without the dot)
    pub fn extension(&self) -> &'static str {
        match self {
            MigrationFormat::Laravel => "php",
            MigrationFormat::Sql => "sql",
        }
    }

    /// Suffix appended to `pivot_{action}` when looking up a stub file
    pub fn stub_suffix(&self) -> &'static str {
        match self {
            MigrationFormat::Laravel => ".stub",
            MigrationFormat::Sql => ".sql.stub",
        }
    }

    /// Get all migration formats
    pub fn all() -> &'static [MigrationFormat] {
        &[MigrationFormat::Laravel, MigrationFormat::Sql]
    }
}

impl std::fmt::Display for MigrationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MigrationFormat {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "laravel" | "php" => Ok(MigrationFormat::Laravel),
            "sql" => Ok(MigrationFormat::Sql),
            other => Err(EngineError::invalid_config(format!(
                "unknown migration format '{}'",
                other
            ))),
        }
    }
}

// ============================================================================
// Referential Actions
// ============================================================================

/// Actions for foreign key constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReferentialAction {
    /// Delete related records when parent is deleted
    #[default]
    Cascade,
    /// Set foreign key to NULL when parent is deleted
    SetNull,
    /// Prevent deletion if related records exist
    Restrict,
    /// Do nothing (database default)
    NoAction,
}

impl ReferentialAction {
    /// Get SQL keyword
    pub fn to_sql(&self) -> &'static str {
        match self {
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::NoAction => "NO ACTION",
        }
    }

    /// Get the argument accepted by the schema builder's `onDelete()`
    pub fn to_schema_builder(&self) -> &'static str {
        match self {
            ReferentialAction::Cascade => "cascade",
            ReferentialAction::SetNull => "set null",
            ReferentialAction::Restrict => "restrict",
            ReferentialAction::NoAction => "no action",
        }
    }
}

impl std::fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_sql())
    }
}

// ============================================================================
// Table Pairs
// ============================================================================

/// Two table names, lower-cased and sorted alphabetically.
///
/// Construction is order independent: `("users", "roles")` and
/// `("roles", "users")` produce the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TablePair {
    first: String,
    second: String,
}

impl TablePair {
    /// Build a pair from two raw table names.
    ///
    /// Fails with [`EngineError::MissingArgument`] when either name is
    /// empty after trimming.
    pub fn new(table_one: &str, table_two: &str) -> EngineResult<Self> {
        let one = Self::normalize(table_one, "tableOne")?;
        let two = Self::normalize(table_two, "tableTwo")?;

        let (first, second) = if one <= two { (one, two) } else { (two, one) };
        Ok(Self { first, second })
    }

    fn normalize(raw: &str, argument: &str) -> EngineResult<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EngineError::missing_argument(argument));
        }
        Ok(trimmed.to_lowercase())
    }

    /// Alphabetically first table
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Alphabetically second table
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Both tables in sorted order
    pub fn as_array(&self) -> [&str; 2] {
        [&self.first, &self.second]
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_migration_format_extension() {
        assert_eq!(MigrationFormat::Laravel.extension(), "php");
        assert_eq!(MigrationFormat::Sql.extension(), "sql");
        assert_eq!(MigrationFormat::default(), MigrationFormat::Laravel);
    }

    #[test]
    fn test_migration_format_from_str() {
        assert_eq!(
            "Laravel".parse::<MigrationFormat>().unwrap(),
            MigrationFormat::Laravel
        );
        assert_eq!("php".parse::<MigrationFormat>().unwrap(), MigrationFormat::Laravel);
        assert_eq!(" SQL ".parse::<MigrationFormat>().unwrap(), MigrationFormat::Sql);

        let err = "yaml".parse::<MigrationFormat>().unwrap_err();
        assert!(err.is_input());
    }

    #[test]
    fn test_migration_format_roundtrips_display() {
        for format in MigrationFormat::all() {
            assert_eq!(format.to_string().parse::<MigrationFormat>().unwrap(), *format);
        }
    }

    #[test]
    fn test_referential_action() {
        assert_eq!(ReferentialAction::Cascade.to_sql(), "CASCADE");
        assert_eq!(ReferentialAction::SetNull.to_sql(), "SET NULL");
        assert_eq!(ReferentialAction::Cascade.to_schema_builder(), "cascade");
        assert_eq!(ReferentialAction::default(), ReferentialAction::Cascade);
    }

    #[test]
    fn test_table_pair_sorts() {
        let pair = TablePair::new("users", "roles").unwrap();
        assert_eq!(pair.first(), "roles");
        assert_eq!(pair.second(), "users");
        assert_eq!(pair, TablePair::new("roles", "users").unwrap());
    }

    #[test]
    fn test_table_pair_lowercases_before_sorting() {
        let pair = TablePair::new("Users", "articles").unwrap();
        assert_eq!(pair.as_array(), ["articles", "users"]);

        let pair = TablePair::new("ZEBRAS", "apples").unwrap();
        assert_eq!(pair.as_array(), ["apples", "zebras"]);
    }

    #[test]
    fn test_table_pair_rejects_empty() {
        let err = TablePair::new("users", "  ").unwrap_err();
        assert_eq!(err.to_string(), "Missing required argument: tableTwo");

        let err = TablePair::new("", "roles").unwrap_err();
        assert_eq!(err.to_string(), "Missing required argument: tableOne");
    }
}
