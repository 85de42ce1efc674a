//! # Naming Context
//!
//! `PivotNames` holds every name derived for one pivot migration: the sorted
//! table pair, singular forms, pivot table name, migration and class names,
//! and the foreign-key column pair. Derivation is a pure function of the
//! request and the inflector, so the same inputs always give the same names.
//!
//! | Name            | Default for `users` + `roles` |
//! |-----------------|-------------------------------|
//! | pivot table     | `role_user`                   |
//! | migration name  | `CreateRoleUserPivotTable`    |
//! | columns         | `role_id`, `user_id`          |
//!

use chrono::{DateTime, Utc};
use heck::ToPascalCase;
use pivotgen_core::{DEFAULT_ACTION, EngineError, EngineResult, Inflector, MigrationFormat, TablePair};

use crate::PivotRequest;

/// `date('Y_m_d_His')` equivalent used to prefix migration filenames
pub const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

// ============================================================================
// PivotNames
// ============================================================================

/// Names derived for a single pivot migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotNames {
    /// Lower-cased, sorted source tables
    pub tables: TablePair,

    /// Singular form of each sorted table
    pub singular: [String; 2],

    /// Lower-cased action (`create` unless overridden)
    pub action: String,

    /// Name of the pivot table itself
    pub pivot_table: String,

    /// Derived `{Action}{One}{Two}PivotTable` name, always used for the filename
    pub migration_name: String,

    /// Value of the `{{class}}` token
    pub class_name: String,

    /// Foreign-key column for each sorted table
    pub columns: [String; 2],
}

impl PivotNames {
    /// Derive every name for `request`.
    ///
    /// # Errors
    ///
    /// `MissingArgument` if either table name is absent or blank.
    pub fn derive(request: &PivotRequest, inflector: &impl Inflector) -> EngineResult<Self> {
        let table_one = request
            .table_one
            .as_deref()
            .ok_or_else(|| EngineError::missing_argument("tableOne"))?;
        let table_two = request
            .table_two
            .as_deref()
            .ok_or_else(|| EngineError::missing_argument("tableTwo"))?;

        let tables = TablePair::new(table_one, table_two)?;
        let singular = tables.as_array().map(|t| inflector.singularize(t));
        let action = normalize_action(request.action.as_deref());

        let pivot_table = non_empty(request.table_name.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| singular.join("_"));

        let migration_name = format!(
            "{}{}{}PivotTable",
            pascal(&action),
            pascal(&singular[0]),
            pascal(&singular[1]),
        );

        let class_name = non_empty(request.class_name.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| migration_name.clone());

        let columns = match (
            non_empty(request.column_one.as_deref()),
            non_empty(request.column_two.as_deref()),
        ) {
            (Some(one), Some(two)) => [one.to_string(), two.to_string()],
            _ => singular.clone().map(|s| format!("{}_id", s)),
        };

        tracing::debug!(
            pivot_table = %pivot_table,
            migration = %migration_name,
            class = %class_name,
            columns = ?columns,
            "derived pivot names",
        );

        Ok(Self {
            tables,
            singular,
            action,
            pivot_table,
            migration_name,
            class_name,
            columns,
        })
    }

    /// `{timestamp}_{migration_name}.{ext}`
    pub fn default_filename(&self, now: DateTime<Utc>, format: MigrationFormat) -> String {
        format!(
            "{}_{}.{}",
            migration_timestamp(now),
            self.migration_name,
            format.extension()
        )
    }
}

// ============================================================================
// Naming helpers
// ============================================================================

/// Lower-case the action, falling back to `create` when unset or blank.
pub fn normalize_action(action: Option<&str>) -> String {
    non_empty(action)
        .map(str::to_lowercase)
        .unwrap_or_else(|| DEFAULT_ACTION.to_string())
}

/// Format `now` as a migration filename prefix (`2024_01_31_235959`).
pub fn migration_timestamp(now: DateTime<Utc>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Convert a name to `PascalCase` (e.g. "blog_post" → "BlogPost").
pub fn pascal(name: &str) -> String {
    name.to_pascal_case()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ============================================================================
// Tests
// ============================================================================
