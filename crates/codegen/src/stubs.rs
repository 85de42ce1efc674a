//! # Stub Catalog
//!
//! Built-in pivot stubs compiled into the binary, plus the naming scheme
//! used when stubs are loaded from a directory instead.
//!
//! ```text
//! {stub_dir}/pivot_{action}.stub       (laravel)
//! {stub_dir}/pivot_{action}.sql.stub   (sql)
//! ```

use pivotgen_core::MigrationFormat;

const LARAVEL_CREATE: &str = include_str!("../stubs/pivot_create.stub");
const LARAVEL_DROP: &str = include_str!("../stubs/pivot_drop.stub");
const SQL_CREATE: &str = include_str!("../stubs/pivot_create.sql.stub");
const SQL_DROP: &str = include_str!("../stubs/pivot_drop.sql.stub");

/// Actions that have a built-in stub in every format
pub const BUILTIN_ACTIONS: &[&str] = &["create", "drop"];

/// Look up the built-in stub for an action.
pub fn builtin(action: &str, format: MigrationFormat) -> Option<&'static str> {
    match (action, format) {
        ("create", MigrationFormat::Laravel) => Some(LARAVEL_CREATE),
        ("drop", MigrationFormat::Laravel) => Some(LARAVEL_DROP),
        ("create", MigrationFormat::Sql) => Some(SQL_CREATE),
        ("drop", MigrationFormat::Sql) => Some(SQL_DROP),
        _ => None,
    }
}

/// File name of the stub for `action` inside a stub directory.
pub fn file_name(action: &str, format: MigrationFormat) -> String {
    format!("pivot_{}{}", action, format.stub_suffix())
}

/// Whether `action` can name a stub file.
///
/// Rejects anything that would step outside the stub directory.
pub fn is_valid_action(action: &str) -> bool {
    !action.is_empty()
        && !action.contains("..")
        && !action.contains(['/', '\\'])
        && !action.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::tokens;

    #[test]
    fn test_builtin_lookup() {
        for action in BUILTIN_ACTIONS {
            for format in MigrationFormat::all() {
                assert!(builtin(action, *format).is_some(), "{action} {format}");
            }
        }
        assert!(builtin("bogus", MigrationFormat::Laravel).is_none());
        assert!(builtin("Create", MigrationFormat::Laravel).is_none());
    }

    #[test]
    fn test_create_stubs_use_every_token() {
        for format in MigrationFormat::all() {
            let stub = builtin("create", *format).unwrap();
            for token in tokens::ALL {
                // the laravel create stub never names the source tables outside FKs
                if *format == MigrationFormat::Laravel
                    && (*token == tokens::TABLE_ONE || *token == tokens::TABLE_TWO)
                {
                    continue;
                }
                assert!(
                    stub.contains(&format!("{{{{{}}}}}", token)),
                    "{format} create stub is missing {token}"
                );
            }
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("create", MigrationFormat::Laravel), "pivot_create.stub");
        assert_eq!(file_name("drop", MigrationFormat::Sql), "pivot_drop.sql.stub");
    }

    #[test]
    fn test_is_valid_action() {
        assert!(is_valid_action("create"));
        assert!(is_valid_action("add_index"));
        assert!(!is_valid_action(""));
        assert!(!is_valid_action("../secret"));
        assert!(!is_valid_action("nested/create"));
        assert!(!is_valid_action("two words"));
    }
}
