//! Pivot table token values and foreign-key clauses.

use pivotgen_core::{MigrationFormat, ReferentialAction};

use crate::context::PivotNames;
use crate::template::{TokenValues, tokens};

/// Indentation of statements inside the schema-builder closure
const BLUEPRINT_INDENT: &str = "            ";

/// Indentation of column definitions inside `CREATE TABLE`
const SQL_INDENT: &str = "    ";

/// Render the two foreign-key declarations for a pivot table.
///
/// Each column references `id` on its corresponding sorted table. The clause
/// begins with a line break (and, for SQL, a comma) so it can sit directly
/// after the preceding statement in a stub, and collapses cleanly to nothing
/// when foreign keys are disabled.
pub fn foreign_keys(
    names: &PivotNames,
    format: MigrationFormat,
    on_delete: ReferentialAction,
) -> String {
    let pairs = names.columns.iter().zip(names.tables.as_array());

    match format {
        MigrationFormat::Laravel => pairs
            .map(|(column, table)| {
                format!(
                    "\n{BLUEPRINT_INDENT}$table->foreign('{}')->references('id')->on('{}')->onDelete('{}');",
                    column,
                    table,
                    on_delete.to_schema_builder(),
                )
            })
            .collect(),
        MigrationFormat::Sql => pairs
            .map(|(column, table)| {
                format!(
                    ",\n{SQL_INDENT}FOREIGN KEY ({}) REFERENCES {} (id) ON DELETE {}",
                    column,
                    table,
                    on_delete.to_sql(),
                )
            })
            .collect(),
    }
}

/// Build the value of every stub token.
///
/// `foreign_keys` is the already rendered clause (empty when disabled).
pub fn token_values(names: &PivotNames, foreign_keys: String) -> TokenValues {
    let [table_one, table_two] = names.tables.as_array();
    let [column_one, column_two] = &names.columns;

    TokenValues::from([
        (tokens::CLASS, names.class_name.clone()),
        (tokens::PIVOT_TABLE_NAME, names.pivot_table.clone()),
        (tokens::COLUMN_ONE, column_one.clone()),
        (tokens::COLUMN_TWO, column_two.clone()),
        (tokens::TABLE_ONE, table_one.to_string()),
        (tokens::TABLE_TWO, table_two.to_string()),
        (tokens::FOREIGN_KEYS, foreign_keys),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PivotRequest;
    use pivotgen_core::EnglishInflector;

    fn names(request: PivotRequest) -> PivotNames {
        PivotNames::derive(&request, &EnglishInflector::new()).unwrap()
    }

    #[test]
    fn test_laravel_foreign_keys() {
        let clause = foreign_keys(
            &names(PivotRequest::new("users", "roles")),
            MigrationFormat::Laravel,
            ReferentialAction::Cascade,
        );
        assert_eq!(
            clause,
            "\n            $table->foreign('role_id')->references('id')->on('roles')->onDelete('cascade');\
             \n            $table->foreign('user_id')->references('id')->on('users')->onDelete('cascade');"
        );
    }

    #[test]
    fn test_sql_foreign_keys() {
        let clause = foreign_keys(
            &names(PivotRequest::new("users", "roles")),
            MigrationFormat::Sql,
            ReferentialAction::Cascade,
        );
        assert_eq!(
            clause,
            ",\n    FOREIGN KEY (role_id) REFERENCES roles (id) ON DELETE CASCADE\
             ,\n    FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE"
        );
    }

    #[test]
    fn test_foreign_keys_follow_column_overrides() {
        let clause = foreign_keys(
            &names(PivotRequest::new("users", "roles").with_columns("r", "u")),
            MigrationFormat::Sql,
            ReferentialAction::Restrict,
        );
        assert!(clause.contains("FOREIGN KEY (r) REFERENCES roles (id) ON DELETE RESTRICT"));
        assert!(clause.contains("FOREIGN KEY (u) REFERENCES users (id) ON DELETE RESTRICT"));
    }

    #[test]
    fn test_token_values() {
        let values = token_values(&names(PivotRequest::new("users", "roles")), String::new());
        assert_eq!(values.len(), tokens::ALL.len());
        assert_eq!(values[tokens::CLASS], "CreateRoleUserPivotTable");
        assert_eq!(values[tokens::PIVOT_TABLE_NAME], "role_user");
        assert_eq!(values[tokens::COLUMN_ONE], "role_id");
        assert_eq!(values[tokens::COLUMN_TWO], "user_id");
        assert_eq!(values[tokens::TABLE_ONE], "roles");
        assert_eq!(values[tokens::TABLE_TWO], "users");
        assert_eq!(values[tokens::FOREIGN_KEYS], "");
    }
}
