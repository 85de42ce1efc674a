//! Command-line arguments

use std::path::PathBuf;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{ArgAction, Parser};
use pivotgen_codegen::{GeneratorConfig, PivotRequest};
use pivotgen_core::{EngineResult, MigrationFormat};

use crate::config::{CONFIG_FILE_NAME, ProjectConfig};

/// Create a new migration pivot class.
#[derive(Parser, Debug, Clone)]
#[command(name = "pivotgen", author, version, about, long_about = None)]
pub struct Cli {
    /// The name of the first table.
    #[arg(value_name = "tableOne")]
    pub table_one: Option<String>,

    /// The name of the second table.
    #[arg(value_name = "tableTwo")]
    pub table_two: Option<String>,

    /// Optional action name.
    #[arg(long = "action")]
    pub action: Option<String>,

    /// Optional name for the first field.
    #[arg(long = "columnOne")]
    pub column_one: Option<String>,

    /// Optional name for the second field.
    #[arg(long = "columnTwo")]
    pub column_two: Option<String>,

    /// Optional path for a migration, relative to the base path.
    #[arg(long = "path")]
    pub path: Option<String>,

    /// Optional filename for a migration.
    #[arg(long = "filename")]
    pub filename: Option<String>,

    /// Optional tablename for a migration.
    #[arg(long = "tableName")]
    pub table_name: Option<String>,

    /// Optional classname for a migration.
    #[arg(long = "className")]
    pub class_name: Option<String>,

    /// Create foreign keys automatically with the pivot table.
    #[arg(
        long = "useForeignKeys",
        value_name = "BOOL",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub use_foreign_keys: Option<bool>,

    /// Migration format.
    #[arg(long, value_parser = format_parser())]
    pub format: Option<MigrationFormat>,

    /// Project root that output paths are resolved against.
    #[arg(long, env = "PIVOTGEN_BASE_PATH", default_value = ".")]
    pub base_path: PathBuf,

    /// Directory searched for pivot_<action> stubs before the built-in ones.
    #[arg(long, env = "PIVOTGEN_STUB_DIR")]
    pub stub_dir: Option<PathBuf>,

    /// Project config file [default: <base-path>/pivotgen.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Overwrite the migration if it already exists.
    #[arg(long)]
    pub force: bool,

    /// Print the migration instead of writing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the selected verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Load the project config file for this invocation.
    pub fn project_config(&self) -> EngineResult<ProjectConfig> {
        match &self.config {
            Some(path) => ProjectConfig::load(path, true),
            None => ProjectConfig::load(&self.base_path.join(CONFIG_FILE_NAME), false),
        }
    }

    /// Merge flags over `project` into generator config and request.
    pub fn resolve(&self, project: &ProjectConfig) -> EngineResult<(GeneratorConfig, PivotRequest)> {
        let format = self.format.or(project.format).unwrap_or_default();

        let mut config = GeneratorConfig::new()
            .with_base_path(&self.base_path)
            .with_format(format)
            .with_on_delete(project.on_delete.unwrap_or_default());

        if let Some(dir) = self
            .stub_dir
            .clone()
            .or_else(|| project.stub_dir_in(&self.base_path))
        {
            config = config.with_stub_dir(dir);
        }
        if self.force || project.overwrite.unwrap_or(false) {
            config = config.allow_overwrite();
        }

        let request = PivotRequest {
            table_one: self.table_one.clone(),
            table_two: self.table_two.clone(),
            action: self.action.clone(),
            column_one: self.column_one.clone(),
            column_two: self.column_two.clone(),
            path: self.path.clone().or_else(|| project.migrations_path.clone()),
            filename: self.filename.clone(),
            table_name: self.table_name.clone(),
            class_name: self.class_name.clone(),
            use_foreign_keys: self
                .use_foreign_keys
                .or(project.use_foreign_keys)
                .unwrap_or(true),
        };

        Ok((config, request))
    }
}

/// `--format` values, parsed the same way as `format` in `pivotgen.toml`
fn format_parser() -> impl TypedValueParser<Value = MigrationFormat> {
    PossibleValuesParser::new(["laravel", "php", "sql"])
        .try_map(|name| name.parse::<MigrationFormat>())
}

// ============================================================================
// Tests
// ============================================================================
