//! # pivotgen CLI
//!
//! Command-line interface for pivotgen.
//!
//! ```text
//! pivotgen users roles
//! pivotgen users roles --action=drop --useForeignKeys=false
//! pivotgen posts tags --format sql --path=/db/migrations --dry-run
//! ```
//!
//! Settings are merged from three layers, highest first: command-line
//! flags (and their environment variables), the project's `pivotgen.toml`,
//! and built-in defaults.
//!

pub mod args;
pub mod config;

pub use args::Cli;
pub use clap::Parser;
pub use config::ProjectConfig;

use colored::Colorize;
use pivotgen_codegen::Generator;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run one invocation.
///
/// Writes the migration (or prints it with `--dry-run`) and reports the
/// path on stdout. Any failure is returned to the caller untouched.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let project = cli.project_config()?;
    let (config, request) = cli.resolve(&project)?;
    let generator = Generator::new(config);

    if cli.dry_run {
        let migration = generator.render(&request)?;
        print!("{}", migration.content);
        eprintln!(
            "{} {}",
            "Would create".yellow(),
            migration.path.display()
        );
        return Ok(());
    }

    let path = generator.generate(&request)?;
    println!("{}", "Migration created successfully.".green());
    println!("{}", path.display());
    Ok(())
}
