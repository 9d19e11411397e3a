//! Preview a generation run without writing anything.
//!
//! Prints the resolved dependency set (marking structure-locked picks) and
//! the file tree that `fastgen new` would produce for the same flags.
//! Supports text and JSON output.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;

use crate::cli::common::ConfigArgs;
use crate::config::{ProjectConfig, Structure};
use crate::generator;
use crate::resolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Command to preview the resolved dependencies and file tree.
#[derive(Args)]
pub struct PreviewCommand {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl PreviewCommand {
    pub async fn execute(self) -> Result<()> {
        let config = self.config.into_config()?;
        let selection =
            resolver::derive_effective_selection(config.structure, &config.dependencies)?;
        let deps = resolver::resolve(&config)?;
        let files = generator::build(&config, &deps)?;

        match self.format {
            OutputFormat::Json => {
                let payload = serde_json::json!({
                    "project_name": config.project_name,
                    "structure": config.structure.label(),
                    "packaging": config.packaging.label(),
                    "database": config.effective_database().label(),
                    "dependencies": deps.specifiers(),
                    "locked_ids": selection.locked,
                    "files": files.iter().map(|f| f.relative_path.as_str()).collect::<Vec<_>>(),
                    "run_command": run_command(&config),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }
            OutputFormat::Text => {
                println!(
                    "{} ({} structure, {} packaging, {} database)",
                    config.project_name.bright_white().bold(),
                    config.structure,
                    config.packaging,
                    config.effective_database()
                );

                println!("\n{}", "Dependencies:".cyan());
                for specifier in &deps {
                    println!("  {specifier}");
                }
                if !selection.locked.is_empty() {
                    println!(
                        "  {} {}",
                        "locked by structure:".yellow(),
                        selection.locked.join(", ")
                    );
                }

                println!("\n{}", "Files:".cyan());
                for file in &files {
                    println!("  {}/{}", config.project_name, file.relative_path);
                }

                println!("\n{}", "Run:".cyan());
                println!("  $ {}", run_command(&config));
            }
        }

        Ok(())
    }
}

/// Command-preview line for running the generated app; this is the one
/// place the configured package name is used.
fn run_command(config: &ProjectConfig) -> String {
    let module_prefix = match config.structure {
        Structure::Structured => format!("{}.", config.package_name),
        Structure::Enterprise => "app.".to_string(),
        Structure::Simple => String::new(),
    };
    format!(
        "cd {} && {}uvicorn {}main:app --reload",
        config.project_name,
        config.packaging.run_prefix(),
        module_prefix
    )
}
