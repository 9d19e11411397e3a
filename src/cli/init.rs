//! Initialize a fastgen configuration file.
//!
//! Creates a `fastgen.toml` in the target directory with the default
//! configuration and commented value sets, ready to edit and feed to
//! `fastgen new --config fastgen.toml`.
//!
//! # Examples
//!
//! ```bash
//! fastgen init
//! fastgen init --path ./my-project
//! fastgen init --force
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;

use crate::constants::CONFIG_FILE_NAME;

/// Command to write a starter `fastgen.toml`.
#[derive(Args)]
pub struct InitCommand {
    /// Path to create the config file in (defaults to current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Force overwrite if a config file already exists
    #[arg(short, long)]
    force: bool,
}

impl InitCommand {
    pub async fn execute(self) -> Result<()> {
        let target_dir = self.path.unwrap_or_else(|| PathBuf::from("."));
        let config_path = target_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() && !self.force {
            return Err(anyhow!(
                "Config file already exists at {}. Use --force to overwrite",
                config_path.display()
            ));
        }

        if !target_dir.exists() {
            fs::create_dir_all(&target_dir)?;
        }

        let template = r#"# fastgen project configuration
# Generate the project with: fastgen new --config fastgen.toml

project_name = "my-fastapi-project"
description = "A FastAPI application"
package_name = "app"

# One of: "3.9", "3.10", "3.11", "3.12"
python_version = "3.12"

# One of: "uv", "poetry", "pip", "pipenv"
packaging = "uv"

# One of: "simple", "structured", "enterprise"
# The enterprise structure forces database = "postgres" and locks its
# mandated dependency set.
structure = "simple"

# One of: "none", "postgres", "mysql", "mongodb", "sqlite"
database = "none"

# Extra dependency picks by catalog id; run 'fastgen catalog' to list ids.
# Example: dependencies = ["httpx", "passlib"]
dependencies = []
"#;
        fs::write(&config_path, template)?;

        println!("{} Initialized {} at {}", "✓".green(), CONFIG_FILE_NAME, config_path.display());

        println!("\n{}", "Next steps:".cyan());
        println!("  Edit {} to describe your project", CONFIG_FILE_NAME);
        println!(
            "  Then run {} to generate it",
            format!("fastgen new --config {CONFIG_FILE_NAME}").bright_white()
        );

        Ok(())
    }
}
