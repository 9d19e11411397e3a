//! Shared CLI argument structures.
//!
//! [`ConfigArgs`] is flattened into every subcommand that needs a full
//! project configuration. A `fastgen.toml` file (via `--config`) provides
//! the base values and individual flags override it, so a checked-in config
//! can be tweaked per invocation without editing the file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::config::{Database, Packaging, ProjectConfig, PythonVersion, Structure};

/// Project configuration surface shared by `new` and `preview`.
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Project name (archive root directory and zip name)
    #[arg(long)]
    pub name: Option<String>,

    /// One-line project description
    #[arg(long)]
    pub description: Option<String>,

    /// Import package name, used only in command previews
    #[arg(long)]
    pub package_name: Option<String>,

    /// Python version lower bound
    #[arg(long, value_enum)]
    pub python: Option<PythonVersion>,

    /// Packaging manager whose manifest is emitted
    #[arg(long, value_enum)]
    pub packaging: Option<Packaging>,

    /// Output-tree shape
    #[arg(long, value_enum)]
    pub structure: Option<Structure>,

    /// Database selection (forced to postgres by the enterprise structure)
    #[arg(long, value_enum)]
    pub database: Option<Database>,

    /// Extra dependency pick by catalog id; repeat for multiple picks
    #[arg(long = "dep", value_name = "ID")]
    pub deps: Vec<String>,

    /// Read base configuration from a fastgen.toml file; flags override it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ConfigArgs {
    /// Materialize a validated [`ProjectConfig`] from the file (if any) and
    /// flag overrides.
    pub fn into_config(self) -> Result<ProjectConfig> {
        let mut config = match &self.config {
            Some(path) => ProjectConfig::load(path)?,
            None => ProjectConfig::default(),
        };

        if let Some(name) = self.name {
            config.project_name = name;
        }
        if let Some(description) = self.description {
            config.description = description;
        }
        if let Some(package_name) = self.package_name {
            config.package_name = package_name;
        }
        if let Some(python) = self.python {
            config.python_version = python;
        }
        if let Some(packaging) = self.packaging {
            config.packaging = packaging;
        }
        if let Some(structure) = self.structure {
            config.structure = structure;
        }
        if let Some(database) = self.database {
            config.database = database;
        }
        if !self.deps.is_empty() {
            config.dependencies = self.deps;
        }

        // Keep the stored field consistent with what generation will use.
        if config.structure == Structure::Enterprise {
            config.database = Database::Postgres;
        }

        config.validate()?;
        Ok(config)
    }
}
