//! Generate a project archive.
//!
//! This is the main command: it materializes the configuration, resolves
//! dependencies, builds the file tree, and writes `{name}.zip` into the
//! output directory. The whole pipeline is in-memory; the only side effect
//! is the final file write.
//!
//! # Examples
//!
//! ```bash
//! fastgen new --name my-api --structure structured --database postgres
//! fastgen new --config fastgen.toml --output dist/
//! fastgen new --name demo --dep httpx --dep passlib --force
//! ```

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::archive::{self, ProjectArchive};
use crate::cli::common::ConfigArgs;
use crate::generator;
use crate::resolver;

/// Command to generate a project scaffold archive.
#[derive(Args)]
pub struct NewCommand {
    #[command(flatten)]
    config: ConfigArgs,

    /// Directory to write the zip into (created if missing)
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Overwrite an existing archive
    #[arg(short, long)]
    force: bool,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,
}

impl NewCommand {
    pub async fn execute(self) -> Result<()> {
        let config = self.config.into_config()?;
        let archive_path = self.output.join(archive::archive_file_name(&config.project_name));

        if archive_path.exists() && !self.force {
            return Err(anyhow!(
                "Archive already exists at {}. Use --force to overwrite",
                archive_path.display()
            ));
        }

        tracing::info!(
            project = %config.project_name,
            structure = %config.structure,
            packaging = %config.packaging,
            "generating project"
        );

        let deps = resolver::resolve(&config)?;
        let files = generator::build(&config, &deps)?;

        let progress = if self.no_progress {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(files.len() as u64);
            bar.set_style(
                ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        };

        let mut zip = ProjectArchive::new(&config.project_name);
        for file in &files {
            progress.set_message(file.relative_path.clone());
            zip.add_file(&file.relative_path, &file.content)?;
            progress.inc(1);
        }
        let bytes = zip.finish()?;
        progress.finish_and_clear();

        if !self.output.exists() {
            std::fs::create_dir_all(&self.output)?;
        }
        std::fs::write(&archive_path, &bytes)?;

        println!(
            "{} Generated {} ({} files, {} dependencies) at {}",
            "✓".green(),
            config.project_name.bright_white(),
            files.len(),
            deps.len(),
            archive_path.display()
        );

        println!("\n{}", "Next steps:".cyan());
        println!("  unzip {} && cd {}", archive_path.display(), config.project_name);
        println!("  {}", config.packaging.install_command());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn command(name: &str, output: PathBuf, force: bool) -> NewCommand {
        NewCommand {
            config: ConfigArgs {
                name: Some(name.to_string()),
                description: None,
                package_name: None,
                python: None,
                packaging: None,
                structure: None,
                database: None,
                deps: vec![],
                config: None,
            },
            output,
            force,
            no_progress: true,
        }
    }

    #[tokio::test]
    async fn test_new_writes_archive() {
        let temp_dir = TempDir::new().unwrap();
        let cmd = command("demo", temp_dir.path().to_path_buf(), false);

        cmd.execute().await.unwrap();

        let archive_path = temp_dir.path().join("demo.zip");
        assert!(archive_path.exists());

        let bytes = std::fs::read(&archive_path).unwrap();
        let mut zip = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        assert!(zip.by_name("demo/main.py").is_ok());
    }

    #[tokio::test]
    async fn test_new_creates_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let cmd = command("demo", nested.clone(), false);

        cmd.execute().await.unwrap();
        assert!(nested.join("demo.zip").exists());
    }

    #[tokio::test]
    async fn test_new_fails_if_archive_exists() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("demo.zip"), b"existing").unwrap();

        let cmd = command("demo", temp_dir.path().to_path_buf(), false);
        let result = cmd.execute().await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_new_force_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let archive_path = temp_dir.path().join("demo.zip");
        std::fs::write(&archive_path, b"existing").unwrap();

        let cmd = command("demo", temp_dir.path().to_path_buf(), true);
        cmd.execute().await.unwrap();

        let bytes = std::fs::read(&archive_path).unwrap();
        assert!(zip::ZipArchive::new(std::io::Cursor::new(bytes)).is_ok());
    }

    #[tokio::test]
    async fn test_new_is_deterministic_across_runs() {
        let temp_a = TempDir::new().unwrap();
        let temp_b = TempDir::new().unwrap();
        command("demo", temp_a.path().to_path_buf(), false).execute().await.unwrap();
        command("demo", temp_b.path().to_path_buf(), false).execute().await.unwrap();

        let a = std::fs::read(temp_a.path().join("demo.zip")).unwrap();
        let b = std::fs::read(temp_b.path().join("demo.zip")).unwrap();
        assert_eq!(a, b);
    }
}
