//! List the dependency catalog.
//!
//! Shows every pickable package with its id, specifier, and description;
//! filterable by category, with table or JSON output.

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;

use crate::catalog::{CATALOG, Category};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Command to list catalog entries.
#[derive(Args)]
pub struct CatalogCommand {
    /// Only show entries in this category
    #[arg(long, value_enum)]
    category: Option<Category>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl CatalogCommand {
    pub async fn execute(self) -> Result<()> {
        let entries: Vec<_> = CATALOG
            .iter()
            .filter(|entry| self.category.is_none_or(|c| entry.category == c))
            .collect();

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
            OutputFormat::Table => {
                let id_width = entries.iter().map(|e| e.id.len()).max().unwrap_or(0);
                let spec_width = entries.iter().map(|e| e.specifier.len()).max().unwrap_or(0);

                for entry in entries {
                    // Pad before coloring; ANSI codes would break alignment.
                    println!(
                        "{}  {:spec_width$}  {}  {}",
                        format!("{:id_width$}", entry.id).bright_white(),
                        entry.specifier,
                        format!("{:10}", entry.category.label()).cyan(),
                        entry.description.dimmed(),
                    );
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_catalog_table_runs() {
        let cmd = CatalogCommand {
            category: None,
            format: OutputFormat::Table,
        };
        cmd.execute().await.unwrap();
    }

    #[tokio::test]
    async fn test_catalog_json_with_filter_runs() {
        let cmd = CatalogCommand {
            category: Some(Category::Auth),
            format: OutputFormat::Json,
        };
        cmd.execute().await.unwrap();
    }
}
