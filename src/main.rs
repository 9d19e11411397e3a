//! fastgen CLI entry point.
//!
//! Handles command-line argument parsing, error display, and command
//! execution. The CLI supports:
//! - `new` - Generate a project scaffold archive
//! - `preview` - Show the resolved dependencies and file tree
//! - `catalog` - List the pickable dependency catalog
//! - `init` - Write a starter fastgen.toml configuration file

use anyhow::Result;
use clap::Parser;
use fastgen_cli::cli;
use fastgen_cli::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the command
    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Convert to user-friendly error with context and suggestions
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
