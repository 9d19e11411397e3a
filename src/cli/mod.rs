//! Command-line interface for fastgen.
//!
//! Each command is implemented as a separate module with its own argument
//! structure and execution logic, dispatched from the [`Cli`] root. This
//! modular design keeps commands independently testable and makes adding a
//! new command a local change.
//!
//! # Available Commands
//!
//! - `new` - Generate a project scaffold archive
//! - `preview` - Show the resolved dependencies and file tree without writing
//! - `catalog` - List the pickable dependency catalog
//! - `init` - Write a starter `fastgen.toml` configuration file
//!
//! # Basic Workflow
//!
//! ```bash
//! # 1. Write a config file (optional; flags work standalone)
//! fastgen init
//!
//! # 2. Inspect what would be generated
//! fastgen preview --config fastgen.toml
//!
//! # 3. Generate the archive
//! fastgen new --config fastgen.toml
//! ```
//!
//! # Global Options
//!
//! All commands support `--verbose` (debug logging) and `--quiet` (errors
//! only); logging honors `RUST_LOG` when set.

pub mod catalog;
pub mod common;
pub mod init;
pub mod new;
pub mod preview;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Main CLI structure for fastgen.
#[derive(Parser)]
#[command(
    name = "fastgen",
    about = "FastAPI project generator - scaffold production-ready starter projects",
    version,
    author,
    long_about = "fastgen assembles a zip archive of a templated FastAPI starter project \
                  from a small configuration: structure style, packaging manager, database, \
                  and dependency picks."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging
    ///
    /// Equivalent to RUST_LOG=debug. Mutually exclusive with --quiet.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Generate a project scaffold archive.
    ///
    /// Resolves dependencies, builds the file tree for the selected
    /// structure, and writes `{name}.zip` to the output directory.
    New(new::NewCommand),

    /// Show the resolved dependencies and file tree without writing.
    Preview(preview::PreviewCommand),

    /// List the pickable dependency catalog.
    Catalog(catalog::CatalogCommand),

    /// Write a starter fastgen.toml configuration file.
    Init(init::InitCommand),
}

impl Cli {
    /// Execute the parsed command.
    pub async fn execute(self) -> Result<()> {
        self.init_tracing();

        match self.command {
            Commands::New(cmd) => cmd.execute().await,
            Commands::Preview(cmd) => cmd.execute().await,
            Commands::Catalog(cmd) => cmd.execute().await,
            Commands::Init(cmd) => cmd.execute().await,
        }
    }

    /// Set up the tracing subscriber from the verbosity flags.
    ///
    /// An explicit RUST_LOG wins over the flags; repeated initialization
    /// (tests) is ignored.
    fn init_tracing(&self) {
        let default_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
