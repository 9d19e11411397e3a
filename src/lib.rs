//! fastgen - FastAPI project generator
//!
//! A scaffolding tool that assembles a zip archive of a templated FastAPI
//! starter project from a small configuration: project identity, Python
//! version, packaging manager, structure style, database, and dependency
//! picks. Generation is pure and deterministic - the same configuration
//! always produces a byte-identical archive.
//!
//! # Architecture Overview
//!
//! Generation is a straight pipeline:
//!
//! ```text
//! ProjectConfig -> resolver -> generator -> archive -> {name}.zip
//! ```
//!
//! - [`config`] models the input: closed enums for every choice, loaded from
//!   CLI flags or a `fastgen.toml` file, with structure-transition rules
//!   (the enterprise layout forces Postgres and locks its dependency set).
//! - [`resolver`] computes the ordered, de-duplicated package specifier list
//!   and the effective (locked) selection, both derived fresh per run.
//! - [`generator`] maps the resolved configuration to a file tree: one of
//!   three structure variants crossed with four packaging-manifest formats.
//! - [`templating`] renders embedded Tera templates through a process-wide
//!   compiled registry; unknown template ids fail loudly.
//! - [`archive`] serializes the tree into a zip with a single project root
//!   directory, rejecting duplicate paths and pinning timestamps.
//!
//! # Key Properties
//!
//! - **Deterministic**: fixed emission order, pinned zip metadata.
//! - **Reproducible manifests**: user picks are emitted in catalog order,
//!   not selection order.
//! - **Fail-fast**: unknown dependency ids, unknown enum values, duplicate
//!   paths, and unregistered templates all abort the run; no partial
//!   archive is ever written.
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Write a starter config file
//! fastgen init
//!
//! # Inspect the resolved dependencies and file tree
//! fastgen preview --name demo --structure structured --database postgres
//!
//! # Generate the archive
//! fastgen new --name demo --structure structured --database postgres
//!
//! # List pickable dependencies
//! fastgen catalog --category auth
//! ```

// Core functionality modules
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod resolver;

// Generation pipeline
pub mod archive;
pub mod generator;
pub mod templating;

// Supporting modules
pub mod constants;
