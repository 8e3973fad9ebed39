//! # builddepends - Debian Build-Depends Graph Generator
//!
//! builddepends reads the `debian/control` files of a set of Debian source
//! package directories and produces a Graphviz DOT graph of the Build-Depends
//! relations between them. Only dependencies that some local directory builds
//! become edges; everything else is treated as coming from the archive.
//!
//! ## Main Components
//!
//! - **Analyzer**: Discovers package directories and parses their control
//!   files into descriptors
//! - **Graph**: Resolves Build-Depends against the local binary packages and
//!   renders the DOT graph
//!
//! ## Graph Modes
//!
//! - **Dependency order** (default): an edge `a -> b` means `a` build-depends
//!   on a package that `b` builds
//! - **Build order**: the same edge is reversed, `b -> a`, meaning `b` must
//!   be built before `a`
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use builddepends::analyzer::PackageAnalyzer;
//! use builddepends::graph::{GraphConfig, build_graph};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! // Every directory under the current one that has a debian/control file
//! let mut analyzer = PackageAnalyzer::new();
//! analyzer.discover_packages(&[], None)?;
//!
//! let dot = build_graph(analyzer.descriptors(), GraphConfig::build_order());
//! std::fs::write("build-order.dot", dot).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod control_parser;
mod discovery;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod graph;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    execute_command(Cli::parse())
}
