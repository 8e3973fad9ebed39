//! Command implementations for the bd CLI

pub mod graph;

use miette::Result;

use crate::cli::Cli;

/// Execute the command described by the parsed CLI
pub fn execute_command(command: Cli) -> Result<()> {
    graph::execute_graph_command(command)
}
