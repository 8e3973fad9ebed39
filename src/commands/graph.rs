//! Graph command implementation

use miette::{Result, WrapErr};

use crate::cli::Cli;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::GraphOptions;
use crate::error::BuildDependsError;

impl FromCommand for GraphOptions {
    fn from_command(command: Cli) -> Result<Self, BuildDependsError> {
        GraphOptions::builder()
            .with_paths(command.common.get_paths())
            .with_output(command.output)
            .with_build_order(command.build_order)
            .with_sorted(!command.unsorted)
            .with_quiet(command.common.quiet)
            .build()
    }
}

crate::impl_try_from_command!(GraphOptions);

/// Execute the graph command
pub fn execute_graph_command(command: Cli) -> Result<()> {
    let config =
        GraphOptions::try_from(command).wrap_err("Failed to parse graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_options_from_cli() {
        let cli = Cli::try_parse_from(["bd", "--build-order", "--unsorted", "-q", "pkg"]).unwrap();

        let options = GraphOptions::from_command(cli).unwrap();

        assert!(options.build_order);
        assert!(!options.sorted);
        assert!(options.quiet);
        assert_eq!(options.paths, vec![std::path::PathBuf::from("pkg")]);
    }
}
