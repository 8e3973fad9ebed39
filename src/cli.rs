use std::path::PathBuf;

use clap::Parser;

use crate::common::CommonArgs;

#[derive(Parser, Debug)]
#[command(
    name = "bd",
    about = "Debian Build-Depends Graph Generator",
    long_about = "bd scans Debian source package directories (directories containing \
                  debian/control), resolves each package's Build-Depends against the binary \
                  packages built locally, and prints a Graphviz DOT graph. By default edges \
                  point from a package to what it depends on; --build-order reverses them so \
                  they point from what must be built first to what needs it.",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Generate build order instead of dependency order
    #[arg(short = 'b', long, env = "BD_BUILD_ORDER")]
    pub build_order: bool,

    /// Skip the stable ordering of nodes and edges
    #[arg(long, env = "BD_UNSORTED")]
    pub unsorted: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long, env = "BD_OUTPUT")]
    pub output: Option<PathBuf>,
}
