//! Graph command executor

use std::fs::File;
use std::io::{self, BufWriter};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::analyzer::PackageAnalyzer;
use crate::config::GraphOptions;
use crate::executors::CommandExecutor;
use crate::graph::{GraphRenderer, build_graph_lines};
use crate::progress::ProgressReporter;
use crate::utils::string::pluralize;

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let graph_config = config.graph_config();

        if !config.quiet {
            eprintln!(
                "{} Generating {} graph...",
                style("📊").cyan(),
                if graph_config.reverse {
                    "build order"
                } else {
                    "dependency order"
                }
            );
        }

        let mut progress = ProgressReporter::for_stderr(config.quiet);

        let mut analyzer = PackageAnalyzer::new();
        analyzer
            .discover_packages(&config.paths, progress.as_mut())
            .wrap_err("Failed to load source packages")?;

        if analyzer.descriptors().is_empty() && !config.quiet {
            eprintln!("{} No source packages found to graph", style("ℹ").blue());
        }

        let lines = build_graph_lines(analyzer.descriptors(), graph_config.reverse);
        let renderer = GraphRenderer::new(graph_config.sorted);

        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        renderer
            .render_dot(&lines, output_writer.as_mut())
            .wrap_err("Failed to write DOT graph")?;

        if !config.quiet {
            let nodes = lines.node_count();
            let edges = lines.edge_count();
            eprintln!(
                "{} {} {}, {} {}",
                style("✓").green(),
                style(nodes).yellow().bold(),
                pluralize("package", nodes),
                style(edges).yellow().bold(),
                pluralize("edge", edges)
            );
        }

        if let Some(output_path) = config.output
            && !config.quiet
        {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
