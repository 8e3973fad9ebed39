//! # Package Analysis Module
//!
//! Discovers Debian source package directories and parses their
//! `debian/control` files into the [`DescriptorStore`] the graph is built
//! from.
//!
//! Control files are parsed in parallel. The first parse failure aborts the
//! whole analysis; no partial store is ever exposed.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use builddepends::analyzer::PackageAnalyzer;
//! use builddepends::graph::{GraphConfig, build_graph};
//!
//! # fn main() -> miette::Result<()> {
//! let mut analyzer = PackageAnalyzer::new();
//! analyzer.discover_packages(&[PathBuf::from("opx-base"), PathBuf::from("opx-nas-l2")], None)?;
//!
//! print!("{}", build_graph(analyzer.descriptors(), GraphConfig::build_order()));
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use indicatif::{ParallelProgressIterator, ProgressBar};
use miette::{Result, WrapErr};
use rayon::prelude::*;

use crate::control_parser::ControlFile;
use crate::core::{Descriptor, DescriptorStore};
use crate::discovery::{PackageDirectory, PackageDiscovery};
use crate::error::BuildDependsError;
use crate::progress::ProgressReporter;

#[derive(Debug, Clone, Default)]
pub struct PackageAnalyzer {
    base: Option<PathBuf>,
    descriptors: DescriptorStore,
}

impl PackageAnalyzer {
    /// Analyzer resolving paths against the current directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer resolving paths against `base`
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
            descriptors: DescriptorStore::new(),
        }
    }

    /// Discover package directories among `entries` (or the immediate
    /// children of the base directory) and parse each control file
    pub fn discover_packages(
        &mut self,
        entries: &[PathBuf],
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<()> {
        if let Some(p) = progress.as_deref_mut() {
            p.start_discovery();
        }

        let discovery = match &self.base {
            Some(base) => PackageDiscovery::with_base(base),
            None => PackageDiscovery::new(),
        };
        let directories = discovery
            .discover(entries)
            .wrap_err("Failed to discover package directories")?;

        if let Some(p) = progress.as_deref_mut() {
            p.finish_discovery(directories.len());
        }

        let bar = match progress.as_deref_mut() {
            Some(p) => p.start_parsing(directories.len()),
            None => ProgressBar::hidden(),
        };
        let reporter = progress.as_deref();

        let parsed: Result<Vec<Descriptor>, BuildDependsError> = directories
            .par_iter()
            .progress_with(bar)
            .map(|directory| {
                if let Some(p) = reporter {
                    p.parsing_control(&directory.id);
                }
                parse_directory(directory)
            })
            .collect();

        if let Some(p) = progress {
            p.finish_parsing();
        }

        let descriptors = parsed.wrap_err("Failed to parse debian/control files")?;

        self.descriptors = descriptors.into_iter().collect();

        Ok(())
    }

    pub fn descriptors(&self) -> &DescriptorStore {
        &self.descriptors
    }
}

fn parse_directory(directory: &PackageDirectory) -> Result<Descriptor, BuildDependsError> {
    ControlFile::parse_file(&directory.control_path())?.into_descriptor(&directory.id)
}
