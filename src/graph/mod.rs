//! # Graph Construction and Rendering Module
//!
//! This module turns a [`DescriptorStore`] into a Graphviz DOT description of
//! the Build-Depends relations between local source packages.
//!
//! ## Components
//!
//! - **build_binary_index**: maps each binary package to the directory that
//!   builds it, which decides whether a dependency is local
//! - **GraphBuilder**: resolves each package's Build-Depends through the index
//!   and collects deduplicated node and edge lines
//! - **GraphRenderer**: writes the lines as a strict digraph, optionally in a
//!   stable order
//!
//! ## Example
//!
//! ```
//! use builddepends::common::ConfigBuilder;
//! use builddepends::core::{Descriptor, DescriptorStore};
//! use builddepends::graph::{GraphConfig, build_graph};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut descriptors = DescriptorStore::new();
//! descriptors.insert(
//!     Descriptor::builder()
//!         .with_directory("a")
//!         .with_binaries(["a"])
//!         .with_build_depends("b")
//!         .build()?,
//! );
//! descriptors.insert(Descriptor::builder().with_directory("b").with_binaries(["b"]).build()?);
//!
//! let dot = build_graph(&descriptors, GraphConfig::dependency_order());
//! assert_eq!(
//!     dot,
//!     "strict digraph \"builddepends\" {\n\"a\";\n\"b\";\n\"a\" -> \"b\";\n}\n"
//! );
//! # Ok(())
//! # }
//! ```

mod builder;
mod index;
mod renderer;
mod types;

pub use builder::{GraphBuilder, bare_dependency_name, dependency_names};
pub use index::build_binary_index;
pub use renderer::GraphRenderer;
pub use types::{GraphConfig, GraphLine, GraphLines};

use crate::core::DescriptorStore;

/// Collect the deduplicated graph lines for a set of descriptors
pub fn build_graph_lines(descriptors: &DescriptorStore, reverse: bool) -> GraphLines {
    let index = build_binary_index(descriptors);
    GraphBuilder::new(reverse).build(descriptors, &index)
}

/// Build the DOT text for a set of descriptors
///
/// `config.reverse` selects build order, `config.sorted` a byte-stable
/// output.
pub fn build_graph(descriptors: &DescriptorStore, config: GraphConfig) -> String {
    let lines = build_graph_lines(descriptors, config.reverse);
    GraphRenderer::new(config.sorted).render_to_string(&lines)
}
