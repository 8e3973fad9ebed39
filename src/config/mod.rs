//! # Configuration Module
//!
//! Configuration structures built from the parsed command line. Each config
//! has a builder that validates required fields.
//!
//! ## Example
//!
//! ```
//! use builddepends::common::ConfigBuilder;
//! use builddepends::config::GraphOptions;
//!
//! let options = GraphOptions::builder()
//!     .with_paths(vec![".".into()])
//!     .with_output(None)
//!     .with_build_order(true)
//!     .build()
//!     .unwrap();
//!
//! assert!(options.graph_config().reverse);
//! assert!(options.graph_config().sorted);
//! ```

pub mod graph;

pub use graph::GraphOptions;
