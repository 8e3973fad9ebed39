//! Core data types and structures
//!
//! This module contains the package descriptor types consumed by the graph
//! code, separated from discovery and parsing.

pub mod types;

pub use types::*;
