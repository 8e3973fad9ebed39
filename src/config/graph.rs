//! Graph command configuration

use std::path::PathBuf;

use crate::graph::GraphConfig;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub paths: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub build_order: bool,
    pub sorted: bool,
    pub quiet: bool,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }

    /// Mode switches handed to the graph builder and renderer
    pub fn graph_config(&self) -> GraphConfig {
        GraphConfig::new(self.build_order, self.sorted)
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    paths: Option<Vec<PathBuf>>,
    output: Option<Option<PathBuf>>,
    build_order: Option<bool>,
    sorted: Option<bool>,
    quiet: Option<bool>,
}

impl GraphOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_build_order(mut self, build_order: bool) -> Self {
        self.build_order = Some(build_order);
        self
    }

    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = Some(sorted);
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }
}

impl crate::common::ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, crate::error::BuildDependsError> {
        Ok(GraphOptions {
            paths: self.paths.ok_or_else(|| {
                crate::error::BuildDependsError::ConfigurationError {
                    message: "Missing required field: paths".to_string(),
                }
            })?,
            output: self.output.ok_or_else(|| {
                crate::error::BuildDependsError::ConfigurationError {
                    message: "Missing required field: output".to_string(),
                }
            })?,
            build_order: self.build_order.ok_or_else(|| {
                crate::error::BuildDependsError::ConfigurationError {
                    message: "Missing required field: build_order".to_string(),
                }
            })?,
            sorted: self.sorted.unwrap_or(true),
            quiet: self.quiet.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_builder_defaults() {
        let options = GraphOptions::builder()
            .with_paths(vec![])
            .with_output(None)
            .with_build_order(true)
            .build()
            .unwrap();

        assert!(options.sorted);
        assert!(!options.quiet);
        assert_eq!(options.graph_config(), GraphConfig::build_order());
    }

    #[test]
    fn test_builder_missing_field() {
        let result = GraphOptions::builder()
            .with_paths(vec![])
            .with_build_order(false)
            .build();

        assert!(matches!(
            result,
            Err(crate::error::BuildDependsError::ConfigurationError { ref message })
                if message.contains("output")
        ));
    }

    #[test]
    fn test_unsorted_dependency_order() {
        let options = GraphOptions::builder()
            .with_paths(vec![PathBuf::from("pkg")])
            .with_output(Some(PathBuf::from("out.dot")))
            .with_build_order(false)
            .with_sorted(false)
            .build()
            .unwrap();

        assert_eq!(options.graph_config(), GraphConfig::new(false, false));
    }
}
