use crate::constants::dot::DEPENDENCY_SEPARATOR;
use crate::core::{BinaryIndex, DescriptorStore};
use crate::graph::types::{GraphLine, GraphLines};

/// Builder for the set of node and edge lines of a Build-Depends graph
///
/// Dependencies are resolved against a [`BinaryIndex`]; names that no local
/// directory produces are external and contribute nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder {
    reverse: bool,
}

impl GraphBuilder {
    /// Create a new graph builder
    ///
    /// # Arguments
    /// * `reverse` - Point edges from a dependency to its dependent (build
    ///   order) instead of from a dependent to its dependency
    pub fn new(reverse: bool) -> Self {
        Self { reverse }
    }

    pub fn build(&self, descriptors: &DescriptorStore, index: &BinaryIndex) -> GraphLines {
        let mut lines = GraphLines::new();

        for descriptor in descriptors.iter() {
            let directory = descriptor.directory();
            lines.insert(GraphLine::Node(directory));

            for dependency in dependency_names(descriptor.build_depends()) {
                let Some(target) = index.get(dependency) else {
                    continue;
                };

                lines.insert(GraphLine::Node(target));
                let edge = if self.reverse {
                    GraphLine::Edge {
                        from: target,
                        to: directory,
                    }
                } else {
                    GraphLine::Edge {
                        from: directory,
                        to: target,
                    }
                };
                lines.insert(edge);
            }
        }

        lines
    }
}

/// Bare package names of a normalized Build-Depends field
///
/// Only the first word of each relation is kept, so version constraints,
/// architecture qualifiers and every alternative after the first are dropped.
pub fn dependency_names(build_depends: &str) -> impl Iterator<Item = &str> {
    build_depends
        .split(DEPENDENCY_SEPARATOR)
        .map(bare_dependency_name)
        .filter(|name| !name.is_empty())
}

/// Package name of a single relation, up to the first space
pub fn bare_dependency_name(relation: &str) -> &str {
    relation.split(' ').next().unwrap_or_default()
}
