//! Core graph types
//!
//! Graph lines are kept as their rendered DOT statements. Two lines are the
//! same line exactly when their rendered text is equal.

use std::collections::HashSet;
use std::fmt;

use crate::constants::dot::EDGE_MARKER;

/// Mode switches for graph construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Point edges from a dependency to its dependent (build order)
    pub reverse: bool,
    /// Emit nodes and edges in lexicographic order
    pub sorted: bool,
}

impl GraphConfig {
    pub fn new(reverse: bool, sorted: bool) -> Self {
        Self { reverse, sorted }
    }

    /// Edges point from what must be built first to what needs it
    pub fn build_order() -> Self {
        Self::new(true, true)
    }

    /// Edges point from a package to what it depends on
    pub fn dependency_order() -> Self {
        Self::new(false, true)
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::dependency_order()
    }
}

/// A single statement of the output graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphLine<'a> {
    Node(&'a str),
    Edge { from: &'a str, to: &'a str },
}

impl fmt::Display for GraphLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphLine::Node(id) => writeln!(f, "\"{}\";", quote(id)),
            GraphLine::Edge { from, to } => {
                writeln!(f, "\"{}\"{}\"{}\";", quote(from), EDGE_MARKER, quote(to))
            }
        }
    }
}

fn quote(id: &str) -> String {
    id.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Deduplicated set of rendered graph lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphLines {
    lines: HashSet<String>,
}

impl GraphLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a line, returning `false` when an identical line was already
    /// present
    pub fn insert(&mut self, line: GraphLine<'_>) -> bool {
        self.lines.insert(line.to_string())
    }

    pub fn contains(&self, line: &GraphLine<'_>) -> bool {
        self.lines.contains(&line.to_string())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in the set's native iteration order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Split into node lines and edge lines, in native iteration order
    pub fn partition(&self) -> (Vec<&str>, Vec<&str>) {
        self.iter().partition(|line| !is_edge_line(line))
    }

    pub fn node_count(&self) -> usize {
        self.iter().filter(|line| !is_edge_line(line)).count()
    }

    pub fn edge_count(&self) -> usize {
        self.iter().filter(|line| is_edge_line(line)).count()
    }
}

pub(crate) fn is_edge_line(line: &str) -> bool {
    line.contains(EDGE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_node_line() {
        assert_eq!(GraphLine::Node("opx-base").to_string(), "\"opx-base\";\n");
    }

    #[test]
    fn test_render_edge_line() {
        let edge = GraphLine::Edge {
            from: "opx-nas",
            to: "opx-base",
        };
        assert_eq!(edge.to_string(), "\"opx-nas\" -> \"opx-base\";\n");
    }

    #[test]
    fn test_quotes_are_escaped() {
        assert_eq!(GraphLine::Node("a\"b").to_string(), "\"a\\\"b\";\n");
    }

    #[test]
    fn test_backslashes_are_escaped() {
        assert_eq!(GraphLine::Node("pkg\\").to_string(), "\"pkg\\\\\";\n");
        assert_eq!(
            GraphLine::Edge {
                from: "a\\\"b",
                to: "c"
            }
            .to_string(),
            "\"a\\\\\\\"b\" -> \"c\";\n"
        );
    }

    #[test]
    fn test_identical_lines_collapse() {
        let mut lines = GraphLines::new();

        assert!(lines.insert(GraphLine::Node("a")));
        assert!(!lines.insert(GraphLine::Node("a")));
        assert!(lines.insert(GraphLine::Edge { from: "a", to: "b" }));
        assert!(!lines.insert(GraphLine::Edge { from: "a", to: "b" }));
        assert!(lines.insert(GraphLine::Edge { from: "b", to: "a" }));

        assert_eq!(lines.len(), 3);
        assert_eq!(lines.node_count(), 1);
        assert_eq!(lines.edge_count(), 2);
    }

    #[test]
    fn test_partition() {
        let mut lines = GraphLines::new();
        lines.insert(GraphLine::Node("a"));
        lines.insert(GraphLine::Node("b"));
        lines.insert(GraphLine::Edge { from: "a", to: "b" });

        let (nodes, edges) = lines.partition();
        assert_eq!(nodes.len(), 2);
        assert_eq!(edges, vec!["\"a\" -> \"b\";\n"]);
    }

    #[test]
    fn test_default_config_is_sorted_dependency_order() {
        let config = GraphConfig::default();
        assert!(!config.reverse);
        assert!(config.sorted);
        assert!(GraphConfig::build_order().reverse);
    }
}
