use std::io::Write;

use miette::Result;

use crate::constants::dot::{DIGRAPH_FOOTER, DIGRAPH_HEADER};
use crate::error::BuildDependsError;
use crate::graph::types::GraphLines;

pub struct GraphRenderer {
    sorted: bool,
}

impl GraphRenderer {
    pub fn new(sorted: bool) -> Self {
        Self { sorted }
    }

    /// Render the lines as a strict DOT digraph
    ///
    /// Sorted output lists every node line before every edge line, each group
    /// ordered by its rendered text, so equal line sets always render to the
    /// same bytes. Unsorted output follows the set's own iteration order.
    pub fn render_to_string(&self, lines: &GraphLines) -> String {
        let mut output = String::from(DIGRAPH_HEADER);

        if self.sorted {
            let (mut nodes, mut edges) = lines.partition();
            nodes.sort_unstable();
            edges.sort_unstable();

            for line in nodes.into_iter().chain(edges) {
                output.push_str(line);
            }
        } else {
            for line in lines.iter() {
                output.push_str(line);
            }
        }

        output.push_str(DIGRAPH_FOOTER);
        output
    }

    pub fn render_dot(&self, lines: &GraphLines, output: &mut dyn Write) -> Result<()> {
        output
            .write_all(self.render_to_string(lines).as_bytes())
            .map_err(BuildDependsError::from)?;
        output.flush().map_err(BuildDependsError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::GraphLine;

    fn sample_lines() -> GraphLines {
        let mut lines = GraphLines::new();
        lines.insert(GraphLine::Edge {
            from: "opx-nas-l2",
            to: "opx-base",
        });
        lines.insert(GraphLine::Node("opx-nas-l2"));
        lines.insert(GraphLine::Edge {
            from: "opx-nas-l2",
            to: "opx-logging",
        });
        lines.insert(GraphLine::Node("opx-logging"));
        lines.insert(GraphLine::Node("opx-base"));
        lines
    }

    #[test]
    fn test_sorted_nodes_before_edges() {
        let renderer = GraphRenderer::new(true);

        let output = renderer.render_to_string(&sample_lines());

        assert_eq!(
            output,
            "strict digraph \"builddepends\" {\n\
             \"opx-base\";\n\
             \"opx-logging\";\n\
             \"opx-nas-l2\";\n\
             \"opx-nas-l2\" -> \"opx-base\";\n\
             \"opx-nas-l2\" -> \"opx-logging\";\n\
             }\n"
        );
    }

    #[test]
    fn test_sorted_render_is_idempotent() {
        let renderer = GraphRenderer::new(true);
        let lines = sample_lines();

        let first = renderer.render_to_string(&lines);
        for _ in 0..10 {
            assert_eq!(renderer.render_to_string(&lines), first);
        }
    }

    #[test]
    fn test_unsorted_contains_every_line() {
        let renderer = GraphRenderer::new(false);
        let lines = sample_lines();

        let output = renderer.render_to_string(&lines);

        assert!(output.starts_with(DIGRAPH_HEADER));
        assert!(output.ends_with(DIGRAPH_FOOTER));
        for line in lines.iter() {
            assert!(output.contains(line));
        }
        assert_eq!(output.lines().count(), lines.len() + 2);
    }

    #[test]
    fn test_empty_graph() {
        let renderer = GraphRenderer::new(true);

        assert_eq!(
            renderer.render_to_string(&GraphLines::new()),
            "strict digraph \"builddepends\" {\n}\n"
        );
    }

    #[test]
    fn test_render_dot_to_writer() {
        let renderer = GraphRenderer::new(true);
        let mut output = Cursor::new(Vec::new());

        renderer.render_dot(&sample_lines(), &mut output).unwrap();

        let text = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(text, renderer.render_to_string(&sample_lines()));
    }
}
