//! Constants shared across builddepends
//!
//! File layout, output format, and progress display values live here so the
//! graph code and the collaborators agree on them.

use std::time::Duration;

/// Debian source package layout
pub mod package {
    /// Metadata file, relative to a package directory
    pub const CONTROL_FILE: &str = "debian/control";

    /// Field naming the source package in the first paragraph
    pub const SOURCE_FIELD: &str = "Source";

    /// Field naming a binary package in the following paragraphs
    pub const PACKAGE_FIELD: &str = "Package";

    pub const BUILD_DEPENDS_FIELD: &str = "Build-Depends";
}

/// DOT output format
pub mod dot {
    pub const DIGRAPH_HEADER: &str = "strict digraph \"builddepends\" {\n";
    pub const DIGRAPH_FOOTER: &str = "}\n";

    /// Marker separating the endpoints of an edge line
    pub const EDGE_MARKER: &str = " -> ";

    /// Separator between relations in a normalized Build-Depends field
    pub const DEPENDENCY_SEPARATOR: &str = ", ";
}

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 4);
    }

    #[test]
    fn test_dot_frame() {
        assert!(dot::DIGRAPH_HEADER.starts_with("strict digraph"));
        assert!(dot::DIGRAPH_FOOTER.ends_with('\n'));
    }
}
