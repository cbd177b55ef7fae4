//! mermaid-fmt - Format, fix and lint Mermaid diagram source
//!
//! This library builds well-formed Mermaid text from structured descriptions,
//! and repairs or flags a handful of patterns that are known to break rendering
//! (line breaks inside quoted labels, stray code fences, `List~T~` generics).
//!
//! # Example
//!
//! ```rust
//! use mermaid_fmt::{fix_common_issues, format_flowchart, validate_mermaid_syntax};
//! use mermaid_fmt::{Connection, Node, NodeType};
//!
//! let nodes = vec![
//!     Node::new("A", "Start\nHere", NodeType::Start),
//!     Node::new("B", "Done", NodeType::End),
//! ];
//! let connections = vec![Connection::new("A", "B").with_label("go")];
//! let chart = format_flowchart(&nodes, &connections);
//! assert!(chart.contains(r#"A["Start Here"]"#));
//!
//! let fixed = fix_common_issues("```mermaid\nflowchart TD\n    A[\"x\ny\"]\n```");
//! assert_eq!(fixed, "flowchart TD\n    A[\"x y\"]");
//! assert!(validate_mermaid_syntax(&fixed).is_empty());
//! ```
//!
//! # Supported Diagram Types
//!
//! - Flowcharts (flowchart TD / LR / ...)
//! - Sequence diagrams (sequenceDiagram)
//! - Class diagrams (classDiagram)

pub mod error;
pub mod fix;
pub mod generate;
pub mod labels;
pub mod types;
pub mod validate;

pub use error::{Error, Result};
pub use fix::fix_common_issues;
pub use generate::{
    format_class_diagram, format_class_diagram_with, format_flowchart, format_flowchart_with,
    format_sequence_diagram, format_sequence_diagram_with, DiagramSpec,
};
pub use labels::clean_node_labels;
pub use types::*;
pub use validate::{diagnose, validate_mermaid_syntax, Diagnostic};

/// Configuration options for the generators
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Flowchart header direction. Default: TD
    pub direction: Direction,
    /// Spaces per nesting level. Default: 4
    pub indent: usize,
}

impl FormatOptions {
    /// Leading whitespace for the given nesting level
    pub(crate) fn pad(&self, level: usize) -> String {
        " ".repeat(self.indent * level)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            direction: Direction::TD,
            indent: 4,
        }
    }
}
