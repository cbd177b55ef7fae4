//! Flowchart generator

use crate::types::{Connection, Node, NodeType};
use crate::FormatOptions;

/// Bracket syntax a node is emitted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    Rectangle, // ["text"]
    Rounded,   // ("text")
    Diamond,   // {text}
}

impl NodeShape {
    pub fn for_type(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Process => NodeShape::Rounded,
            NodeType::Decision => NodeShape::Diamond,
            NodeType::Start | NodeType::End | NodeType::Default => NodeShape::Rectangle,
        }
    }

    fn wrap(&self, label: &str) -> String {
        match self {
            NodeShape::Rectangle => format!("[\"{}\"]", label),
            NodeShape::Rounded => format!("(\"{}\")", label),
            NodeShape::Diamond => format!("{{{}}}", label),
        }
    }
}

/// Build a flowchart with the default options (`flowchart TD`, 4-space indent)
pub fn format_flowchart(nodes: &[Node], connections: &[Connection]) -> String {
    format_flowchart_with(nodes, connections, &FormatOptions::default())
}

/// Build a flowchart: header, then one line per node, then one per connection,
/// each in input order.
pub fn format_flowchart_with(
    nodes: &[Node],
    connections: &[Connection],
    options: &FormatOptions,
) -> String {
    let indent = options.pad(1);
    let mut lines = Vec::with_capacity(1 + nodes.len() + connections.len());
    lines.push(format!("flowchart {}", options.direction));

    for node in nodes {
        lines.push(format!("{}{}", indent, render_node(node)));
    }
    for connection in connections {
        lines.push(format!("{}{}", indent, render_connection(connection)));
    }

    lines.join("\n")
}

/// Render a single node statement, e.g. `A["Start Here"]`
pub fn render_node(node: &Node) -> String {
    let label = node.label.replace('\n', " ");
    let shape = NodeShape::for_type(node.node_type);
    format!("{}{}", node.id, shape.wrap(label.trim()))
}

/// Render a single edge statement, labeled only when the label is non-empty
pub fn render_connection(connection: &Connection) -> String {
    match connection.label.as_deref() {
        Some(label) if !label.is_empty() => {
            format!("{} -- \"{}\" --> {}", connection.from, label, connection.to)
        }
        _ => format!("{} --> {}", connection.from, connection.to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use rstest::rstest;

    #[rstest]
    #[case(NodeType::Start, r#"A["Start Here"]"#)]
    #[case(NodeType::End, r#"A["Start Here"]"#)]
    #[case(NodeType::Default, r#"A["Start Here"]"#)]
    #[case(NodeType::Process, r#"A("Start Here")"#)]
    #[case(NodeType::Decision, "A{Start Here}")]
    fn test_node_shapes(#[case] node_type: NodeType, #[case] expected: &str) {
        let node = Node::new("A", "Start\nHere", node_type);
        assert_eq!(render_node(&node), expected);
    }

    #[test]
    fn test_label_is_trimmed() {
        let node = Node::new("B", "  Upload Job\n", NodeType::Start);
        assert_eq!(render_node(&node), r#"B["Upload Job"]"#);
    }

    #[test]
    fn test_connections() {
        let labeled = Connection::new("A", "B").with_label("go");
        assert_eq!(render_connection(&labeled), r#"A -- "go" --> B"#);

        let plain = Connection::new("A", "B");
        assert_eq!(render_connection(&plain), "A --> B");

        let empty = Connection::new("A", "B").with_label("");
        assert_eq!(render_connection(&empty), "A --> B");
    }

    #[test]
    fn test_one_line_per_item_in_order() {
        let nodes = vec![
            Node::new("A", "Start", NodeType::Start),
            Node::new("B", "Check", NodeType::Decision),
            Node::new("C", "Work", NodeType::Process),
        ];
        let connections = vec![
            Connection::new("A", "B"),
            Connection::new("B", "C").with_label("yes"),
        ];

        let output = format_flowchart(&nodes, &connections);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "flowchart TD",
                r#"    A["Start"]"#,
                "    B{Check}",
                r#"    C("Work")"#,
                "    A --> B",
                r#"    B -- "yes" --> C"#,
            ]
        );
    }

    #[test]
    fn test_empty_input_is_header_only() {
        assert_eq!(format_flowchart(&[], &[]), "flowchart TD");
    }

    #[test]
    fn test_custom_options() {
        let options = FormatOptions {
            direction: Direction::LR,
            indent: 2,
        };
        let nodes = vec![Node::new("A", "One", NodeType::Default)];
        let output = format_flowchart_with(&nodes, &[], &options);
        assert_eq!(output, "flowchart LR\n  A[\"One\"]");
    }
}
