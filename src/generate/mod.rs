//! Generators that build diagram source from structured descriptions

pub mod class;
pub mod flowchart;
pub mod sequence;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{ClassDef, Connection, Interaction, Node, Participant};
use crate::FormatOptions;

pub use class::{format_class_diagram, format_class_diagram_with};
pub use flowchart::{format_flowchart, format_flowchart_with};
pub use sequence::{format_sequence_diagram, format_sequence_diagram_with};

/// A complete structured diagram description, tagged by `kind`.
///
/// ```json
/// {"kind": "flowchart", "nodes": [{"id": "A", "label": "Start", "type": "start"}], "connections": []}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DiagramSpec {
    Flowchart {
        nodes: Vec<Node>,
        #[serde(default)]
        connections: Vec<Connection>,
    },
    Sequence {
        participants: Vec<Participant>,
        #[serde(default)]
        interactions: Vec<Interaction>,
    },
    Class {
        classes: Vec<ClassDef>,
    },
}

impl DiagramSpec {
    /// Parse a JSON description. Missing required fields are reported by name.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn render(&self, options: &FormatOptions) -> String {
        match self {
            DiagramSpec::Flowchart { nodes, connections } => {
                format_flowchart_with(nodes, connections, options)
            }
            DiagramSpec::Sequence {
                participants,
                interactions,
            } => format_sequence_diagram_with(participants, interactions, options),
            DiagramSpec::Class { classes } => format_class_diagram_with(classes, options),
        }
    }
}
