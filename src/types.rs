//! Type definitions for the structured diagram descriptions fed to the generators

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The direction of a flowchart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    TD, // Top-Down (same as TB)
    TB, // Top-Bottom
    LR, // Left-Right
    BT, // Bottom-Top
    RL, // Right-Left
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::TD => "TD",
            Direction::TB => "TB",
            Direction::LR => "LR",
            Direction::BT => "BT",
            Direction::RL => "RL",
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TD" => Ok(Direction::TD),
            "TB" => Ok(Direction::TB),
            "LR" => Ok(Direction::LR),
            "BT" => Ok(Direction::BT),
            "RL" => Ok(Direction::RL),
            _ => Err(Error::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Flowchart types
// ============================================================================

/// Kind of a flowchart node. Picks the bracket syntax the node is emitted with.
///
/// Unrecognised kinds deserialize as [`NodeType::Default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Start,
    End,
    Process,
    Decision,
    #[default]
    #[serde(other)]
    Default,
}

/// A flowchart node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    /// Free text; may still contain raw line breaks
    pub label: String,
    #[serde(rename = "type", default)]
    pub node_type: NodeType,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            node_type,
        }
    }
}

/// A directed edge between two flowchart nodes.
///
/// Endpoints are not checked against the declared nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

// ============================================================================
// Sequence diagram types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub label: String,
}

impl Participant {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

pub const DEFAULT_ARROW: &str = "->";

fn default_arrow() -> String {
    DEFAULT_ARROW.to_string()
}

/// A message sent from one participant to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub from: String,
    pub to: String,
    pub message: String,
    /// Arrow token placed verbatim between the two participant ids
    #[serde(default = "default_arrow")]
    pub arrow: String,
}

impl Interaction {
    pub fn new(from: impl Into<String>, to: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            message: message.into(),
            arrow: default_arrow(),
        }
    }

    pub fn with_arrow(mut self, arrow: impl Into<String>) -> Self {
        self.arrow = arrow.into();
        self
    }
}

// ============================================================================
// Class diagram types
// ============================================================================

pub const DEFAULT_VISIBILITY: &str = "+";

fn default_visibility() -> String {
    DEFAULT_VISIBILITY.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassAttribute {
    pub name: String,
    #[serde(rename = "type", default)]
    pub attr_type: String,
    #[serde(default = "default_visibility")]
    pub visibility: String,
}

impl ClassAttribute {
    pub fn new(name: impl Into<String>, attr_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attr_type: attr_type.into(),
            visibility: default_visibility(),
        }
    }

    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMethod {
    pub name: String,
    /// Parameter list, emitted verbatim between the parentheses
    #[serde(default)]
    pub params: String,
    #[serde(rename = "return", default)]
    pub return_type: String,
    #[serde(default = "default_visibility")]
    pub visibility: String,
}

impl ClassMethod {
    pub fn new(
        name: impl Into<String>,
        params: impl Into<String>,
        return_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            return_type: return_type.into(),
            visibility: default_visibility(),
        }
    }

    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<ClassAttribute>,
    #[serde(default)]
    pub methods: Vec<ClassMethod>,
}

impl ClassDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn attribute(mut self, attribute: ClassAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn method(mut self, method: ClassMethod) -> Self {
        self.methods.push(method);
        self
    }
}
