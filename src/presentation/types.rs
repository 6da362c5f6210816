//! Presentation elements handed to the diagram renderer.
//!
//! Serialized with camelCase keys; `type` discriminates nodes from edges.

use serde::Serialize;

use super::geometry::Size;
use crate::direction::Side;
use crate::graph::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Task,
    Parameter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Directed,
}

/// Top-left corner of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationNode {
    /// String form of the domain node id.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub full_name: String,
    /// `full_name` truncated for display.
    pub label: String,
    pub status: Status,
    pub input_degree: usize,
    pub output_degree: usize,
    pub target_anchor: Side,
    pub source_anchor: Side,
    /// Estimated size, attached before layout.
    #[serde(flatten)]
    pub size: Option<Size>,
    /// Absent until layout has run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationEdge {
    /// `"{source}-{target}"`; parallel links share an id.
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    #[serde(flatten)]
    pub size: Option<Size>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PresentationElement {
    Node(PresentationNode),
    Edge(PresentationEdge),
}

impl PresentationElement {
    pub fn id(&self) -> &str {
        match self {
            PresentationElement::Node(n) => &n.id,
            PresentationElement::Edge(e) => &e.id,
        }
    }

    pub fn as_node(&self) -> Option<&PresentationNode> {
        match self {
            PresentationElement::Node(n) => Some(n),
            PresentationElement::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&PresentationEdge> {
        match self {
            PresentationElement::Edge(e) => Some(e),
            PresentationElement::Node(_) => None,
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self, PresentationElement::Node(_))
    }
}

impl From<PresentationNode> for PresentationElement {
    fn from(node: PresentationNode) -> Self {
        PresentationElement::Node(node)
    }
}

impl From<PresentationEdge> for PresentationElement {
    fn from(edge: PresentationEdge) -> Self {
        PresentationElement::Edge(edge)
    }
}
