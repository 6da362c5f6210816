//! Domain graph: the workflow's task-dependency graph as delivered by the
//! execution service.
//!
//! Nodes carry an explicit [`NodeRole`] decided once when the node is built,
//! so later stages never re-inspect the name.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

// ─── Constants ────────────────────────────────────────────────────────────────

/// Naming convention marking constant-value inputs.
pub const PARAMETER_MARKER: &str = ":parameter:";

// ─── NodeId ───────────────────────────────────────────────────────────────────

/// Opaque node identity, stable for the lifetime of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Status ───────────────────────────────────────────────────────────────────

/// Execution state reported by the workflow service. Passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Status(String);

impl Status {
    pub const NEW_OBJECT: &'static str = "NEW_OBJECT";

    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::new(Self::NEW_OBJECT)
    }
}

impl From<&str> for Status {
    fn from(status: &str) -> Self {
        Self::new(status)
    }
}

impl From<String> for Status {
    fn from(status: String) -> Self {
        Self(status)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── NodeRole ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    #[default]
    Task,
    /// Constant-value input rather than a computed task.
    Parameter,
}

impl NodeRole {
    /// Classify a node by its name.
    pub fn classify(name: &str) -> Self {
        if name.contains(PARAMETER_MARKER) {
            NodeRole::Parameter
        } else {
            NodeRole::Task
        }
    }
}

// ─── DomainNode ───────────────────────────────────────────────────────────────

/// Raw node shape of the result document. Extra fields are ignored.
#[derive(Deserialize)]
struct RawNode {
    id: NodeId,
    name: String,
    #[serde(default)]
    status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawNode")]
pub struct DomainNode {
    pub id: NodeId,
    pub name: String,
    pub status: Status,
    /// Derived from `name` at construction.
    pub role: NodeRole,
}

impl DomainNode {
    pub fn new(id: u64, name: impl Into<String>, status: impl Into<Status>) -> Self {
        let name = name.into();
        Self {
            id: NodeId(id),
            role: NodeRole::classify(&name),
            name,
            status: status.into(),
        }
    }

    pub fn is_parameter(&self) -> bool {
        self.role == NodeRole::Parameter
    }

    /// Name shown to users. Parameters lose every leading and trailing
    /// character that belongs to the marker's character set.
    pub fn display_name(&self) -> &str {
        match self.role {
            NodeRole::Parameter => self.name.trim_matches(|c: char| PARAMETER_MARKER.contains(c)),
            NodeRole::Task => &self.name,
        }
    }
}

impl From<RawNode> for DomainNode {
    fn from(raw: RawNode) -> Self {
        Self::new(raw.id.0, raw.name, raw.status)
    }
}

/// True iff `node` is a parameter input.
pub fn is_parameter(node: &DomainNode) -> bool {
    node.is_parameter()
}

/// See [`DomainNode::display_name`].
pub fn display_name(node: &DomainNode) -> &str {
    node.display_name()
}

// ─── DomainLink ───────────────────────────────────────────────────────────────

/// Directed dependency between two nodes. Parallel links are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainLink {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default)]
    pub edge_name: String,
    /// How the value is passed (`arg`, `kwarg`, ...), when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
}

impl DomainLink {
    pub fn new(source: u64, target: u64, edge_name: impl Into<String>) -> Self {
        Self {
            source: NodeId(source),
            target: NodeId(target),
            edge_name: edge_name.into(),
            param_type: None,
        }
    }
}

// ─── DomainGraph ──────────────────────────────────────────────────────────────

/// Read-only input to the layout pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainGraph {
    #[serde(default)]
    pub nodes: Vec<DomainNode>,
    #[serde(default)]
    pub links: Vec<DomainLink>,
}

impl DomainGraph {
    pub fn new(nodes: Vec<DomainNode>, links: Vec<DomainLink>) -> Self {
        Self { nodes, links }
    }

    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Parse either a bare `{"nodes": .., "links": ..}` graph or a full
    /// result document carrying the graph under `"graph"`.
    pub fn from_json(input: &str) -> Result<Self> {
        let mut document: serde_json::Value = serde_json::from_str(input)?;
        let embedded = document
            .as_object_mut()
            .and_then(|doc| doc.remove("graph"));
        let graph = embedded.unwrap_or(document);
        Ok(serde_json::from_value(graph)?)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&DomainNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

// ─── GraphBuilder ─────────────────────────────────────────────────────────────

/// Collects nodes and links into an immutable [`DomainGraph`].
///
/// Adding a node whose id is already present is a no-op; the first
/// definition wins.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<DomainNode>,
    links: Vec<DomainLink>,
    seen: HashSet<NodeId>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(self, id: u64, name: impl Into<String>) -> Self {
        self.node_with_status(id, name, Status::default())
    }

    pub fn node_with_status(
        mut self,
        id: u64,
        name: impl Into<String>,
        status: impl Into<Status>,
    ) -> Self {
        let node = DomainNode::new(id, name, status);
        if self.seen.insert(node.id) {
            self.nodes.push(node);
        } else {
            warn!(id = %node.id, "duplicate node id ignored");
        }
        self
    }

    pub fn link(
        mut self,
        source: u64,
        target: u64,
        edge_name: impl Into<String>,
    ) -> Self {
        self.links.push(DomainLink::new(source, target, edge_name));
        self
    }

    pub fn build(self) -> DomainGraph {
        DomainGraph {
            nodes: self.nodes,
            links: self.links,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_graph_types.rs"]
mod tests;
