//! Domain graph → presentation elements.
//!
//! Node and edge order follow the (filtered) input graph; nothing is sorted
//! or deduplicated.

use super::types::{EdgeKind, NodeKind, PresentationEdge, PresentationElement, PresentationNode};
use crate::direction::Direction;
use crate::graph::{DegreeIndex, DomainGraph, DomainLink, DomainNode, NodeRole, without_parameters};

/// Longest label shown on a node, ellipsis included.
pub const MAX_LABEL_LEN: usize = 70;
pub const ELLIPSIS: char = '…';

/// Shorten `text` to at most `max` characters, replacing the tail with a
/// single [`ELLIPSIS`] when anything was cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// Nodes and edges produced by the mapper, without geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappedElements {
    pub nodes: Vec<PresentationNode>,
    pub edges: Vec<PresentationEdge>,
}

impl MappedElements {
    /// Nodes first, then edges.
    pub fn into_elements(self) -> Vec<PresentationElement> {
        self.nodes
            .into_iter()
            .map(PresentationElement::from)
            .chain(self.edges.into_iter().map(PresentationElement::from))
            .collect()
    }
}

pub fn map_elements(graph: &DomainGraph, direction: Direction, show_params: bool) -> MappedElements {
    map_elements_with(graph, direction, show_params, MAX_LABEL_LEN)
}

/// [`map_elements`] with a custom label limit.
pub fn map_elements_with(
    graph: &DomainGraph,
    direction: Direction,
    show_params: bool,
    max_label_len: usize,
) -> MappedElements {
    let filtered;
    let graph = if show_params {
        graph
    } else {
        filtered = without_parameters(graph);
        &filtered
    };

    let degrees = DegreeIndex::build(&graph.links);
    let anchors = direction.anchors();

    let nodes = graph
        .nodes
        .iter()
        .map(|node| {
            let degree = degrees.get(node.id);
            let full_name = node.display_name().to_string();
            PresentationNode {
                id: node.id.to_string(),
                kind: node_kind(node),
                label: truncate(&full_name, max_label_len),
                full_name,
                status: node.status.clone(),
                input_degree: degree.inputs,
                output_degree: degree.outputs,
                target_anchor: anchors.target,
                source_anchor: anchors.source,
                size: None,
                position: None,
            }
        })
        .collect();

    let edges = graph.links.iter().map(map_link).collect();

    MappedElements { nodes, edges }
}

fn node_kind(node: &DomainNode) -> NodeKind {
    match node.role {
        NodeRole::Task => NodeKind::Task,
        NodeRole::Parameter => NodeKind::Parameter,
    }
}

fn map_link(link: &DomainLink) -> PresentationEdge {
    PresentationEdge {
        id: format!("{}-{}", link.source, link.target),
        source: link.source.to_string(),
        target: link.target.to_string(),
        label: link.edge_name.clone(),
        kind: EdgeKind::Directed,
        size: None,
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_presentation_mapper.rs"]
mod tests;
