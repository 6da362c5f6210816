//! Per-node input/output link counts.

use std::collections::HashMap;

use serde::Serialize;

use super::types::{DomainLink, NodeId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Degree {
    /// Links targeting the node.
    pub inputs: usize,
    /// Links originating at the node.
    pub outputs: usize,
}

/// Count the links touching `node` in a single pass over `links`.
///
/// A self-loop counts once as an input and once as an output.
pub fn degree(node: NodeId, links: &[DomainLink]) -> Degree {
    let mut d = Degree::default();
    for link in links {
        if link.source == node {
            d.outputs += 1;
        }
        if link.target == node {
            d.inputs += 1;
        }
    }
    d
}

/// Degrees of every node touched by a link set, computed in one pass.
///
/// Answers the same question as [`degree`] without rescanning the links for
/// each node.
#[derive(Debug, Clone, Default)]
pub struct DegreeIndex {
    degrees: HashMap<NodeId, Degree>,
}

impl DegreeIndex {
    pub fn build(links: &[DomainLink]) -> Self {
        let mut degrees: HashMap<NodeId, Degree> = HashMap::new();
        for link in links {
            degrees.entry(link.source).or_default().outputs += 1;
            degrees.entry(link.target).or_default().inputs += 1;
        }
        Self { degrees }
    }

    /// Degree of `node`; zero for ids no link mentions.
    pub fn get(&self, node: NodeId) -> Degree {
        self.degrees.get(&node).copied().unwrap_or_default()
    }

    /// Number of distinct ids mentioned by the link set.
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_graph_degree.rs"]
mod tests;
