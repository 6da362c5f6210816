//! Node filtering.
//!
//! Links are kept or dropped by looking at their source endpoint only. A link
//! whose source survives but whose target was removed is retained as a
//! dangling link; downstream stages tolerate it.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::types::{DomainGraph, DomainNode, NodeId};

/// Counts produced by a filter pass. Does not change the filtered graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub kept_nodes: usize,
    pub removed_nodes: usize,
    pub kept_links: usize,
    /// Links dropped because their source was removed.
    pub dropped_links: usize,
    /// Kept links whose target was removed.
    pub dangling_links: usize,
}

/// Keep the nodes satisfying `keep` and every link whose source survived.
pub fn filter<F>(graph: &DomainGraph, keep: F) -> DomainGraph
where
    F: Fn(&DomainNode) -> bool,
{
    filter_with_report(graph, keep).0
}

/// [`filter`] plus a [`FilterReport`] describing what happened to the links.
pub fn filter_with_report<F>(graph: &DomainGraph, keep: F) -> (DomainGraph, FilterReport)
where
    F: Fn(&DomainNode) -> bool,
{
    let nodes: Vec<DomainNode> = graph.nodes.iter().filter(|n| keep(n)).cloned().collect();
    let survivors: HashSet<NodeId> = nodes.iter().map(|n| n.id).collect();

    let mut report = FilterReport {
        kept_nodes: nodes.len(),
        removed_nodes: graph.nodes.len() - nodes.len(),
        ..FilterReport::default()
    };

    let mut links = Vec::with_capacity(graph.links.len());
    for link in &graph.links {
        if !survivors.contains(&link.source) {
            report.dropped_links += 1;
            continue;
        }
        if !survivors.contains(&link.target) {
            report.dangling_links += 1;
        }
        links.push(link.clone());
    }
    report.kept_links = links.len();

    debug!(?report, "graph filtered");
    if report.dangling_links > 0 {
        warn!(
            dangling = report.dangling_links,
            "retained links whose target was filtered out"
        );
    }

    (DomainGraph::new(nodes, links), report)
}

/// Drop every parameter node (and links originating from one).
pub fn without_parameters(graph: &DomainGraph) -> DomainGraph {
    filter(graph, |n| !n.is_parameter())
}

#[cfg(test)]
#[path = "../../tests/rust/test_graph_filter.rs"]
mod tests;
