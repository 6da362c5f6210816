use super::*;
use crate::graph::types::{DomainLink, NodeId};

fn sample() -> DomainGraph {
    DomainGraph::builder()
        .node(1, "load_data")
        .node(2, ":parameter:batch_size:parameter:")
        .node(3, "train")
        .link(2, 3, "batch_size")
        .link(1, 3, "data")
        .build()
}

#[test]
fn test_filter_keep_all_is_identity() {
    let g = sample();
    assert_eq!(filter(&g, |_| true), g);
}

#[test]
fn test_filter_empty_graph() {
    let (g, report) = filter_with_report(&DomainGraph::default(), |_| false);
    assert!(g.is_empty());
    assert_eq!(report, FilterReport::default());
}

#[test]
fn test_without_parameters_drops_links_from_removed_source() {
    let g = without_parameters(&sample());
    let ids: Vec<NodeId> = g.nodes.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![NodeId(1), NodeId(3)]);
    assert_eq!(g.links, vec![DomainLink::new(1, 3, "data")]);
}

#[test]
fn test_filter_retains_dangling_target() {
    // Remove "train"; the link 1 -> 3 keeps its dangling target.
    let (g, report) = filter_with_report(&sample(), |n| n.name != "train");
    assert_eq!(g.nodes.len(), 2);
    assert_eq!(g.links.len(), 2);
    assert!(g.links.iter().all(|l| l.target == NodeId(3)));
    assert_eq!(
        report,
        FilterReport {
            kept_nodes: 2,
            removed_nodes: 1,
            kept_links: 2,
            dropped_links: 0,
            dangling_links: 2,
        }
    );
}

#[test]
fn test_filter_report_counts_dropped() {
    let (_, report) = filter_with_report(&sample(), |n| !n.is_parameter());
    assert_eq!(report.removed_nodes, 1);
    assert_eq!(report.dropped_links, 1);
    assert_eq!(report.dangling_links, 0);
    assert_eq!(report.kept_links, 1);
}

#[test]
fn test_filter_drops_links_from_unknown_source() {
    let g = DomainGraph::new(
        vec![DomainNode::new(1, "a", "NEW_OBJECT")],
        vec![DomainLink::new(9, 1, "ghost")],
    );
    assert!(filter(&g, |_| true).links.is_empty());
}

#[test]
fn test_filter_does_not_mutate_input() {
    let g = sample();
    let before = g.clone();
    let _ = without_parameters(&g);
    assert_eq!(g, before);
}
