//! LayeredGraph — petgraph DiGraph over the vertices handed to a layout call.
//!
//! Node weights are indices into the caller's vertex slice. Edges whose
//! endpoints are unknown, and self-loops, are left out of the digraph and
//! only counted.

use std::collections::HashMap;

use petgraph::Direction as EdgeDirection;
use petgraph::algo::{is_cyclic_directed, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::{LayeredEdge, Vertex};

pub struct LayeredGraph {
    pub digraph: DiGraph<usize, ()>,
    /// Maps vertex id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
    /// Edges skipped because an endpoint is not a vertex.
    pub dangling_edges: usize,
    pub self_loops: usize,
}

/// Edge set reoriented so every edge points forward in `order`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acyclic {
    /// Graph node indices, sources first.
    pub order: Vec<usize>,
    /// `(from, to)` graph node indices.
    pub edges: Vec<(usize, usize)>,
    /// How many edges had to be flipped.
    pub reversed: usize,
}

impl LayeredGraph {
    /// Build from a vertex slice. A repeated vertex id keeps its first entry.
    pub fn build(vertices: &[Vertex], edges: &[LayeredEdge]) -> Self {
        let mut digraph: DiGraph<usize, ()> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();

        for (i, v) in vertices.iter().enumerate() {
            if !node_index.contains_key(&v.id) {
                let idx = digraph.add_node(i);
                node_index.insert(v.id.clone(), idx);
            }
        }

        let mut dangling_edges = 0;
        let mut self_loops = 0;
        for e in edges {
            match (node_index.get(&e.source), node_index.get(&e.target)) {
                (Some(&a), Some(&b)) if a == b => self_loops += 1,
                (Some(&a), Some(&b)) => {
                    digraph.add_edge(a, b, ());
                }
                _ => dangling_edges += 1,
            }
        }

        Self {
            digraph,
            node_index,
            dangling_edges,
            self_loops,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    /// Index into the caller's vertex slice for graph node `idx`.
    pub fn vertex(&self, idx: usize) -> usize {
        self.digraph[NodeIndex::new(idx)]
    }

    pub fn is_dag(&self) -> bool {
        !is_cyclic_directed(&self.digraph)
    }

    /// A node ordering in which as few edges as possible point backwards:
    /// a topological order for a DAG, the greedy-FAS order otherwise.
    pub fn ordering(&self) -> Vec<usize> {
        match toposort(&self.digraph, None) {
            Ok(order) => order.into_iter().map(|idx| idx.index()).collect(),
            Err(_) => self.greedy_fas_ordering(),
        }
    }

    /// Orient every edge along [`LayeredGraph::ordering`].
    pub fn make_acyclic(&self) -> Acyclic {
        let order = self.ordering();
        let mut position = vec![0usize; order.len()];
        for (pos, &n) in order.iter().enumerate() {
            position[n] = pos;
        }

        let mut edges = Vec::with_capacity(self.edge_count());
        let mut reversed = 0;
        for e in self.digraph.edge_references() {
            let (a, b) = (e.source().index(), e.target().index());
            if position[a] < position[b] {
                edges.push((a, b));
            } else {
                edges.push((b, a));
                reversed += 1;
            }
        }

        Acyclic {
            order,
            edges,
            reversed,
        }
    }

    /// Eades–Lin–Smyth greedy feedback-arc-set ordering. Ties are broken by
    /// node index so the result is deterministic.
    fn greedy_fas_ordering(&self) -> Vec<usize> {
        let n = self.vertex_count();
        let mut active = vec![true; n];
        let mut remaining = n;
        let mut out_deg: Vec<i64> = (0..n)
            .map(|i| {
                self.digraph
                    .neighbors_directed(NodeIndex::new(i), EdgeDirection::Outgoing)
                    .count() as i64
            })
            .collect();
        let mut in_deg: Vec<i64> = (0..n)
            .map(|i| {
                self.digraph
                    .neighbors_directed(NodeIndex::new(i), EdgeDirection::Incoming)
                    .count() as i64
            })
            .collect();

        let mut s1: Vec<usize> = Vec::new();
        let mut s2: Vec<usize> = Vec::new();

        while remaining > 0 {
            loop {
                let sinks: Vec<usize> = (0..n).filter(|&i| active[i] && out_deg[i] == 0).collect();
                if sinks.is_empty() {
                    break;
                }
                for sink in sinks {
                    self.detach(sink, &mut active, &mut in_deg, &mut out_deg);
                    remaining -= 1;
                    s2.push(sink);
                }
            }

            loop {
                let sources: Vec<usize> = (0..n).filter(|&i| active[i] && in_deg[i] == 0).collect();
                if sources.is_empty() {
                    break;
                }
                for source in sources {
                    self.detach(source, &mut active, &mut in_deg, &mut out_deg);
                    remaining -= 1;
                    s1.push(source);
                }
            }

            let best = (0..n)
                .filter(|&i| active[i])
                .max_by_key(|&i| (out_deg[i] - in_deg[i], std::cmp::Reverse(i)));
            if let Some(best) = best {
                self.detach(best, &mut active, &mut in_deg, &mut out_deg);
                remaining -= 1;
                s1.push(best);
            }
        }

        s2.reverse();
        s1.extend(s2);
        s1
    }

    fn detach(&self, node: usize, active: &mut [bool], in_deg: &mut [i64], out_deg: &mut [i64]) {
        active[node] = false;
        let idx = NodeIndex::new(node);
        for succ in self.digraph.neighbors_directed(idx, EdgeDirection::Outgoing) {
            let t = succ.index();
            if active[t] {
                in_deg[t] -= 1;
            }
        }
        for pred in self.digraph.neighbors_directed(idx, EdgeDirection::Incoming) {
            let s = pred.index();
            if active[s] {
                out_deg[s] -= 1;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
