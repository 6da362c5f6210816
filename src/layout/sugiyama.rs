//! Sugiyama layered layout — the built-in [`LayeredLayout`] backend.
//!
//! Phases:
//!   1. Cycle removal (greedy-FAS ordering, back edges flipped)
//!   2. Rank assignment (longest path)
//!   3. Virtual node insertion for edges spanning several ranks
//!   4. Crossing minimisation (barycenter sweeps)
//!   5. Coordinate assignment (rank packing, centring, parent alignment)
//!   6. Orientation along the requested direction
//!
//! Coordinates are computed for top-to-bottom flow and then rotated or
//! mirrored. "Cross" is the axis inside a rank, "along" the axis ranks
//! advance on.

use tracing::{debug, trace};

use super::graph::{Acyclic, LayeredGraph};
use super::{Centers, LayeredEdge, LayeredLayout, LayoutOptions, Point, Vertex};
use crate::direction::Direction;
use crate::error::{LayoutError, Result};

/// Upper bound on down+up barycenter sweeps.
pub const MAX_SWEEPS: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sugiyama {
    pub max_sweeps: usize,
}

impl Default for Sugiyama {
    fn default() -> Self {
        Self {
            max_sweeps: MAX_SWEEPS,
        }
    }
}

impl Sugiyama {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayeredLayout for Sugiyama {
    fn layout(
        &self,
        vertices: &[Vertex],
        edges: &[LayeredEdge],
        options: &LayoutOptions,
    ) -> Result<Centers> {
        validate(vertices, options)?;

        let graph = LayeredGraph::build(vertices, edges);
        if graph.vertex_count() == 0 {
            return Ok(Centers::new());
        }
        if graph.dangling_edges > 0 || graph.self_loops > 0 {
            trace!(
                dangling = graph.dangling_edges,
                self_loops = graph.self_loops,
                "edges ignored for ranking"
            );
        }

        let acyclic = graph.make_acyclic();
        let ranks = RankAssignment::assign(graph.vertex_count(), &acyclic);
        let mut layering = Layering::build(&ranks, &acyclic.edges);
        layering.minimise_crossings(self.max_sweeps);

        let extents: Vec<(f64, f64)> = (0..graph.vertex_count())
            .map(|i| extent(&vertices[graph.vertex(i)], options.direction))
            .collect();
        let coords = assign_coordinates(&layering, &ranks, &acyclic.edges, &extents, options);

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            ranks = ranks.rank_count,
            reversed = acyclic.reversed,
            "layered layout computed"
        );

        let mut centers = Centers::with_capacity(graph.vertex_count());
        for (i, point) in coords.into_iter().enumerate() {
            centers.insert(vertices[graph.vertex(i)].id.clone(), point);
        }
        Ok(centers)
    }
}

fn validate(vertices: &[Vertex], options: &LayoutOptions) -> Result<()> {
    let valid = |v: f64| v.is_finite() && v >= 0.0;
    for v in vertices {
        if !valid(v.width) || !valid(v.height) {
            return Err(LayoutError::Collaborator(format!(
                "vertex '{}' has invalid size {}x{}",
                v.id, v.width, v.height
            )));
        }
    }
    if !valid(options.node_separation) || !valid(options.rank_separation) {
        return Err(LayoutError::Collaborator(format!(
            "invalid separation: node {}, rank {}",
            options.node_separation, options.rank_separation
        )));
    }
    Ok(())
}

/// `(cross, along)` extent of a vertex for the given direction.
fn extent(v: &Vertex, direction: Direction) -> (f64, f64) {
    if direction.is_horizontal() {
        (v.height, v.width)
    } else {
        (v.width, v.height)
    }
}

// ─── Rank Assignment ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankAssignment {
    /// Rank per graph node index.
    pub ranks: Vec<usize>,
    pub rank_count: usize,
}

impl RankAssignment {
    /// Longest-path ranking: every node sits one rank below its deepest
    /// predecessor.
    pub fn assign(node_count: usize, acyclic: &Acyclic) -> Self {
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for &(a, b) in &acyclic.edges {
            successors[a].push(b);
        }

        let mut ranks = vec![0usize; node_count];
        for &node in &acyclic.order {
            for &succ in &successors[node] {
                ranks[succ] = ranks[succ].max(ranks[node] + 1);
            }
        }

        let rank_count = ranks.iter().copied().max().map_or(0, |m| m + 1);
        Self { ranks, rank_count }
    }
}

// ─── Virtual Nodes ───────────────────────────────────────────────────────────

/// Real and virtual nodes arranged by rank.
///
/// Items `0..n` are the real graph nodes; virtual items follow and stand in
/// for long edges at each intermediate rank.
#[derive(Debug, Clone)]
pub struct Layering {
    /// Rank per item.
    pub item_rank: Vec<usize>,
    pub real_count: usize,
    /// Items per rank, in current cross order.
    pub layers: Vec<Vec<usize>>,
    /// Item edges between adjacent ranks.
    pub segments: Vec<(usize, usize)>,
}

impl Layering {
    pub fn build(ranks: &RankAssignment, edges: &[(usize, usize)]) -> Self {
        let real_count = ranks.ranks.len();
        let mut item_rank = ranks.ranks.clone();
        let mut segments = Vec::with_capacity(edges.len());

        for &(a, b) in edges {
            let (ra, rb) = (item_rank[a], item_rank[b]);
            let mut prev = a;
            for r in (ra + 1)..rb {
                let virt = item_rank.len();
                item_rank.push(r);
                segments.push((prev, virt));
                prev = virt;
            }
            segments.push((prev, b));
        }

        let mut layers: Vec<Vec<usize>> = vec![Vec::new(); ranks.rank_count];
        for (item, &r) in item_rank.iter().enumerate() {
            layers[r].push(item);
        }

        Self {
            item_rank,
            real_count,
            layers,
            segments,
        }
    }

    pub fn is_virtual(&self, item: usize) -> bool {
        item >= self.real_count
    }

    /// Cross position of every item within its layer.
    fn positions(&self) -> Vec<usize> {
        let mut pos = vec![0usize; self.item_rank.len()];
        for layer in &self.layers {
            for (i, &item) in layer.iter().enumerate() {
                pos[item] = i;
            }
        }
        pos
    }

    fn neighbours(&self) -> (Vec<Vec<usize>>, Vec<Vec<usize>>) {
        let mut preds = vec![Vec::new(); self.item_rank.len()];
        let mut succs = vec![Vec::new(); self.item_rank.len()];
        for &(a, b) in &self.segments {
            succs[a].push(b);
            preds[b].push(a);
        }
        (preds, succs)
    }

    /// Total crossings between all adjacent layer pairs.
    pub fn crossings(&self) -> usize {
        let pos = self.positions();
        let mut by_rank: Vec<Vec<(usize, usize)>> = vec![Vec::new(); self.layers.len()];
        for &(a, b) in &self.segments {
            by_rank[self.item_rank[a]].push((pos[a], pos[b]));
        }

        let mut total = 0;
        for segs in &by_rank {
            for i in 0..segs.len() {
                for j in (i + 1)..segs.len() {
                    let (a0, a1) = segs[i];
                    let (b0, b1) = segs[j];
                    if (a0 < b0 && a1 > b1) || (a0 > b0 && a1 < b1) {
                        total += 1;
                    }
                }
            }
        }
        total
    }

    /// Alternate downward and upward barycenter sweeps, keeping the best
    /// ordering seen. Stops at the first sweep that does not improve.
    pub fn minimise_crossings(&mut self, max_sweeps: usize) {
        let (preds, succs) = self.neighbours();
        let mut best = self.layers.clone();
        let mut best_crossings = self.crossings();

        for _ in 0..max_sweeps {
            if best_crossings == 0 {
                break;
            }
            for r in 1..self.layers.len() {
                self.sort_layer(r, &preds);
            }
            for r in (0..self.layers.len().saturating_sub(1)).rev() {
                self.sort_layer(r, &succs);
            }

            let crossings = self.crossings();
            if crossings >= best_crossings {
                break;
            }
            best_crossings = crossings;
            best = self.layers.clone();
        }

        self.layers = best;
    }

    /// Reorder layer `r` by the mean position of each item's neighbours.
    /// Items without neighbours keep their current slot as key.
    fn sort_layer(&mut self, r: usize, neighbours: &[Vec<usize>]) {
        let pos = self.positions();
        let mut keyed: Vec<(f64, usize, usize)> = self.layers[r]
            .iter()
            .enumerate()
            .map(|(slot, &item)| {
                let adj = &neighbours[item];
                let key = if adj.is_empty() {
                    slot as f64
                } else {
                    adj.iter().map(|&n| pos[n] as f64).sum::<f64>() / adj.len() as f64
                };
                (key, slot, item)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        self.layers[r] = keyed.into_iter().map(|(_, _, item)| item).collect();
    }
}

// ─── Coordinate Assignment ───────────────────────────────────────────────────

/// Center per real graph node, oriented for `options.direction`.
fn assign_coordinates(
    layering: &Layering,
    ranks: &RankAssignment,
    edges: &[(usize, usize)],
    extents: &[(f64, f64)],
    options: &LayoutOptions,
) -> Vec<Point> {
    let n = layering.real_count;
    let gap = options.node_separation;

    // Pack each rank left to right; virtual items take no room.
    let mut cross = vec![0.0f64; n];
    let mut rank_width = vec![0.0f64; layering.layers.len()];
    for (r, layer) in layering.layers.iter().enumerate() {
        let mut cursor = 0.0;
        let mut placed = 0;
        for &item in layer.iter().filter(|&&i| !layering.is_virtual(i)) {
            if placed > 0 {
                cursor += gap;
            }
            let w = extents[item].0;
            cross[item] = cursor + w / 2.0;
            cursor += w;
            placed += 1;
        }
        rank_width[r] = cursor;
    }

    // Centre every rank against the widest one.
    let widest = rank_width.iter().copied().fold(0.0, f64::max);
    for layer in &layering.layers {
        for &item in layer.iter().filter(|&&i| !layering.is_virtual(i)) {
            cross[item] += (widest - rank_width[ranks.ranks[item]]) / 2.0;
        }
    }

    // Shift each rank as a block towards its parents.
    for r in 1..layering.layers.len() {
        let (mut sum, mut count) = (0.0, 0usize);
        for &(a, b) in edges {
            if ranks.ranks[b] == r && ranks.ranks[a] + 1 == r {
                sum += cross[a] - cross[b];
                count += 1;
            }
        }
        if count == 0 {
            continue;
        }
        let shift = sum / count as f64;
        for &item in layering.layers[r].iter().filter(|&&i| !layering.is_virtual(i)) {
            cross[item] += shift;
        }
    }

    // Normalise so the leftmost box starts at zero.
    let min_left = (0..n)
        .map(|i| cross[i] - extents[i].0 / 2.0)
        .fold(f64::INFINITY, f64::min);
    if min_left.is_finite() {
        for c in &mut cross {
            *c -= min_left;
        }
    }

    // Ranks advance by their thickest member plus the rank gap.
    let mut thickness = vec![0.0f64; ranks.rank_count];
    for i in 0..n {
        let r = ranks.ranks[i];
        thickness[r] = thickness[r].max(extents[i].1);
    }
    let mut rank_start = Vec::with_capacity(ranks.rank_count);
    let mut cursor = 0.0;
    for (r, &t) in thickness.iter().enumerate() {
        if r > 0 {
            cursor += options.rank_separation;
        }
        rank_start.push(cursor);
        cursor += t;
    }
    let total_along = cursor;

    (0..n)
        .map(|i| {
            let r = ranks.ranks[i];
            let along = rank_start[r] + thickness[r] / 2.0;
            orient(cross[i], along, total_along, options.direction)
        })
        .collect()
}

fn orient(cross: f64, along: f64, total_along: f64, direction: Direction) -> Point {
    match direction {
        Direction::TB => Point::new(cross, along),
        Direction::BT => Point::new(cross, total_along - along),
        Direction::LR => Point::new(along, cross),
        Direction::RL => Point::new(total_along - along, cross),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_sugiyama.rs"]
mod tests;
