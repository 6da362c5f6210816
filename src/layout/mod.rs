//! Layered graph drawing.
//!
//! The engine only talks to [`LayeredLayout`]: given sized vertices, edges and
//! options, return a center coordinate per vertex. [`Sugiyama`] is the
//! built-in backend; any other layered algorithm can be plugged in.

pub mod graph;
pub mod sugiyama;

use std::collections::HashMap;

use serde::Serialize;

use crate::direction::Direction;
use crate::error::Result;

pub use graph::LayeredGraph;
pub use sugiyama::Sugiyama;

// ─── Constants ────────────────────────────────────────────────────────────────

/// Gap between neighbouring vertices of the same rank.
pub const NODE_SEPARATION: f64 = 75.0;
/// Gap between consecutive ranks.
pub const RANK_SEPARATION: f64 = 100.0;

// ─── Inputs ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub id: String,
    pub width: f64,
    pub height: f64,
}

impl Vertex {
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

/// Edge between two vertex ids. The size is carried for backends that
/// reserve room for edge labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredEdge {
    pub source: String,
    pub target: String,
    pub width: f64,
    pub height: f64,
}

impl LayeredEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            width: 0.0,
            height: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub direction: Direction,
    pub node_separation: f64,
    pub rank_separation: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            direction: Direction::TB,
            node_separation: NODE_SEPARATION,
            rank_separation: RANK_SEPARATION,
        }
    }
}

// ─── Output ───────────────────────────────────────────────────────────────────

/// Vertex center.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub type Centers = HashMap<String, Point>;

// ─── Backend trait ────────────────────────────────────────────────────────────

/// A layered graph-drawing algorithm.
///
/// Implementations must be deterministic, must not overlap vertices that
/// share a rank (given their declared sizes) and must order ranks along
/// `options.direction`. Edges whose endpoints are not among `vertices` may be
/// present and must be tolerated.
pub trait LayeredLayout {
    fn layout(&self, vertices: &[Vertex], edges: &[LayeredEdge], options: &LayoutOptions)
    -> Result<Centers>;
}

impl<F> LayeredLayout for F
where
    F: Fn(&[Vertex], &[LayeredEdge], &LayoutOptions) -> Result<Centers>,
{
    fn layout(
        &self,
        vertices: &[Vertex],
        edges: &[LayeredEdge],
        options: &LayoutOptions,
    ) -> Result<Centers> {
        self(vertices, edges, options)
    }
}
