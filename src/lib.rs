//! dag-layout — positions a workflow's task-dependency graph for drawing.
//!
//! Public API: [`layout`], [`LayoutEngine`] and [`layout_json`].
//!
//! Pipeline:
//!   graph        — domain graph, parameter filter, degree counts
//!   presentation — node/edge elements, labels, size estimates
//!   layout       — [`LayeredLayout`] trait and the Sugiyama backend
//!   engine       — wires the stages and turns centers into positions

pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod graph;
pub mod layout;
pub mod presentation;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::LayoutConfig;
pub use direction::{Anchors, Direction, Side, anchors};
pub use engine::{LayoutEngine, layout};
pub use error::{LayoutError, Result};
pub use graph::{DomainGraph, DomainLink, DomainNode, NodeId, NodeRole, Status};
pub use layout::{LayeredLayout, Sugiyama};
pub use presentation::{PresentationEdge, PresentationElement, PresentationNode};

/// Crate version, with the git revision when built from a checkout.
pub const VERSION: &str = env!("DAG_LAYOUT_VERSION");

/// Parse a graph document, lay it out with `config` and serialize the
/// resulting elements.
///
/// Accepts a bare `{"nodes", "links"}` graph or a result document carrying
/// it under `"graph"`.
pub fn layout_json(input: &str, config: &LayoutConfig) -> Result<String> {
    let graph = DomainGraph::from_json(input)?;
    let elements = LayoutEngine::new(*config).run(&graph)?;
    Ok(serde_json::to_string(&elements)?)
}
