//! Layout pipeline: filter → map → size → layered layout → position.

use tracing::{debug, instrument};

use crate::config::LayoutConfig;
use crate::direction::Direction;
use crate::error::{LayoutError, Result};
use crate::graph::DomainGraph;
use crate::layout::{LayeredEdge, LayeredLayout, Sugiyama, Vertex};
use crate::presentation::{Position, PresentationElement, estimate_size, map_elements_with};

/// Runs layout calls against a fixed configuration and layered backend.
///
/// Stateless between calls; one engine can serve any number of graphs.
#[derive(Debug, Clone)]
pub struct LayoutEngine<L = Sugiyama> {
    config: LayoutConfig,
    layered: L,
}

impl LayoutEngine<Sugiyama> {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            layered: Sugiyama::default(),
        }
    }
}

impl Default for LayoutEngine<Sugiyama> {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl<L: LayeredLayout> LayoutEngine<L> {
    /// Engine backed by a custom layered layout.
    pub fn with_layered(config: LayoutConfig, layered: L) -> Self {
        Self { config, layered }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// [`LayoutEngine::layout`] with the configured direction and parameter
    /// visibility.
    pub fn run(&self, graph: &DomainGraph) -> Result<Vec<PresentationElement>> {
        self.layout(graph, self.config.direction, self.config.show_params)
    }

    /// Lay out `graph` and return its nodes (positioned) followed by its
    /// edges.
    #[instrument(
        skip_all,
        fields(direction = %direction, show_params = show_params, nodes = graph.nodes.len(), links = graph.links.len())
    )]
    pub fn layout(
        &self,
        graph: &DomainGraph,
        direction: Direction,
        show_params: bool,
    ) -> Result<Vec<PresentationElement>> {
        let mut mapped = map_elements_with(graph, direction, show_params, self.config.max_label_len);
        if mapped.nodes.is_empty() && mapped.edges.is_empty() {
            return Ok(Vec::new());
        }

        let font = &self.config.font;
        for node in &mut mapped.nodes {
            node.size = Some(estimate_size(&node.label, font));
        }
        for edge in &mut mapped.edges {
            edge.size = Some(estimate_size(&edge.label, font));
        }

        let vertices: Vec<Vertex> = mapped
            .nodes
            .iter()
            .map(|node| {
                let size = node.size.unwrap_or_default();
                Vertex::new(node.id.clone(), size.width, size.height)
            })
            .collect();
        let edges: Vec<LayeredEdge> = mapped
            .edges
            .iter()
            .map(|edge| {
                let size = edge.size.unwrap_or_default();
                LayeredEdge {
                    source: edge.source.clone(),
                    target: edge.target.clone(),
                    width: size.width,
                    height: size.height,
                }
            })
            .collect();

        let options = self.config.layout_options(direction);
        let centers = self.layered.layout(&vertices, &edges, &options)?;

        for node in &mut mapped.nodes {
            let center = centers.get(&node.id).ok_or_else(|| {
                LayoutError::Collaborator(format!("no position returned for node {}", node.id))
            })?;
            let size = node.size.unwrap_or_default();
            node.position = Some(Position::new(
                center.x - size.width / 2.0,
                center.y - size.height / 2.0,
            ));
        }

        debug!(
            nodes = mapped.nodes.len(),
            edges = mapped.edges.len(),
            "layout complete"
        );
        Ok(mapped.into_elements())
    }
}

/// Lay out `graph` with default settings.
///
/// `direction` must be exactly one of `TB`, `BT`, `LR`, `RL`.
pub fn layout(
    graph: &DomainGraph,
    direction: &str,
    show_params: bool,
) -> Result<Vec<PresentationElement>> {
    let direction: Direction = direction.parse()?;
    LayoutEngine::new(LayoutConfig::default()).layout(graph, direction, show_params)
}

#[cfg(test)]
#[path = "../tests/rust/test_engine.rs"]
mod tests;
