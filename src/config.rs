//! Configuration for the layout pipeline.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::error::Result;
use crate::layout::{LayoutOptions, NODE_SEPARATION, RANK_SEPARATION};
use crate::presentation::{FontMetrics, MAX_LABEL_LEN};

/// Every knob a layout call reads. Missing JSON fields take their default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub direction: Direction,
    /// Keep parameter nodes and their outgoing links.
    pub show_params: bool,
    pub font: FontMetrics,
    pub node_separation: f64,
    pub rank_separation: f64,
    /// Longest node label, ellipsis included.
    pub max_label_len: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::TB,
            show_params: true,
            font: FontMetrics::default(),
            node_separation: NODE_SEPARATION,
            rank_separation: RANK_SEPARATION,
            max_label_len: MAX_LABEL_LEN,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_show_params(mut self, show_params: bool) -> Self {
        self.show_params = show_params;
        self
    }

    /// Options handed to the layered layout for `direction`.
    pub fn layout_options(&self, direction: Direction) -> LayoutOptions {
        LayoutOptions {
            direction,
            node_separation: self.node_separation,
            rank_separation: self.rank_separation,
        }
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
