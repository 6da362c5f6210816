//! Layout direction and connector anchoring.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

// ─── Direction ───────────────────────────────────────────────────────────────

/// Flow direction of the layered drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Top to bottom.
    #[default]
    TB,
    /// Bottom to top.
    BT,
    /// Left to right.
    LR,
    /// Right to left.
    RL,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::TB, Direction::BT, Direction::LR, Direction::RL];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::TB => "TB",
            Direction::BT => "BT",
            Direction::LR => "LR",
            Direction::RL => "RL",
        }
    }

    /// True when ranks advance along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::LR | Direction::RL)
    }

    /// Connector sides for this direction. Incoming edges attach on the side
    /// facing the previous rank, outgoing edges on the opposite side.
    pub fn anchors(self) -> Anchors {
        let (target, source) = match self {
            Direction::TB => (Side::Top, Side::Bottom),
            Direction::BT => (Side::Bottom, Side::Top),
            Direction::RL => (Side::Right, Side::Left),
            Direction::LR => (Side::Left, Side::Right),
        };
        Anchors { source, target }
    }
}

impl FromStr for Direction {
    type Err = LayoutError;

    /// Tokens are matched exactly; there is no fallback direction.
    fn from_str(token: &str) -> Result<Self> {
        match token {
            "TB" => Ok(Direction::TB),
            "BT" => Ok(Direction::BT),
            "LR" => Ok(Direction::LR),
            "RL" => Ok(Direction::RL),
            other => Err(LayoutError::InvalidDirection(other.to_string())),
        }
    }
}

impl TryFrom<&str> for Direction {
    type Error = LayoutError;

    fn try_from(token: &str) -> Result<Self> {
        token.parse()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Side / Anchors ──────────────────────────────────────────────────────────

/// Side of a node's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Where outgoing (`source`) and incoming (`target`) connectors attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchors {
    pub source: Side,
    pub target: Side,
}

/// Resolve anchors from a raw direction token.
///
/// Fails with [`LayoutError::InvalidDirection`] for anything outside
/// `TB`, `BT`, `LR`, `RL`.
pub fn anchors(direction: &str) -> Result<Anchors> {
    Ok(direction.parse::<Direction>()?.anchors())
}

#[cfg(test)]
#[path = "../tests/rust/test_direction.rs"]
mod tests;
