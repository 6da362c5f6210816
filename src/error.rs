//! Error types for the layout pipeline.

use thiserror::Error;

/// Errors surfaced by a layout call.
///
/// None of these are retried internally: every stage is a deterministic
/// function of its input, so repeating a failed call reproduces the failure.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Direction token outside `TB`, `BT`, `LR`, `RL`.
    #[error("invalid direction '{0}'; expected one of TB, BT, LR, RL")]
    InvalidDirection(String),

    /// The layered graph-drawing backend rejected its input.
    #[error("layered layout failed: {0}")]
    Collaborator(String),

    /// Malformed graph document or configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
