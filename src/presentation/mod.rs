//! Renderer-facing elements and the stages that produce them.

pub mod geometry;
pub mod mapper;
pub mod types;

pub use geometry::{FontMetrics, Size, estimate_size};
pub use mapper::{ELLIPSIS, MAX_LABEL_LEN, MappedElements, map_elements, map_elements_with, truncate};
pub use types::{EdgeKind, NodeKind, Position, PresentationEdge, PresentationElement, PresentationNode};
