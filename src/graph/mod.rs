//! Domain graph model and the pure transforms applied to it before mapping.

pub mod degree;
pub mod filter;
pub mod types;

pub use degree::{Degree, DegreeIndex, degree};
pub use filter::{FilterReport, filter, filter_with_report, without_parameters};
pub use types::{
    DomainGraph, DomainLink, DomainNode, GraphBuilder, NodeId, NodeRole, PARAMETER_MARKER, Status,
    display_name, is_parameter,
};
