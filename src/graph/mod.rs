//! In-memory graph operations — the core data structure.

pub mod kind_graph;
pub mod render;
pub mod snapshot;

pub use kind_graph::Graph;
pub use snapshot::{GraphSnapshot, NodeEntry};
