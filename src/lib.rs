//! kind-graph — an undirected multigraph of named nodes joined by
//! kind-labelled edges.
//!
//! Every edge is stored as a mirrored pair of directed entries, so
//! `has_edge(a, b, k)` and `has_edge(b, a, k)` always agree.
//!
//! ```
//! use kind_graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("Auckland", "Christchurch", "Plane").unwrap();
//! assert!(graph.has_edge("Christchurch", "Auckland", "Plane"));
//! assert_eq!(
//!     graph.to_string(),
//!     "Auckland: (Christchurch, Plane)\nChristchurch: (Auckland, Plane)\n"
//! );
//! ```

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphSnapshot, NodeEntry};
pub use types::{Edge, GraphError, GraphResult, Node};
