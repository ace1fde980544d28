//! Kind-labelled edges.

use serde::Serialize;

use super::Node;

/// One direction of an undirected relationship, stored in the adjacency
/// list of its source node.
///
/// An edge has no identity beyond its `(destination, kind)` pair: two edges
/// with the same pair are equal and hash identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    destination: Node,
    kind: String,
}

impl Edge {
    /// Create an edge pointing at `destination` with the given kind label.
    pub fn new(destination: Node, kind: impl Into<String>) -> Self {
        Self {
            destination,
            kind: kind.into(),
        }
    }

    /// The node this edge points to.
    pub fn destination(&self) -> &Node {
        &self.destination
    }

    /// The kind label (e.g. "Road", "Plane").
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// True if this edge points at `destination` and carries `kind`.
    pub fn matches(&self, destination: &str, kind: &str) -> bool {
        self.destination.name() == destination && self.kind == kind
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.destination, self.kind)
    }
}
