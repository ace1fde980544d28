//! Core graph structure: named nodes with mirrored, kind-labelled adjacency lists.

use std::collections::{BTreeSet, HashMap};

use crate::types::{Edge, GraphError, GraphResult, Node};

/// An undirected multigraph over string-named nodes.
///
/// Every undirected edge is stored as two directed entries, one in each
/// endpoint's adjacency list. Within a list no two edges share the same
/// `(destination, kind)` pair, and no list ever points back at its owner.
///
/// Not synchronised: share across threads behind a lock of your choosing.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Adjacency list: node -> outgoing edges in insertion order.
    adjacency: HashMap<Node, Vec<Edge>>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Adding an existing node is a no-op.
    pub fn add_node(&mut self, name: &str) -> GraphResult<()> {
        if name.is_empty() {
            log::warn!("Rejected node: no name provided");
            return Err(GraphError::EmptyName);
        }

        if !self.adjacency.contains_key(name) {
            log::debug!("Added node {}", name);
            self.adjacency.insert(Node::new(name), Vec::new());
        }
        Ok(())
    }

    /// Remove a node and every edge pointing at it.
    ///
    /// Returns whether the node existed. Missing nodes are a no-op.
    pub fn remove_node(&mut self, name: &str) -> bool {
        let existed = self.adjacency.remove(name).is_some();

        for edges in self.adjacency.values_mut() {
            edges.retain(|edge| edge.destination().name() != name);
        }

        if existed {
            log::debug!("Removed node {}", name);
        }
        existed
    }

    /// Add an undirected edge of `kind` between two distinct nodes, creating
    /// either node if needed.
    ///
    /// Each direction is inserted only if an identical `(destination, kind)`
    /// entry is not already present. Invalid input leaves the graph untouched.
    pub fn add_edge(&mut self, name1: &str, name2: &str, kind: &str) -> GraphResult<()> {
        if let Err(e) = validate_edge(name1, name2, kind) {
            log::warn!("Rejected edge ({}, {}, {}): {}", name1, name2, kind, e);
            return Err(e);
        }

        let node1 = Node::new(name1);
        let node2 = Node::new(name2);
        let forward = Edge::new(node2.clone(), kind);
        let reverse = Edge::new(node1.clone(), kind);

        let added_forward = push_unique(self.adjacency.entry(node1).or_default(), forward);
        let added_reverse = push_unique(self.adjacency.entry(node2).or_default(), reverse);

        if added_forward || added_reverse {
            log::debug!("Added {} edge {} <-> {}", kind, name1, name2);
        }
        Ok(())
    }

    /// Remove the edge of `kind` between two nodes, in both directions.
    ///
    /// Returns whether anything was removed. Missing nodes or edges are a no-op.
    pub fn remove_edge(&mut self, name1: &str, name2: &str, kind: &str) -> bool {
        let mut removed = false;
        if let Some(edges) = self.adjacency.get_mut(name1) {
            removed |= remove_first(edges, name2, kind);
        }
        if let Some(edges) = self.adjacency.get_mut(name2) {
            removed |= remove_first(edges, name1, kind);
        }

        if removed {
            log::debug!("Removed {} edge {} <-> {}", kind, name1, name2);
        }
        removed
    }

    /// Whether `name1` has an edge of `kind` to `name2`.
    pub fn has_edge(&self, name1: &str, name2: &str, kind: &str) -> bool {
        self.adjacency
            .get(name1)
            .is_some_and(|edges| edges.iter().any(|edge| edge.matches(name2, kind)))
    }

    /// All edges of `kind`, formatted as `(source, destination)` pairs,
    /// sorted, de-duplicated and joined by single spaces.
    ///
    /// Both directions of every matching edge are listed. Returns an empty
    /// string when nothing matches.
    pub fn edges_of_type(&self, kind: &str) -> String {
        let pairs: BTreeSet<String> = self
            .adjacency
            .iter()
            .flat_map(|(source, edges)| {
                edges
                    .iter()
                    .filter(|edge| edge.kind() == kind)
                    .map(move |edge| format!("({}, {})", source, edge.destination()))
            })
            .collect();

        pairs.into_iter().collect::<Vec<_>>().join(" ")
    }

    /// Whether a node with this name exists.
    pub fn contains_node(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Outgoing edges of a node in insertion order (empty if the node is absent).
    pub fn edges(&self, name: &str) -> &[Edge] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All node names, sorted.
    pub fn node_names(&self) -> Vec<&str> {
        self.sorted_entries()
            .into_iter()
            .map(|(node, _)| node.name())
            .collect()
    }

    /// Every edge kind currently in use.
    pub fn kinds(&self) -> BTreeSet<&str> {
        self.adjacency
            .values()
            .flatten()
            .map(Edge::kind)
            .collect()
    }

    /// Nodes with their edge lists, ordered by node name.
    pub(crate) fn sorted_entries(&self) -> Vec<(&Node, &[Edge])> {
        let mut entries: Vec<(&Node, &[Edge])> = self
            .adjacency
            .iter()
            .map(|(node, edges)| (node, edges.as_slice()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

fn validate_edge(name1: &str, name2: &str, kind: &str) -> GraphResult<()> {
    if name1.is_empty() || name2.is_empty() {
        return Err(GraphError::EmptyName);
    }
    if kind.is_empty() {
        return Err(GraphError::EmptyKind);
    }
    if name1 == name2 {
        return Err(GraphError::SelfLoop(name1.to_string()));
    }
    Ok(())
}

/// Append `edge` unless an equal edge is already in the list.
fn push_unique(edges: &mut Vec<Edge>, edge: Edge) -> bool {
    if edges.contains(&edge) {
        return false;
    }
    edges.push(edge);
    true
}

/// Remove the first edge matching `(destination, kind)`, keeping the rest in order.
fn remove_first(edges: &mut Vec<Edge>, destination: &str, kind: &str) -> bool {
    match edges.iter().position(|edge| edge.matches(destination, kind)) {
        Some(pos) => {
            edges.remove(pos);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_rejects_empty_name() {
        let mut graph = Graph::new();
        assert!(matches!(graph.add_node(""), Err(GraphError::EmptyName)));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_invalid_edge_creates_nothing() {
        let mut graph = Graph::new();
        assert!(matches!(
            graph.add_edge("Napier", "Napier", "Road"),
            Err(GraphError::SelfLoop(_))
        ));
        assert!(matches!(
            graph.add_edge("Napier", "Hastings", ""),
            Err(GraphError::EmptyKind)
        ));
        assert!(matches!(
            graph.add_edge("", "Hastings", "Road"),
            Err(GraphError::EmptyName)
        ));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_remove_first_keeps_order() {
        let mut edges = vec![
            Edge::new(Node::new("A"), "Road"),
            Edge::new(Node::new("B"), "Road"),
            Edge::new(Node::new("C"), "Road"),
        ];
        assert!(remove_first(&mut edges, "B", "Road"));
        assert!(!remove_first(&mut edges, "B", "Road"));
        let names: Vec<&str> = edges.iter().map(|e| e.destination().name()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_edge_count_counts_undirected() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", "Road").unwrap();
        graph.add_edge("A", "B", "Rail").unwrap();
        graph.add_edge("B", "C", "Road").unwrap();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.node_count(), 3);
    }
}
