//! Serializable view of a graph, used for JSON output.

use serde::Serialize;

use crate::types::{Edge, GraphResult, Node};

use super::Graph;

/// A borrowed, deterministically ordered view of a graph.
#[derive(Debug, Serialize)]
pub struct GraphSnapshot<'a> {
    pub node_count: usize,
    pub edge_count: usize,
    /// Nodes sorted by name.
    pub nodes: Vec<NodeEntry<'a>>,
}

/// A node and its adjacency list in insertion order.
#[derive(Debug, Serialize)]
pub struct NodeEntry<'a> {
    pub name: &'a Node,
    pub edges: &'a [Edge],
}

impl GraphSnapshot<'_> {
    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Graph {
    /// Take a serializable snapshot of the graph.
    pub fn snapshot(&self) -> GraphSnapshot<'_> {
        GraphSnapshot {
            node_count: self.node_count(),
            edge_count: self.edge_count(),
            nodes: self
                .sorted_entries()
                .into_iter()
                .map(|(name, edges)| NodeEntry { name, edges })
                .collect(),
        }
    }
}
