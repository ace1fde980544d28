//! Deterministic text rendering of a graph.

use std::io::{self, Write};

use crate::types::Edge;

use super::Graph;

impl Graph {
    /// Write the rendering to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    /// Write the rendering to standard output.
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_to(&mut lock)?;
        lock.flush()
    }
}

/// One line per node, nodes by name, each followed by its edges sorted by
/// destination name: `Auckland: (Christchurch, Plane) (Wellington, Road)`.
/// Nodes without edges render as `Name: `.
impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (node, edges) in self.sorted_entries() {
            let mut sorted: Vec<&Edge> = edges.iter().collect();
            // Stable: equal destinations keep insertion order.
            sorted.sort_by(|a, b| a.destination().cmp(b.destination()));

            write!(f, "{}: ", node)?;
            for (i, edge) in sorted.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", edge)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
