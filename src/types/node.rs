//! Named graph vertices.

use std::borrow::Borrow;

use serde::Serialize;

/// A vertex identified solely by its name.
///
/// Equality, hashing and ordering all derive from the name, so two `Node`s
/// built from the same string are interchangeable as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Node {
    name: String,
}

impl Node {
    /// Create a node with the given name. Names are case-sensitive.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The node's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Lets `HashMap<Node, _>` be queried by `&str` without allocating.
impl Borrow<str> for Node {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Node {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
