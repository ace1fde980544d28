//! Value types shared across the crate.

pub mod edge;
pub mod error;
pub mod node;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use node::Node;
