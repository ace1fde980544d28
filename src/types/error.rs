//! Error types for the kind-graph library.

use thiserror::Error;

/// All errors that can occur in the kind-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node name was empty.
    #[error("No name provided")]
    EmptyName,

    /// An edge kind label was empty.
    #[error("No edge kind provided")]
    EmptyKind,

    /// Both endpoints of an edge were the same node.
    #[error("Edge is invalid: self-loop on node {0}")]
    SelfLoop(String),

    /// Malformed line in an operation script.
    #[error("Script error on line {line}: {message}")]
    Script { line: usize, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for kind-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
