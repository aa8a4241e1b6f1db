//! Error types for graph construction, mappings and the search driver.
//!
//! Input problems are reported before the search starts. Once the search
//! loop is running, broken internal invariants are contract violations and
//! panic instead of surfacing here.

use thiserror::Error;

use crate::graph::VertexId;

/// Errors raised while building a [`Graph`](crate::Graph).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint does not exist in the graph.
    #[error("Unknown vertex {0}")]
    UnknownVertex(VertexId),

    /// The ordered endpoint pair already carries an edge.
    #[error("Duplicate edge {one} -> {two}")]
    DuplicateEdge { one: VertexId, two: VertexId },
}

/// Errors raised when extending a [`Mapping`](crate::Mapping).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The source vertex already has a counterpart.
    #[error("Source vertex {0} is already mapped")]
    SourceAlreadyMapped(VertexId),

    /// The target vertex already has a counterpart.
    #[error("Target vertex {0} is already mapped")]
    TargetAlreadyMapped(VertexId),
}

/// Errors that can occur while preparing or running a search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GedError {
    // === Preparation phase errors (before search) ===
    /// Source and target do not have the same number of vertices.
    #[error("Vertex count mismatch: source has {source_len}, target has {target_len}")]
    SizeMismatch { source_len: usize, target_len: usize },

    /// A vertex order is not a permutation of the graph's vertices.
    #[error("Invalid {side} order: {reason}")]
    InvalidOrder { side: &'static str, reason: String },

    /// The start mapping references vertices outside the graphs.
    #[error("Invalid start mapping: {0}")]
    InvalidStartMapping(String),

    /// Mapping construction failed.
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    // === Execution phase errors ===
    /// The time limit passed before any full mapping was scored.
    #[error("Time limit exceeded before a full mapping was found")]
    DeadlineExceeded,

    /// The queue drained without ever reaching a full mapping.
    #[error("Internal: search space exhausted without a full mapping")]
    SearchExhausted,
}

impl GedError {
    pub(crate) fn invalid_order(side: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOrder {
            side,
            reason: reason.into(),
        }
    }
}
