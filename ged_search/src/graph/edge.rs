use std::fmt;

use serde::{Deserialize, Serialize};

use super::VertexId;

/// Arena index of an edge inside one [`Graph`](super::Graph).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId {
    inner: u32,
}

impl EdgeId {
    /// Creates an edge index from a raw integer.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self { inner: id }
    }

    /// Returns the index as a usize for array access.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.inner as usize
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.inner)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(id: usize) -> Self {
        Self { inner: id as u32 }
    }
}

/// A directed, labelled edge `one -> two`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    one: VertexId,
    two: VertexId,
    label: String,
}

impl Edge {
    pub(super) fn new(one: VertexId, two: VertexId, label: String) -> Self {
        Self { one, two, label }
    }

    /// Start endpoint.
    #[must_use]
    pub const fn one(&self) -> VertexId {
        self.one
    }

    /// End endpoint.
    #[must_use]
    pub const fn two(&self) -> VertexId {
        self.two
    }

    /// Edge label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}
