//! Feasibility of individual vertex pairings.

use crate::graph::{Graph, VertexId};

/// Decides whether a source vertex may ever be mapped onto a target vertex.
///
/// Infeasible pairs are scored at the sentinel cost and are never part of a
/// returned mapping.
pub trait FeasibilityOracle {
    fn mapping_possible(&self, source: VertexId, target: VertexId) -> bool;
}

impl<F> FeasibilityOracle for F
where
    F: Fn(VertexId, VertexId) -> bool,
{
    fn mapping_possible(&self, source: VertexId, target: VertexId) -> bool {
        self(source, target)
    }
}

/// Every pair is feasible.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowAll;

impl FeasibilityOracle for AllowAll {
    fn mapping_possible(&self, _: VertexId, _: VertexId) -> bool {
        true
    }
}

/// Real vertices only map onto real vertices of the same kind; placeholders
/// map onto anything.
#[derive(Clone, Copy, Debug)]
pub struct SameKindOrPlaceholder<'g> {
    source: &'g Graph,
    target: &'g Graph,
}

impl<'g> SameKindOrPlaceholder<'g> {
    #[must_use]
    pub const fn new(source: &'g Graph, target: &'g Graph) -> Self {
        Self { source, target }
    }
}

impl FeasibilityOracle for SameKindOrPlaceholder<'_> {
    fn mapping_possible(&self, source: VertexId, target: VertexId) -> bool {
        let (s, t) = (self.source.vertex(source), self.target.vertex(target));
        s.is_isolated() || t.is_isolated() || s.kind() == t.kind()
    }
}
