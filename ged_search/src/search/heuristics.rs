use std::collections::HashMap;

use itertools::Itertools;

use crate::assignment::{CostMatrix, INFEASIBLE_COST};
use crate::graph::{Edge, Graph, VertexId};
use crate::mapping::Mapping;
use crate::oracle::FeasibilityOracle;

/// Admissible estimate of the extra editorial cost of mapping one unmapped
/// source vertex onto one unmapped target vertex, given a fixed partial
/// mapping.
///
/// The estimate is the sum of
/// - the vertex term (0 for equal content, 1 otherwise),
/// - half the label multiset distance between the inner edges of both
///   vertices (edges with no endpoint mapped yet; each such edge is seen
///   from both of its endpoints),
/// - one per ordered edge slot to an already mapped pair whose labels
///   differ.
///
/// Summed over an assignment of all unmapped vertices and added to the
/// partial mapping's exact cost, it never exceeds the cost of any full
/// mapping that completes the partial one with that assignment.
pub struct LowerBoundEstimator<'a, O: ?Sized> {
    source: &'a Graph,
    target: &'a Graph,
    oracle: &'a O,
}

impl<'a, O: FeasibilityOracle + ?Sized> LowerBoundEstimator<'a, O> {
    pub const fn new(source: &'a Graph, target: &'a Graph, oracle: &'a O) -> Self {
        Self {
            source,
            target,
            oracle,
        }
    }

    /// Lower bound for `v -> u` on top of `partial`, or [`INFEASIBLE_COST`]
    /// if the oracle rules the pair out.
    pub fn estimate(&self, v: VertexId, u: VertexId, partial: &Mapping) -> f64 {
        if !self.oracle.mapping_possible(v, u) {
            return INFEASIBLE_COST;
        }
        let vertex_cost = if self.source.vertex(v).same_content(self.target.vertex(u)) {
            0.0
        } else {
            1.0
        };

        let labels_v = inner_edge_labels(self.source, v, |x| partial.contains_source(x));
        let labels_u = inner_edge_labels(self.target, u, |x| partial.contains_target(x));
        let multiset_distance = multiset_edit_distance(&labels_v, &labels_u);

        vertex_cost + multiset_distance as f64 / 2.0 + self.anchored_cost(v, u, partial) as f64
    }

    /// Label mismatches on the edge slots between `v`/`u` and every mapped pair.
    fn anchored_cost(&self, v: VertexId, u: VertexId, partial: &Mapping) -> usize {
        partial
            .pairs()
            .map(|(v_prime, u_prime)| {
                let outgoing = edge_label(self.source.edge_between(v, v_prime))
                    != edge_label(self.target.edge_between(u, u_prime));
                let incoming = edge_label(self.source.edge_between(v_prime, v))
                    != edge_label(self.target.edge_between(u_prime, u));
                usize::from(outgoing) + usize::from(incoming)
            })
            .sum()
    }

    /// Cost matrix for the unmapped `rows` (source) against `columns` (target).
    #[must_use]
    pub fn cost_matrix(&self, rows: &[VertexId], columns: &[VertexId], partial: &Mapping) -> CostMatrix {
        let mut costs = CostMatrix::new(rows.len());
        for (i, &v) in rows.iter().enumerate() {
            for (j, &u) in columns.iter().enumerate() {
                costs.set(i, j, self.estimate(v, u, partial));
            }
        }
        costs
    }
}

fn edge_label(edge: Option<&Edge>) -> Option<&str> {
    edge.map(Edge::label)
}

/// Multiset of labels on edges at `v` whose endpoints are all unmapped.
fn inner_edge_labels(
    graph: &Graph,
    v: VertexId,
    is_mapped: impl Fn(VertexId) -> bool,
) -> HashMap<&str, usize> {
    graph
        .incident_edges(v)
        .filter(|e| !is_mapped(e.one()) && !is_mapped(e.two()))
        .map(Edge::label)
        .counts()
}

/// `max(|a|, |b|) - |a ∩ b|` over label multisets.
fn multiset_edit_distance(a: &HashMap<&str, usize>, b: &HashMap<&str, usize>) -> usize {
    let size_a: usize = a.values().sum();
    let size_b: usize = b.values().sum();
    let common: usize = a
        .iter()
        .map(|(label, &n)| n.min(b.get(label).copied().unwrap_or(0)))
        .sum();
    size_a.max(size_b) - common
}
