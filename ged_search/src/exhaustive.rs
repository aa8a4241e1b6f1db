//! Exact edit distance by enumerating every feasible bijection.
//!
//! Exponential; meant for tiny graphs and as a reference for the
//! branch-and-bound search in tests.

use crate::cost::editorial_cost_only;
use crate::graph::{Graph, VertexId};
use crate::mapping::Mapping;
use crate::oracle::FeasibilityOracle;

/// Minimum editorial cost over all feasible bijections in arena order, with
/// the first mapping reaching it. `None` if the graphs differ in size or no
/// feasible bijection exists.
#[must_use]
pub fn exact_ged<O: FeasibilityOracle + ?Sized>(
    source: &Graph,
    target: &Graph,
    oracle: &O,
) -> Option<(u32, Mapping)> {
    if source.vertex_count() != target.vertex_count() {
        return None;
    }
    let mut walk = Walk {
        source,
        target,
        oracle,
        sources: source.vertex_ids().collect(),
        targets: target.vertex_ids().collect(),
        best: None,
    };
    walk.descend(&Mapping::new());
    walk.best
}

struct Walk<'a, O: ?Sized> {
    source: &'a Graph,
    target: &'a Graph,
    oracle: &'a O,
    sources: Vec<VertexId>,
    targets: Vec<VertexId>,
    best: Option<(u32, Mapping)>,
}

impl<O: FeasibilityOracle + ?Sized> Walk<'_, O> {
    fn descend(&mut self, partial: &Mapping) {
        // Partial costs never decrease, so a partial at or above the best is dead.
        let cost = editorial_cost_only(partial, self.source, self.target);
        if self.best.as_ref().is_some_and(|(best, _)| cost >= *best) {
            return;
        }
        let Some(&next) = self.sources.get(partial.len()) else {
            self.best = Some((cost, partial.clone()));
            return;
        };
        for i in 0..self.targets.len() {
            let t = self.targets[i];
            if partial.contains_target(t) || !self.oracle.mapping_possible(next, t) {
                continue;
            }
            self.descend(&partial.extended(next, t));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Vertex;
    use crate::oracle::AllowAll;

    #[test]
    fn finds_the_relabelling_free_bijection() {
        let mut source = Graph::new();
        let a = source.add_vertex(Vertex::new("A"));
        let b = source.add_vertex(Vertex::new("B"));
        source.add_edge(a, b, "l").unwrap();

        let mut target = Graph::new();
        let y = target.add_vertex(Vertex::new("B"));
        let x = target.add_vertex(Vertex::new("A"));
        target.add_edge(x, y, "l").unwrap();

        let (cost, mapping) = exact_ged(&source, &target, &AllowAll).unwrap();
        assert_eq!(cost, 0);
        assert_eq!(mapping.target_for(a), Some(x));
        assert_eq!(mapping.target_for(b), Some(y));
    }

    #[test]
    fn respects_the_oracle() {
        let mut source = Graph::new();
        source.add_vertex(Vertex::new("A"));
        source.add_vertex(Vertex::new("B"));
        let mut target = Graph::new();
        target.add_vertex(Vertex::new("B"));
        target.add_vertex(Vertex::new("A"));

        let identity_only = |s: VertexId, t: VertexId| s == t;
        let (cost, mapping) = exact_ged(&source, &target, &identity_only).unwrap();
        assert_eq!(cost, 2);
        assert!(mapping.pairs().all(|(s, t)| s == t));

        let never = |_: VertexId, _: VertexId| false;
        assert!(exact_ged(&source, &target, &never).is_none());
    }

    #[test]
    fn size_mismatch_has_no_answer() {
        let mut source = Graph::new();
        source.add_vertex(Vertex::new("A"));
        assert!(exact_ged(&source, &Graph::new(), &AllowAll).is_none());
    }
}
