use std::iter::FusedIterator;

use crate::assignment::{CostMatrix, HungarianSolver};
use crate::graph::VertexId;
use crate::mapping::Mapping;

/// Everything fixed when a node is expanded: the parent mapping, its exact
/// cost and the unmapped vertices on both sides, in search order.
pub(crate) struct Expansion {
    parent: Mapping,
    parent_cost: u32,
    pending: Vec<VertexId>,
    available: Vec<VertexId>,
}

/// One child of an expansion, together with the full mapping its assignment
/// completes to.
pub(crate) struct Candidate {
    pub mapping: Mapping,
    pub lower_bound: f64,
    pub full: Mapping,
}

impl Expansion {
    #[contracts::requires(pending.len() == available.len(), "unmapped vertex counts must agree")]
    pub(crate) fn new(
        parent: Mapping,
        parent_cost: u32,
        pending: Vec<VertexId>,
        available: Vec<VertexId>,
    ) -> Self {
        Self {
            parent,
            parent_cost,
            pending,
            available,
        }
    }

    /// Turns a ranked assignment into a child, or `None` if it picks an
    /// infeasible cell.
    #[contracts::requires(
        assignment.len() == self.pending.len(),
        "assignment length must match the unmapped source count"
    )]
    pub(crate) fn candidate(&self, costs: &CostMatrix, assignment: &[usize]) -> Option<Candidate> {
        if !costs.is_feasible(assignment) {
            return None;
        }
        let lower_bound = f64::from(self.parent_cost) + costs.total(assignment);
        let mapping = self
            .parent
            .extended(self.pending[0], self.available[assignment[0]]);
        let mut full = self.parent.clone();
        full.extend_from_assignment(&self.pending, &self.available, assignment);
        Some(Candidate {
            mapping,
            lower_bound,
            full,
        })
    }
}

/// Lazily ranked alternatives for the first pending source vertex.
///
/// The stream is owned by exactly one queued node at a time; popping that
/// node pulls one sibling and hands the stream over to it.
pub(crate) struct SiblingStream {
    expansion: Expansion,
    solver: HungarianSolver,
    done: bool,
}

impl SiblingStream {
    /// `solver` must already hold the solved assignment the first child came from.
    pub(crate) const fn new(expansion: Expansion, solver: HungarianSolver) -> Self {
        Self {
            expansion,
            solver,
            done: false,
        }
    }
}

impl Iterator for SiblingStream {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.done {
            return None;
        }
        // Totals only grow, so the first infeasible assignment ends the stream.
        let next = self
            .solver
            .next_best()
            .and_then(|assignment| self.expansion.candidate(self.solver.costs(), &assignment));
        self.done = next.is_none();
        next
    }
}

impl FusedIterator for SiblingStream {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::INFEASIBLE_COST;

    fn v(i: u32) -> VertexId {
        VertexId::new(i)
    }

    fn expansion() -> Expansion {
        let parent = Mapping::from_pairs([(v(0), v(0))]).unwrap();
        Expansion::new(parent, 2, vec![v(1), v(2)], vec![v(1), v(2)])
    }

    #[test]
    fn candidate_adds_parent_cost_and_completes_mapping() {
        let costs = CostMatrix::from_rows(vec![vec![0.5, 1.0], vec![1.0, 0.0]]);
        let child = expansion().candidate(&costs, &[0, 1]).unwrap();
        assert_eq!(child.lower_bound, 2.5);
        assert_eq!(child.mapping.len(), 2);
        assert_eq!(child.mapping.target_for(v(1)), Some(v(1)));
        assert_eq!(child.full.len(), 3);
        assert_eq!(child.full.target_for(v(2)), Some(v(2)));
    }

    #[test]
    fn infeasible_assignment_yields_no_candidate() {
        let costs = CostMatrix::from_rows(vec![vec![INFEASIBLE_COST, 1.0], vec![1.0, 0.0]]);
        assert!(expansion().candidate(&costs, &[0, 1]).is_none());
    }

    #[test]
    fn stream_yields_siblings_in_rank_order_then_stops() {
        let costs = CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        let mut solver = HungarianSolver::new(costs);
        let best = solver.solve();
        assert_eq!(best, vec![0, 1]);

        let mut stream = SiblingStream::new(expansion(), solver);
        let sibling = stream.next().unwrap();
        assert_eq!(sibling.mapping.target_for(v(1)), Some(v(2)));
        assert_eq!(sibling.lower_bound, 4.0);
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn stream_ends_at_first_infeasible_sibling() {
        let costs = CostMatrix::from_rows(vec![vec![0.0, INFEASIBLE_COST], vec![1.0, 0.0]]);
        let mut solver = HungarianSolver::new(costs);
        solver.solve();
        let mut stream = SiblingStream::new(expansion(), solver);
        assert!(stream.next().is_none());
    }
}
