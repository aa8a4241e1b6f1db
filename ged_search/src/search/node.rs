use std::cmp::Ordering;

use crate::mapping::Mapping;

use super::siblings::SiblingStream;

/// A partial mapping waiting in the priority queue.
pub(crate) struct SearchNode {
    pub mapping: Mapping,
    pub level: usize,
    pub lower_bound: f64,
    /// Insertion order, breaks ties deterministically
    pub sequence: u64,
    /// Remaining siblings of this node, if it is the one holding them
    pub siblings: Option<SiblingStream>,
}

impl SearchNode {
    #[contracts::debug_requires(mapping.len() == level)]
    pub(crate) fn new(
        mapping: Mapping,
        level: usize,
        lower_bound: f64,
        sequence: u64,
        siblings: Option<SiblingStream>,
    ) -> Self {
        Self {
            mapping,
            level,
            lower_bound,
            sequence,
            siblings,
        }
    }
}

// `BinaryHeap` pops the greatest element: lowest bound first, then deepest
// level, then earliest insertion.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .lower_bound
            .total_cmp(&self.lower_bound)
            .then_with(|| self.level.cmp(&other.level))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}
