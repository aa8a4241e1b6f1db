//! Ordered partial mapping between source and target vertices.

use std::collections::HashMap;

use contracts::*;

use crate::error::MappingError;
use crate::graph::VertexId;

/// An insertion-ordered, injective set of `(source, target)` pairs.
///
/// The position of a pair is significant: the search maps the source
/// vertex order prefix by prefix, so `len()` is also the search level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mapping {
    /// Sources in insertion order
    sources: Vec<VertexId>,
    /// Targets in insertion order, `targets[i]` is the image of `sources[i]`
    targets: Vec<VertexId>,
    /// Source to target lookup
    source_to_target: HashMap<VertexId, VertexId>,
    /// Target to source lookup
    target_to_source: HashMap<VertexId, VertexId>,
}

impl Mapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from pairs, failing on the first repeated vertex.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] if a source or target occurs twice.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (VertexId, VertexId)>,
    ) -> Result<Self, MappingError> {
        let mut mapping = Self::new();
        for (s, t) in pairs {
            mapping.check_free(s, t)?;
            mapping.push(s, t);
        }
        Ok(mapping)
    }

    /// Checks that both lookup tables agree with the ordered pair lists.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.sources.len() != self.targets.len()
            || self.source_to_target.len() != self.sources.len()
            || self.target_to_source.len() != self.targets.len()
        {
            return false;
        }
        self.sources
            .iter()
            .zip(&self.targets)
            .all(|(s, t)| {
                self.source_to_target.get(s) == Some(t) && self.target_to_source.get(t) == Some(s)
            })
    }

    /// Returns a new mapping with `(source, target)` appended.
    ///
    /// # Errors
    ///
    /// Fails if either vertex is already mapped.
    pub fn extend(&self, source: VertexId, target: VertexId) -> Result<Self, MappingError> {
        self.check_free(source, target)?;
        Ok(self.extended(source, target))
    }

    /// Infallible variant of [`Mapping::extend`] for callers that only ever
    /// offer unmapped vertices.
    #[debug_requires(!self.contains_source(source) && !self.contains_target(target))]
    pub(crate) fn extended(&self, source: VertexId, target: VertexId) -> Self {
        let mut next = self.clone();
        next.push(source, target);
        next
    }

    /// Returns a new mapping without the most recently added pair.
    #[must_use]
    pub fn remove_last(&self) -> Self {
        let mut next = self.clone();
        if let (Some(s), Some(t)) = (next.sources.pop(), next.targets.pop()) {
            next.source_to_target.remove(&s);
            next.target_to_source.remove(&t);
        }
        next
    }

    /// Appends `sources[i] -> available[assignment[i]]` for every row of an
    /// assignment, in place.
    #[requires(sources.len() == assignment.len(), "assignment length must match the unmapped source count")]
    #[debug_ensures(self.is_consistent())]
    pub(crate) fn extend_from_assignment(
        &mut self,
        sources: &[VertexId],
        available: &[VertexId],
        assignment: &[usize],
    ) {
        self.sources.reserve(sources.len());
        self.targets.reserve(sources.len());
        for (&s, &column) in sources.iter().zip(assignment) {
            self.push(s, available[column]);
        }
    }

    fn check_free(&self, source: VertexId, target: VertexId) -> Result<(), MappingError> {
        if self.contains_source(source) {
            return Err(MappingError::SourceAlreadyMapped(source));
        }
        if self.contains_target(target) {
            return Err(MappingError::TargetAlreadyMapped(target));
        }
        Ok(())
    }

    #[debug_requires(self.sources.len() == self.targets.len())]
    #[debug_ensures(self.sources.len() == self.targets.len())]
    fn push(&mut self, source: VertexId, target: VertexId) {
        self.sources.push(source);
        self.targets.push(target);
        self.source_to_target.insert(source, target);
        self.target_to_source.insert(target, source);
    }

    #[must_use]
    pub fn contains_source(&self, v: VertexId) -> bool {
        self.source_to_target.contains_key(&v)
    }

    #[must_use]
    pub fn contains_target(&self, v: VertexId) -> bool {
        self.target_to_source.contains_key(&v)
    }

    /// Resolves a source vertex to its mapped target.
    #[must_use]
    pub fn target_for(&self, source: VertexId) -> Option<VertexId> {
        self.source_to_target.get(&source).copied()
    }

    /// Resolves a target vertex to its mapped source.
    #[must_use]
    pub fn source_for(&self, target: VertexId) -> Option<VertexId> {
        self.target_to_source.get(&target).copied()
    }

    #[must_use]
    pub fn source_at(&self, index: usize) -> Option<VertexId> {
        self.sources.get(index).copied()
    }

    #[must_use]
    pub fn target_at(&self, index: usize) -> Option<VertexId> {
        self.targets.get(index).copied()
    }

    /// Sources in insertion order.
    #[must_use]
    pub fn sources(&self) -> &[VertexId] {
        &self.sources
    }

    /// Targets in insertion order.
    #[must_use]
    pub fn targets(&self) -> &[VertexId] {
        &self.targets
    }

    pub fn pairs(&self) -> impl ExactSizeIterator<Item = (VertexId, VertexId)> + '_ {
        self.sources.iter().copied().zip(self.targets.iter().copied())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: u32) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn test_mapping_extend_is_persistent() {
        let empty = Mapping::new();
        let one = empty.extend(v(0), v(10)).unwrap();
        let two = one.extend(v(1), v(11)).unwrap();

        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert_eq!(two.len(), 2);
        assert_eq!(two.target_for(v(1)), Some(v(11)));
        assert_eq!(two.source_for(v(10)), Some(v(0)));
        assert_eq!(two.source_at(1), Some(v(1)));
        assert_eq!(two.target_at(0), Some(v(10)));
        assert!(two.is_consistent());
    }

    #[test]
    fn test_mapping_rejects_reused_vertices() {
        let m = Mapping::new().extend(v(0), v(10)).unwrap();
        assert_eq!(
            m.extend(v(0), v(11)),
            Err(MappingError::SourceAlreadyMapped(v(0)))
        );
        assert_eq!(
            m.extend(v(1), v(10)),
            Err(MappingError::TargetAlreadyMapped(v(10)))
        );
    }

    #[test]
    fn test_mapping_remove_last() {
        let m = Mapping::from_pairs([(v(0), v(10)), (v(1), v(11))]).unwrap();
        let shorter = m.remove_last();
        assert_eq!(shorter.len(), 1);
        assert!(!shorter.contains_source(v(1)));
        assert!(!shorter.contains_target(v(11)));
        assert!(shorter.contains_source(v(0)));
        assert!(Mapping::new().remove_last().is_empty());
    }

    #[test]
    fn test_mapping_batch_matches_repeated_extend() {
        let sources = [v(0), v(1), v(2)];
        let available = [v(10), v(11), v(12)];
        let mut batch = Mapping::new();
        batch.extend_from_assignment(&sources, &available, &[2, 0, 1]);

        let stepwise = Mapping::new()
            .extend(v(0), v(12))
            .and_then(|m| m.extend(v(1), v(10)))
            .and_then(|m| m.extend(v(2), v(11)))
            .unwrap();
        assert_eq!(batch, stepwise);
        assert_eq!(batch.targets(), &[v(12), v(10), v(11)]);
    }
}
