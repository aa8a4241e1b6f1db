use std::collections::HashMap;

use super::{EdgeId, VertexId};

type IncidentMap = Vec<Vec<EdgeId>>;
type PairMap = HashMap<(VertexId, VertexId), EdgeId>;

/// Incidence lists and ordered-pair lookup for one graph.
#[derive(Clone, Debug, Default)]
pub struct Adjacency {
    /// Edges touching each vertex, indexed by vertex id
    incident: IncidentMap,
    /// Ordered `(one, two)` endpoint pair to edge
    by_pair: PairMap,
}

impl Adjacency {
    pub(super) fn add_vertex(&mut self) {
        self.incident.push(Vec::new());
    }

    /// Returns false if the ordered pair already carries an edge.
    pub(super) fn add_edge(&mut self, id: EdgeId, one: VertexId, two: VertexId) -> bool {
        if self.by_pair.contains_key(&(one, two)) {
            return false;
        }
        self.by_pair.insert((one, two), id);
        self.incident[one.as_usize()].push(id);
        if one != two {
            self.incident[two.as_usize()].push(id);
        }
        true
    }

    #[must_use]
    pub fn incident(&self, v: VertexId) -> &[EdgeId] {
        self.incident
            .get(v.as_usize())
            .map_or(&[], std::vec::Vec::as_slice)
    }

    #[must_use]
    pub fn between(&self, one: VertexId, two: VertexId) -> Option<EdgeId> {
        self.by_pair.get(&(one, two)).copied()
    }

    #[must_use]
    pub fn degree(&self, v: VertexId) -> usize {
        self.incident(v).len()
    }
}
