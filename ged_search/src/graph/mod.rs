//! Arena-backed labelled graphs.
//!
//! Vertices and edges live in dense vectors and are referred to by
//! [`VertexId`] / [`EdgeId`]. A graph is read-only for the duration of a
//! search; the search only borrows it.

mod adjacency;
mod edge;
mod padding;
mod vertex;

pub use adjacency::Adjacency;
pub use edge::{Edge, EdgeId};
pub use padding::pad_to_equal_size;
pub use vertex::{PLACEHOLDER_KIND, Vertex, VertexId};

use crate::error::GraphError;

#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    adjacency: Adjacency,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, vertex: Vertex) -> VertexId {
        let id = VertexId::from(self.vertices.len());
        self.vertices.push(vertex);
        self.adjacency.add_vertex();
        id
    }

    /// Adds the directed edge `one -> two`.
    ///
    /// # Errors
    ///
    /// Fails if an endpoint is unknown or the ordered pair already has an edge.
    pub fn add_edge(
        &mut self,
        one: VertexId,
        two: VertexId,
        label: impl Into<String>,
    ) -> Result<EdgeId, GraphError> {
        for v in [one, two] {
            if !self.contains(v) {
                return Err(GraphError::UnknownVertex(v));
            }
        }
        let id = EdgeId::from(self.edges.len());
        if !self.adjacency.add_edge(id, one, two) {
            return Err(GraphError::DuplicateEdge { one, two });
        }
        self.edges.push(Edge::new(one, two, label.into()));
        Ok(id)
    }

    #[must_use]
    pub fn contains(&self, v: VertexId) -> bool {
        v.as_usize() < self.vertices.len()
    }

    /// # Panics
    ///
    /// Panics if `v` does not belong to this graph.
    #[must_use]
    pub fn vertex(&self, v: VertexId) -> &Vertex {
        &self.vertices[v.as_usize()]
    }

    /// # Panics
    ///
    /// Panics if `e` does not belong to this graph.
    #[must_use]
    pub fn edge(&self, e: EdgeId) -> &Edge {
        &self.edges[e.as_usize()]
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertex ids in arena order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::from)
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId::from(i), v))
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId::from(i), e))
    }

    /// Edges with `v` as either endpoint. A self-loop is yielded once.
    pub fn incident_edges(&self, v: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency
            .incident(v)
            .iter()
            .map(|&e| &self.edges[e.as_usize()])
    }

    /// The edge `one -> two`, if any.
    #[must_use]
    pub fn edge_between(&self, one: VertexId, two: VertexId) -> Option<&Edge> {
        self.adjacency
            .between(one, two)
            .map(|e| &self.edges[e.as_usize()])
    }

    #[must_use]
    pub fn edge_id_between(&self, one: VertexId, two: VertexId) -> Option<EdgeId> {
        self.adjacency.between(one, two)
    }

    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_isolated()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (Graph, [VertexId; 3]) {
        let mut g = Graph::new();
        let a = g.add_vertex(Vertex::new("Object"));
        let b = g.add_vertex(Vertex::new("Field"));
        let c = g.add_vertex(Vertex::new("Scalar"));
        g.add_edge(a, b, "field").unwrap();
        g.add_edge(b, c, "type").unwrap();
        g.add_edge(c, a, "back").unwrap();
        (g, [a, b, c])
    }

    #[test]
    fn edge_lookup_is_directed() {
        let (g, [a, b, _]) = triangle();
        assert_eq!(g.edge_between(a, b).map(Edge::label), Some("field"));
        assert!(g.edge_between(b, a).is_none());
    }

    #[test]
    fn incident_edges_cover_both_directions() {
        let (g, [a, _, _]) = triangle();
        let mut labels: Vec<&str> = g.incident_edges(a).map(Edge::label).collect();
        labels.sort_unstable();
        assert_eq!(labels, vec!["back", "field"]);
    }

    #[test]
    fn duplicate_edge_is_rejected() {
        let (mut g, [a, b, _]) = triangle();
        assert_eq!(
            g.add_edge(a, b, "other"),
            Err(GraphError::DuplicateEdge { one: a, two: b })
        );
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn unknown_endpoint_is_rejected() {
        let (mut g, [a, _, _]) = triangle();
        let ghost = VertexId::new(42);
        assert_eq!(g.add_edge(a, ghost, "x"), Err(GraphError::UnknownVertex(ghost)));
    }
}
