//! Edit operations produced by exact cost evaluation.

use serde::Serialize;

use crate::graph::{EdgeId, Graph, VertexId};

/// One step of an edit script turning the source graph into the target.
///
/// Vertex operations always reference the mapped pair: for an insertion the
/// source side is the placeholder the new vertex was paired with, for a
/// deletion the target side is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOperation {
    InsertVertex { source: VertexId, target: VertexId },
    DeleteVertex { source: VertexId, target: VertexId },
    ChangeVertex { source: VertexId, target: VertexId },
    InsertEdge { target_edge: EdgeId },
    DeleteEdge { source_edge: EdgeId },
    ChangeEdge { source_edge: EdgeId, target_edge: EdgeId },
}

impl EditOperation {
    #[must_use]
    pub const fn is_vertex_operation(&self) -> bool {
        matches!(
            self,
            Self::InsertVertex { .. } | Self::DeleteVertex { .. } | Self::ChangeVertex { .. }
        )
    }

    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::InsertVertex { .. } => "insert_vertex",
            Self::DeleteVertex { .. } => "delete_vertex",
            Self::ChangeVertex { .. } => "change_vertex",
            Self::InsertEdge { .. } => "insert_edge",
            Self::DeleteEdge { .. } => "delete_edge",
            Self::ChangeEdge { .. } => "change_edge",
        }
    }

    /// One line description of the operation.
    #[must_use]
    pub fn describe(&self, source: &Graph, target: &Graph) -> String {
        let edge = |g: &Graph, e: EdgeId| {
            let edge = g.edge(e);
            format!(
                "{} -[{}]-> {}",
                g.vertex(edge.one()),
                edge.label(),
                g.vertex(edge.two())
            )
        };
        match *self {
            Self::InsertVertex { target: t, .. } => format!("Insert {}", target.vertex(t)),
            Self::DeleteVertex { source: s, .. } => format!("Delete {}", source.vertex(s)),
            Self::ChangeVertex { source: s, target: t } => {
                format!("Change {} to {}", source.vertex(s), target.vertex(t))
            }
            Self::InsertEdge { target_edge } => format!("Insert edge {}", edge(target, target_edge)),
            Self::DeleteEdge { source_edge } => format!("Delete edge {}", edge(source, source_edge)),
            Self::ChangeEdge {
                source_edge,
                target_edge,
            } => format!(
                "Change edge {} to {}",
                edge(source, source_edge),
                edge(target, target_edge)
            ),
        }
    }
}
