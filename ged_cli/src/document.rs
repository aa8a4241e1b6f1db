//! JSON graph documents.
//!
//! ```json
//! {
//!   "vertices": [
//!     { "id": "Query", "kind": "Object", "properties": { "name": "Query" } },
//!     { "id": "Query.user", "kind": "Field", "name": "user" }
//!   ],
//!   "edges": [
//!     { "one": "Query", "two": "Query.user", "label": "field" }
//!   ]
//! }
//! ```
//!
//! Vertex ids are only used to resolve edge endpoints; the debug name
//! defaults to the id.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use ged_search::{Graph, GraphError, Vertex, VertexId};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Vertex id '{0}' is defined twice")]
    DuplicateVertex(String),

    #[error("Edge references unknown vertex id '{0}'")]
    UnknownVertex(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default)]
    vertices: Vec<VertexEntry>,
    #[serde(default)]
    edges: Vec<EdgeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VertexEntry {
    id: String,
    kind: String,
    #[serde(default)]
    properties: BTreeMap<String, String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeEntry {
    one: String,
    two: String,
    label: String,
}

impl GraphDocument {
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| DocumentError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn into_graph(self) -> Result<Graph, DocumentError> {
        let mut graph = Graph::new();
        let mut ids: HashMap<String, VertexId> = HashMap::with_capacity(self.vertices.len());
        for entry in self.vertices {
            if ids.contains_key(&entry.id) {
                return Err(DocumentError::DuplicateVertex(entry.id));
            }
            let mut vertex =
                Vertex::new(entry.kind).with_debug_name(entry.name.unwrap_or_else(|| entry.id.clone()));
            for (key, value) in entry.properties {
                vertex = vertex.with_property(key, value);
            }
            ids.insert(entry.id, graph.add_vertex(vertex));
        }

        let resolve = |id: &str| {
            ids.get(id)
                .copied()
                .ok_or_else(|| DocumentError::UnknownVertex(id.to_string()))
        };
        for edge in self.edges {
            graph.add_edge(resolve(&edge.one)?, resolve(&edge.two)?, edge.label)?;
        }
        Ok(graph)
    }
}
