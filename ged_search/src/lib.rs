//! Approximate graph edit distance between two labelled graphs.
//!
//! The search maps source vertices onto target vertices one at a time,
//! best-first by an admissible lower bound, and keeps the cheapest full
//! mapping seen so far as an upper bound. The result is the mapping's exact
//! edit script: vertex and edge insertions, deletions and relabelings.
//!
//! ```
//! use ged_search::{AllowAll, Graph, Vertex, diff};
//!
//! let mut source = Graph::new();
//! let a = source.add_vertex(Vertex::new("Object").with_debug_name("Query"));
//! let b = source.add_vertex(Vertex::new("Scalar").with_debug_name("ID"));
//! source.add_edge(a, b, "field").unwrap();
//!
//! let mut target = Graph::new();
//! target.add_vertex(Vertex::new("Object").with_debug_name("Query"));
//! target.add_vertex(Vertex::new("Scalar").with_debug_name("ID"));
//!
//! let result = diff(&source, &target, &AllowAll).unwrap();
//! assert_eq!(result.cost, 1);
//! ```

mod assignment;
mod config;
mod cost;
mod edit;
mod error;
pub mod exhaustive;
pub mod graph;
mod mapping;
mod oracle;
mod search;

pub use assignment::{CostMatrix, HungarianSolver, INFEASIBLE_COST};
pub use config::{SearchConfig, SearchConfigBuilder};
pub use cost::{editorial_cost, editorial_cost_only};
pub use edit::EditOperation;
pub use error::{GedError, GraphError, MappingError};
pub use graph::{Edge, EdgeId, Graph, PLACEHOLDER_KIND, Vertex, VertexId, pad_to_equal_size};
pub use mapping::Mapping;
pub use oracle::{AllowAll, FeasibilityOracle, SameKindOrPlaceholder};
pub use search::{GedResult, GedSearch, LowerBoundEstimator, SearchStats};

/// Runs a search with default orders and configuration.
///
/// # Errors
///
/// See [`GedSearch::run`].
pub fn diff<O: FeasibilityOracle + ?Sized>(
    source: &Graph,
    target: &Graph,
    oracle: &O,
) -> Result<GedResult, GedError> {
    GedSearch::new(source, target, oracle).run()
}
