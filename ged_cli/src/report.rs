use std::fmt;

use ged_search::{EditOperation, GedResult, Graph, SearchStats};
use serde::Serialize;

/// Rendered outcome of one diff, as printed by the binary.
#[derive(Debug, Serialize)]
pub struct Report {
    pub cost: u32,
    pub exhaustive: bool,
    pub operations: Vec<OperationEntry>,
    /// `[source, target]` descriptions in mapping order
    pub mapping: Vec<[String; 2]>,
    pub stats: SearchStats,
}

#[derive(Debug, Serialize)]
pub struct OperationEntry {
    #[serde(flatten)]
    pub operation: EditOperation,
    pub description: String,
}

impl Report {
    pub fn new(result: &GedResult, source: &Graph, target: &Graph) -> Self {
        let operations = result
            .operations
            .iter()
            .map(|&operation| OperationEntry {
                operation,
                description: operation.describe(source, target),
            })
            .collect();
        let mapping = result
            .mapping
            .pairs()
            .map(|(s, t)| [source.vertex(s).to_string(), target.vertex(t).to_string()])
            .collect();
        Self {
            cost: result.cost,
            exhaustive: result.exhaustive,
            operations,
            mapping,
            stats: result.stats,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.exhaustive { "optimal" } else { "time limit reached" };
        writeln!(f, "edit distance: {} ({status})", self.cost)?;
        for entry in &self.operations {
            writeln!(f, "  {}", entry.description)?;
        }
        Ok(())
    }
}
