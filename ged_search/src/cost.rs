//! Exact editorial cost of a (partial or full) mapping.
//!
//! A partial mapping induces a subgraph on each side: only vertices in the
//! mapping and edges with both endpoints mapped are considered. Growing the
//! mapping can only add terms, so the cost never decreases along a search
//! path.

use crate::edit::EditOperation;
use crate::graph::Graph;
use crate::mapping::Mapping;

/// Scores `mapping` and returns the cost with the matching edit script.
#[must_use]
pub fn editorial_cost(mapping: &Mapping, source: &Graph, target: &Graph) -> (u32, Vec<EditOperation>) {
    let mut operations = Vec::new();
    let cost = evaluate(mapping, source, target, Some(&mut operations));
    (cost, operations)
}

/// Cost only; no edit operations are materialized.
#[must_use]
pub fn editorial_cost_only(mapping: &Mapping, source: &Graph, target: &Graph) -> u32 {
    evaluate(mapping, source, target, None)
}

fn evaluate(
    mapping: &Mapping,
    source: &Graph,
    target: &Graph,
    mut operations: Option<&mut Vec<EditOperation>>,
) -> u32 {
    let mut cost = 0;
    let mut emit = |op: EditOperation| {
        cost += 1;
        if let Some(ops) = operations.as_deref_mut() {
            ops.push(op);
        }
    };

    // Vertex relabeling
    for (s, t) in mapping.pairs() {
        let (sv, tv) = (source.vertex(s), target.vertex(t));
        if sv.same_content(tv) {
            continue;
        }
        let op = if sv.is_isolated() {
            EditOperation::InsertVertex { source: s, target: t }
        } else if tv.is_isolated() {
            EditOperation::DeleteVertex { source: s, target: t }
        } else {
            EditOperation::ChangeVertex { source: s, target: t }
        };
        emit(op);
    }

    // Edge deletion or relabeling
    for (source_edge, edge) in source.edges() {
        let (Some(t1), Some(t2)) = (mapping.target_for(edge.one()), mapping.target_for(edge.two()))
        else {
            continue;
        };
        match target.edge_id_between(t1, t2) {
            None => emit(EditOperation::DeleteEdge { source_edge }),
            Some(target_edge) if target.edge(target_edge).label() != edge.label() => {
                emit(EditOperation::ChangeEdge {
                    source_edge,
                    target_edge,
                });
            }
            Some(_) => {}
        }
    }

    // Edge insertion
    for (target_edge, edge) in target.edges() {
        let (Some(s1), Some(s2)) = (mapping.source_for(edge.one()), mapping.source_for(edge.two()))
        else {
            continue;
        };
        if source.edge_between(s1, s2).is_none() {
            emit(EditOperation::InsertEdge { target_edge });
        }
    }

    cost
}
