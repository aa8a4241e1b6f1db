//! Best-first branch-and-bound over partial mappings.
//!
//! Nodes are partial mappings of a prefix of the source order. Expanding a
//! node solves one assignment problem over the unmapped vertices: the best
//! assignment's first row gives the primary child, the ranked alternatives
//! for that row become a lazily pulled sibling stream, and every assignment
//! completes to a full mapping that is scored exactly to tighten the upper
//! bound.

mod heuristics;
mod node;
mod siblings;

pub use heuristics::LowerBoundEstimator;

use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::assignment::HungarianSolver;
use crate::config::SearchConfig;
use crate::cost::{editorial_cost, editorial_cost_only};
use crate::edit::EditOperation;
use crate::error::GedError;
use crate::graph::{Graph, VertexId};
use crate::mapping::Mapping;
use crate::oracle::FeasibilityOracle;

use node::SearchNode;
use siblings::{Candidate, Expansion, SiblingStream};

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub popped: u64,
    /// Nodes discarded because their bound reached the upper bound
    pub pruned: u64,
    pub pushed: u64,
    pub sibling_pulls: u64,
    pub expansions: u64,
    pub incumbent_updates: u64,
}

/// Best full mapping found, with its exact cost and edit script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GedResult {
    pub cost: u32,
    pub operations: Vec<EditOperation>,
    pub mapping: Mapping,
    pub stats: SearchStats,
    /// False if the time limit stopped the search before the queue drained.
    pub exhaustive: bool,
}

/// Builder for one edit distance search between two equally sized graphs.
///
/// ```
/// use ged_search::{AllowAll, GedSearch, Graph, Vertex};
///
/// let mut source = Graph::new();
/// source.add_vertex(Vertex::new("Object"));
/// let mut target = Graph::new();
/// target.add_vertex(Vertex::new("Interface"));
///
/// let result = GedSearch::new(&source, &target, &AllowAll).run().unwrap();
/// assert_eq!(result.cost, 1);
/// ```
pub struct GedSearch<'a, O: ?Sized> {
    source: &'a Graph,
    target: &'a Graph,
    oracle: &'a O,
    start: Mapping,
    source_order: Option<Vec<VertexId>>,
    target_order: Option<Vec<VertexId>>,
    config: SearchConfig,
}

impl<'a, O: FeasibilityOracle + ?Sized> GedSearch<'a, O> {
    #[must_use]
    pub fn new(source: &'a Graph, target: &'a Graph, oracle: &'a O) -> Self {
        Self {
            source,
            target,
            oracle,
            start: Mapping::new(),
            source_order: None,
            target_order: None,
            config: SearchConfig::default(),
        }
    }

    /// Seeds the search with a fixed partial mapping. Its sources are mapped
    /// first, in mapping order.
    #[must_use]
    pub fn start_mapping(mut self, mapping: Mapping) -> Self {
        self.start = mapping;
        self
    }

    /// Order in which source vertices are mapped, arena order by default.
    #[must_use]
    pub fn source_order(mut self, order: Vec<VertexId>) -> Self {
        self.source_order = Some(order);
        self
    }

    /// Column order of the target vertices, arena order by default.
    #[must_use]
    pub fn target_order(mut self, order: Vec<VertexId>) -> Self {
        self.target_order = Some(order);
        self
    }

    #[must_use]
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the search to completion or until the time limit.
    ///
    /// # Errors
    ///
    /// Fails on invalid input (size mismatch, bad orders, bad start
    /// mapping), when the time limit passes before any full mapping was
    /// scored, or if no feasible full mapping exists.
    pub fn run(self) -> Result<GedResult, GedError> {
        let (sources, targets) = self.prepare()?;
        info!(
            "starting edit distance search: {} vertices, {} source edges, {} target edges, {} pre-mapped",
            sources.len(),
            self.source.edge_count(),
            self.target.edge_count(),
            self.start.len()
        );

        let search = Search {
            source: self.source,
            target: self.target,
            estimator: LowerBoundEstimator::new(self.source, self.target, self.oracle),
            config: self.config,
            sources,
            targets,
            queue: BinaryHeap::new(),
            incumbent: None,
            stats: SearchStats::default(),
            sequence: 0,
        };
        let result = search.run(self.start)?;

        info!(
            "search complete: cost {}, {} popped, {} pruned, {} expansions, exhaustive: {}",
            result.cost,
            result.stats.popped,
            result.stats.pruned,
            result.stats.expansions,
            result.exhaustive
        );
        Ok(result)
    }

    /// Validates the input and returns the effective source and target orders.
    fn prepare(&self) -> Result<(Vec<VertexId>, Vec<VertexId>), GedError> {
        let (source_len, target_len) = (self.source.vertex_count(), self.target.vertex_count());
        if source_len != target_len {
            return Err(GedError::SizeMismatch {
                source_len,
                target_len,
            });
        }

        let source_order = self
            .source_order
            .clone()
            .unwrap_or_else(|| self.source.vertex_ids().collect());
        check_permutation("source", &source_order, self.source)?;
        let target_order = self
            .target_order
            .clone()
            .unwrap_or_else(|| self.target.vertex_ids().collect());
        check_permutation("target", &target_order, self.target)?;
        self.check_start_mapping()?;

        let mut sources = self.start.sources().to_vec();
        sources.extend(
            source_order
                .into_iter()
                .filter(|&v| !self.start.contains_source(v)),
        );
        Ok((sources, target_order))
    }

    fn check_start_mapping(&self) -> Result<(), GedError> {
        for (s, t) in self.start.pairs() {
            if !self.source.contains(s) {
                return Err(GedError::InvalidStartMapping(format!(
                    "unknown source vertex {s}"
                )));
            }
            if !self.target.contains(t) {
                return Err(GedError::InvalidStartMapping(format!(
                    "unknown target vertex {t}"
                )));
            }
            if !self.oracle.mapping_possible(s, t) {
                return Err(GedError::InvalidStartMapping(format!(
                    "pair {s} -> {t} is infeasible"
                )));
            }
        }
        Ok(())
    }
}

fn check_permutation(side: &'static str, order: &[VertexId], graph: &Graph) -> Result<(), GedError> {
    if order.len() != graph.vertex_count() {
        return Err(GedError::invalid_order(
            side,
            format!("expected {} vertices, got {}", graph.vertex_count(), order.len()),
        ));
    }
    let mut seen = HashSet::with_capacity(order.len());
    for &v in order {
        if !graph.contains(v) {
            return Err(GedError::invalid_order(side, format!("unknown vertex {v}")));
        }
        if !seen.insert(v) {
            return Err(GedError::invalid_order(side, format!("vertex {v} listed twice")));
        }
    }
    Ok(())
}

struct Incumbent {
    cost: u32,
    mapping: Mapping,
    operations: Vec<EditOperation>,
}

/// State of one running search. Owned by a single `run` call.
struct Search<'a, O: ?Sized> {
    source: &'a Graph,
    target: &'a Graph,
    estimator: LowerBoundEstimator<'a, O>,
    config: SearchConfig,
    /// Effective source order, start mapping first
    sources: Vec<VertexId>,
    targets: Vec<VertexId>,
    queue: BinaryHeap<SearchNode>,
    incumbent: Option<Incumbent>,
    stats: SearchStats,
    sequence: u64,
}

impl<O: FeasibilityOracle + ?Sized> Search<'_, O> {
    fn run(mut self, start: Mapping) -> Result<GedResult, GedError> {
        let started = Instant::now();
        let size = self.sources.len();
        let mut exhaustive = true;

        if start.len() == size {
            self.offer(start);
        } else {
            let level = start.len();
            let cost = editorial_cost_only(&start, self.source, self.target);
            self.push(start, level, f64::from(cost), None);
        }

        while let Some(node) = self.queue.pop() {
            self.stats.popped += 1;
            if self.config.deadline_passed(started.elapsed()) {
                debug!(
                    "time limit reached after {} pops, {} nodes left in queue",
                    self.stats.popped,
                    self.queue.len()
                );
                exhaustive = false;
                break;
            }
            if self.config.reports_progress_at(self.stats.popped) {
                debug!(
                    "search progress: {} popped, {} queued, upper bound {:?}",
                    self.stats.popped,
                    self.queue.len(),
                    self.incumbent.as_ref().map(|best| best.cost)
                );
            }

            if node.lower_bound >= self.upper_bound() {
                trace!("pruned level {} node with bound {}", node.level, node.lower_bound);
                self.stats.pruned += 1;
                continue;
            }

            let SearchNode {
                mapping,
                level,
                siblings,
                ..
            } = node;
            if let Some(stream) = siblings {
                self.pull_sibling(level, stream);
            }
            if level < size {
                self.expand(&mapping, level);
            }
        }

        let Some(best) = self.incumbent else {
            return Err(if exhaustive {
                GedError::SearchExhausted
            } else {
                GedError::DeadlineExceeded
            });
        };
        Ok(GedResult {
            cost: best.cost,
            operations: best.operations,
            mapping: best.mapping,
            stats: self.stats,
            exhaustive,
        })
    }

    fn upper_bound(&self) -> f64 {
        self.incumbent
            .as_ref()
            .map_or(f64::INFINITY, |best| f64::from(best.cost))
    }

    /// Maps the next source vertex: pushes the primary child with its
    /// sibling stream and scores the completed assignment.
    #[contracts::requires(parent.len() == level, "mapping size must equal the search level")]
    fn expand(&mut self, parent: &Mapping, level: usize) {
        self.stats.expansions += 1;
        let pending = self.sources[level..].to_vec();
        let available: Vec<VertexId> = self
            .targets
            .iter()
            .copied()
            .filter(|&t| !parent.contains_target(t))
            .collect();

        let costs = self.estimator.cost_matrix(&pending, &available, parent);
        let mut solver = HungarianSolver::new(costs);
        let best = solver.solve();
        let parent_cost = editorial_cost_only(parent, self.source, self.target);
        let expansion = Expansion::new(parent.clone(), parent_cost, pending, available);

        let Some(child) = expansion.candidate(solver.costs(), &best) else {
            trace!("level {}: no feasible assignment", level);
            return;
        };
        if child.lower_bound >= self.upper_bound() {
            self.stats.pruned += 1;
            return;
        }
        let Candidate {
            mapping,
            lower_bound,
            full,
        } = child;
        self.push(
            mapping,
            level + 1,
            lower_bound,
            Some(SiblingStream::new(expansion, solver)),
        );
        self.offer(full);
    }

    /// Pulls the next alternative at `level` and hands the stream to it.
    fn pull_sibling(&mut self, level: usize, mut stream: SiblingStream) {
        self.stats.sibling_pulls += 1;
        let Some(sibling) = stream.next() else {
            return;
        };
        if sibling.lower_bound >= self.upper_bound() {
            self.stats.pruned += 1;
            return;
        }
        self.push(sibling.mapping, level, sibling.lower_bound, Some(stream));
        self.offer(sibling.full);
    }

    fn push(
        &mut self,
        mapping: Mapping,
        level: usize,
        lower_bound: f64,
        siblings: Option<SiblingStream>,
    ) {
        trace!("push level {} node with bound {}", level, lower_bound);
        let sequence = self.sequence;
        self.sequence += 1;
        self.stats.pushed += 1;
        self.queue
            .push(SearchNode::new(mapping, level, lower_bound, sequence, siblings));
    }

    /// Scores a full mapping and keeps it if it beats the incumbent.
    #[contracts::requires(full.len() == self.sources.len(), "only full mappings are scored")]
    fn offer(&mut self, full: Mapping) {
        let cost = editorial_cost_only(&full, self.source, self.target);
        if self.incumbent.as_ref().is_some_and(|best| best.cost <= cost) {
            return;
        }
        let (cost, operations) = editorial_cost(&full, self.source, self.target);
        debug!(
            "new upper bound {} after {} pops ({} queued)",
            cost,
            self.stats.popped,
            self.queue.len()
        );
        self.stats.incumbent_updates += 1;
        self.incumbent = Some(Incumbent {
            cost,
            mapping: full,
            operations,
        });
    }
}
