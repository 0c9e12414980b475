//! The seed-bounded degree-prioritised expander (spec §4.3): grows one
//! frontier per seed in lock-step rounds, each round popping every
//! frontier's lowest-priority candidate and discovering its unvisited
//! neighbors, until either every frontier pair has met or exhausted its
//! component (multi-seed), a coverage criterion fires (single-seed), or the
//! hard `N · |V|` iteration cap is reached.
mod config;
mod frontier;

pub use config::{CoverageThreshold, ExpanderConfig, N1HandlingStrategy};

use crate::graph_view::GraphView;
use crate::model::Path;
use frontier::FrontierState;
use graph_types::{CoreError, EdgeId, NodeId, Result};
use hashbrown::HashSet;

/// Diagnostics about a completed expansion run. Extensible: spec §6 leaves
/// `stats` open beyond `iterations` ("`{ iterations, ... }`").
#[derive(Debug, Clone, Default)]
pub struct ExpanderStats {
    pub iterations: usize,
}

/// The full output of [`SeedExpander::expand`] (spec §4.3/§6).
#[derive(Debug, Clone)]
pub struct ExpanderResult {
    pub sampled_nodes: HashSet<NodeId>,
    /// Vertex-disjoint meeting paths between seed pairs. Always empty for a
    /// single seed.
    pub paths: Vec<Path>,
    pub stats: ExpanderStats,
}

/// Every step an edge offers out of `node`, direction-agnostic: the
/// expander consumes the graph "through a narrow neighbor/degree interface"
/// (spec §4.3), with no traversal-direction axis of its own.
fn incident_steps(graph: &dyn GraphView, node: &NodeId) -> Result<Vec<(NodeId, EdgeId)>> {
    let mut steps = Vec::new();
    for edge in graph.get_outgoing_edges(node)? {
        if let Some(other) = edge.other_endpoint(node) {
            steps.push((other.clone(), edge.id.clone()));
        }
    }
    if graph.is_directed() {
        for edge in graph.get_incoming_edges(node)? {
            if let Some(other) = edge.other_endpoint(node) {
                steps.push((other.clone(), edge.id.clone()));
            }
        }
    }
    Ok(steps)
}

/// Reconstructs the path `a.seed -> meet -> b.seed` from two frontiers'
/// parent pointers. Returns `None` if the two half-paths share a vertex
/// other than `meet` itself, which would violate the no-repeated-vertex
/// invariant every [`Path`] must satisfy.
fn reconstruct_meeting_path(a: &FrontierState, b: &FrontierState, meet: &NodeId) -> Option<Path> {
    let (a_nodes, a_edges) = a.path_to(meet);
    let (b_nodes, b_edges) = b.path_to(meet);

    let mut nodes = a_nodes;
    nodes.extend(b_nodes.iter().rev().skip(1).cloned());

    let mut edges = a_edges;
    edges.extend(b_edges.iter().rev().cloned());

    let mut seen = HashSet::with_capacity(nodes.len());
    for node in &nodes {
        if !seen.insert(node.clone()) {
            return None;
        }
    }

    Some(Path { nodes, edges })
}

/// Runs seed-bounded expansion over a borrowed [`GraphView`].
pub struct SeedExpander<'a> {
    graph: &'a dyn GraphView,
}

impl<'a> SeedExpander<'a> {
    pub fn new(graph: &'a dyn GraphView) -> Self {
        SeedExpander { graph }
    }

    /// `deg(v) / (nodeWeight(v) + ε)` — the min-heap key a candidate would be
    /// pushed with right now. Exposed beyond the expansion loop itself so
    /// callers (and tests) can inspect the degeneracy spec §8 requires:
    /// on an unweighted graph this collapses to raw degree.
    pub fn priority(&self, node: &NodeId, config: &ExpanderConfig) -> Result<f64> {
        let degree = self.graph.get_degree(node)? as f64;
        Ok(degree / ((config.node_weight)(node) + config.epsilon))
    }

    /// Grows one frontier per entry in `seeds`, per spec §4.3's algorithm.
    /// `InvalidInput` if `seeds` is empty or any seed id is absent from the
    /// graph.
    pub fn expand(&self, seeds: &[NodeId], config: &ExpanderConfig) -> Result<ExpanderResult> {
        if seeds.is_empty() {
            return Err(CoreError::empty_seed_set());
        }
        for seed in seeds {
            if self.graph.get_node(seed).is_none() {
                return Err(CoreError::missing_node(seed));
            }
        }

        let node_count = self.graph.get_node_count();
        let seed_count = seeds.len();
        let hard_cap = config
            .iteration_multiplier
            .max(1)
            .saturating_mul(seed_count)
            .saturating_mul(node_count.max(1));

        let mut frontiers: Vec<FrontierState> = Vec::with_capacity(seed_count);
        for seed in seeds {
            let priority = self.priority(seed, config)?;
            frontiers.push(FrontierState::new(seed.clone(), priority));
        }

        let mut paths = Vec::new();
        let mut emitted_meetings: HashSet<(usize, usize, NodeId)> = HashSet::new();
        let mut iterations = 0usize;

        loop {
            if frontiers.iter().all(|f| f.is_empty()) {
                break;
            }
            if iterations >= hard_cap {
                log::warn!(
                    "seed expander: hit hard iteration cap ({hard_cap}) before any other termination condition fired"
                );
                break;
            }

            for frontier in frontiers.iter_mut() {
                let current = match frontier.pop() {
                    Some(node) => node,
                    None => continue,
                };
                for (next, edge_id) in incident_steps(self.graph, &current)? {
                    if frontier.visited.contains(&next) {
                        continue;
                    }
                    let priority = self.priority(&next, config)?;
                    frontier.discover(next, current.clone(), edge_id, priority);
                }
            }
            iterations += 1;

            log::debug!(
                "seed expander: round {} frontier sizes = {:?}",
                iterations,
                frontiers.iter().map(FrontierState::visited_count).collect::<Vec<_>>()
            );

            if seed_count >= 2 {
                let mut all_resolved = true;
                for i in 0..seed_count {
                    for j in (i + 1)..seed_count {
                        let meeting_nodes: Vec<NodeId> = frontiers[i]
                            .visited
                            .intersection(&frontiers[j].visited)
                            .cloned()
                            .collect();
                        if meeting_nodes.is_empty() {
                            if !(frontiers[i].is_empty() && frontiers[j].is_empty()) {
                                all_resolved = false;
                            }
                            continue;
                        }
                        for node in meeting_nodes {
                            if emitted_meetings.insert((i, j, node.clone())) {
                                if let Some(path) = reconstruct_meeting_path(&frontiers[i], &frontiers[j], &node) {
                                    paths.push(path);
                                }
                            }
                        }
                    }
                }
                if all_resolved {
                    break;
                }
            } else if config.termination.should_terminate(
                frontiers[0].visited_count(),
                node_count,
                iterations,
            ) {
                break;
            }
        }

        let mut sampled_nodes = HashSet::new();
        for frontier in &frontiers {
            sampled_nodes.extend(frontier.visited.iter().cloned());
        }

        Ok(ExpanderResult {
            sampled_nodes,
            paths,
            stats: ExpanderStats { iterations },
        })
    }
}
