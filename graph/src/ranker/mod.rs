//! The path ranker (spec §4.2): enumerates candidate paths between two
//! nodes, scores each against a precomputed [`crate::mi::MICache`] by the
//! geometric mean of its edges' MI values, and returns them sorted best
//! first.
mod config;
mod enumerate;
mod score;

pub use config::{PathRankingConfig, TraversalMode, MAX_PATH_CAP};
pub use score::{geometric_mean, length_penalty, score_path, WeightMode};

use crate::graph_view::GraphView;
use crate::mi::MICache;
use crate::model::RankedPath;
use graph_types::{CoreError, NodeId, Result};

/// Binds a graph and a built [`MICache`] together so repeated calls to
/// [`Self::rank_paths`] don't need to re-supply either.
pub struct PathRanker<'a> {
    graph: &'a dyn GraphView,
    mi_cache: &'a MICache,
}

impl<'a> PathRanker<'a> {
    pub fn new(graph: &'a dyn GraphView, mi_cache: &'a MICache) -> Self {
        PathRanker { graph, mi_cache }
    }

    /// Enumerates and scores every candidate path from `source` to `target`
    /// per `config`, returning them sorted by descending score. `Ok(None)`
    /// when `target` is unreachable from `source` (spec §4.2 step 4);
    /// `Err` when either id is missing from the graph.
    pub fn rank_paths(
        &self,
        source: &NodeId,
        target: &NodeId,
        config: &PathRankingConfig,
    ) -> Result<Option<Vec<RankedPath>>> {
        if self.graph.get_node(source).is_none() {
            return Err(CoreError::missing_node(source));
        }
        if self.graph.get_node(target).is_none() {
            return Err(CoreError::missing_node(target));
        }

        let candidates = if config.shortest_only {
            enumerate::all_shortest_paths(self.graph, source, target, config.max_paths, config.traversal_mode)?
        } else {
            enumerate::all_simple_paths(
                self.graph,
                source,
                target,
                config.max_length,
                config.max_paths,
                config.traversal_mode,
            )?
        };
        log::debug!(
            "path ranker: enumerator={} raw_candidates={}",
            if config.shortest_only { "shortest" } else { "bounded" },
            candidates.len()
        );

        if candidates.is_empty() {
            return Ok(None);
        }

        let mut ranked: Vec<RankedPath> = candidates
            .into_iter()
            .map(|path| score_path(path, self.graph, self.mi_cache, config))
            .collect();

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        ranked.truncate(config.max_paths);
        Ok(Some(ranked))
    }

    /// The single highest-scoring path from `source` to `target`, or `None`
    /// when unreachable.
    pub fn get_best_path(&self, source: &NodeId, target: &NodeId, config: &PathRankingConfig) -> Result<Option<RankedPath>> {
        let mut ranked = match self.rank_paths(source, target, config)? {
            Some(ranked) => ranked,
            None => return Ok(None),
        };
        Ok(if ranked.is_empty() {
            None
        } else {
            Some(ranked.remove(0))
        })
    }
}
