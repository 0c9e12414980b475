//! Path ranker configuration (spec §4.2).
use crate::model::Edge;
use graph_types::{WeightT, DEFAULT_EPSILON};

pub use super::enumerate::MAX_PATH_CAP;
pub use super::score::WeightMode;

/// Whether traversal may follow an edge against its stored direction.
/// Independent of the graph's own directedness (spec §4.2): a directed
/// graph can still be queried in `Undirected` mode, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalMode {
    /// Only follow edges in their native source -> target direction.
    Directed,
    /// Also traverse an edge from its target back to its source.
    Undirected,
}

pub struct PathRankingConfig {
    pub traversal_mode: TraversalMode,
    /// `λ` in the `exp(-λk)` length penalty. `0.0` (the default) disables it.
    pub lambda: f64,
    pub weight_mode: WeightMode,
    /// Defaults to the edge payload's `weight`, falling back to `1.0` when
    /// absent, matching spec §4.2's documented default extractor.
    pub weight_extractor: Option<Box<dyn Fn(&Edge) -> Option<WeightT> + Send + Sync>>,
    /// Upper bound on the number of paths returned; further capped at
    /// [`MAX_PATH_CAP`] regardless of this value.
    pub max_paths: usize,
    /// Only consulted when `shortest_only` is `false`; unbounded when
    /// `None`.
    pub max_length: Option<usize>,
    /// `true` (the default): enumerate only minimum-length paths via the
    /// BFS backpointer DAG. `false`: enumerate all simple paths up to
    /// `max_length`, subject to the global [`MAX_PATH_CAP`].
    pub shortest_only: bool,
    pub epsilon: f64,
}

impl Default for PathRankingConfig {
    fn default() -> Self {
        PathRankingConfig {
            traversal_mode: TraversalMode::Undirected,
            lambda: 0.0,
            weight_mode: WeightMode::None,
            weight_extractor: None,
            max_paths: 10,
            max_length: None,
            shortest_only: true,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl PathRankingConfig {
    /// The effective weight extractor: the caller's override if supplied,
    /// else the edge's own `weight` field defaulting to `1.0` (spec §4.2).
    pub(crate) fn extract_weight(&self, edge: &Edge) -> WeightT {
        match &self.weight_extractor {
            Some(extractor) => extractor(edge).unwrap_or(1.0),
            None => edge.weight.unwrap_or(1.0),
        }
    }
}
