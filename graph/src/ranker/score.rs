//! Path scoring: geometric mean of per-edge MI values, computed in log-space
//! for numerical stability, with an optional length penalty and an optional
//! weight factor.
use super::config::PathRankingConfig;
use crate::graph_view::GraphView;
use crate::mi::MICache;
use crate::model::{Path, RankedPath};

/// How a path's aggregate edge weight (from [`PathRankingConfig`]'s weight
/// extractor) combines with the MI-based score (spec §4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightMode {
    /// Edge weights are ignored; `score == geometric_mean_mi * length_penalty`.
    None,
    /// `weightFactor = 1 / max(mean(w), ε)`.
    Divide,
    /// `weightFactor = exp(-mean(ln(w)))`.
    Multiplicative,
}

/// `exp(mean(ln(mi + ε)))` over `edge_mi_values`. An empty slice (a
/// zero-length, singleton path) scores `1.0`: a single node is perfectly
/// informative about itself.
pub fn geometric_mean(edge_mi_values: &[f64], epsilon: f64) -> f64 {
    if edge_mi_values.is_empty() {
        return 1.0;
    }
    let mean_log = edge_mi_values.iter().map(|v| (v + epsilon).ln()).sum::<f64>() / edge_mi_values.len() as f64;
    mean_log.exp()
}

/// `exp(-λk)` where `k` is the path length in edges. `λ <= 0` disables the
/// penalty (returns `1.0` unconditionally).
pub fn length_penalty(length: usize, lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return 1.0;
    }
    (-lambda * length as f64).exp()
}

/// Scores a single path: looks up each edge's cached MI value (falling back
/// to `epsilon` for an edge the cache has no entry for — can't happen for a
/// path produced by this crate's own enumerators, but a caller-constructed
/// `Path` might reference a stale edge), folds in the length penalty and any
/// weight factor, and returns the fully populated [`RankedPath`].
pub fn score_path(
    path: Path,
    graph: &dyn GraphView,
    mi_cache: &MICache,
    config: &PathRankingConfig,
) -> RankedPath {
    if path.len() == 0 {
        return RankedPath {
            path,
            score: 1.0,
            geometric_mean_mi: 1.0,
            edge_mi_values: Vec::new(),
            length_penalty: None,
            weight_factor: None,
        };
    }

    let epsilon = config.epsilon;
    let edge_mi_values: Vec<f64> = path
        .edges
        .iter()
        .map(|id| mi_cache.get(id).unwrap_or(epsilon))
        .collect();

    let gm = geometric_mean(&edge_mi_values, epsilon);
    let penalty = length_penalty(path.len(), config.lambda);
    let mut score = gm * penalty;

    let weight_factor = match config.weight_mode {
        WeightMode::None => None,
        WeightMode::Divide | WeightMode::Multiplicative => {
            let weights: Vec<f64> = path
                .edges
                .iter()
                .filter_map(|id| graph.get_edge(id))
                .map(|edge| config.extract_weight(edge).max(epsilon))
                .collect();
            let factor = match config.weight_mode {
                WeightMode::Divide => {
                    let mean = weights.iter().sum::<f64>() / weights.len().max(1) as f64;
                    1.0 / mean.max(epsilon)
                }
                WeightMode::Multiplicative => {
                    let mean_log =
                        weights.iter().map(|w| w.ln()).sum::<f64>() / weights.len().max(1) as f64;
                    (-mean_log).exp()
                }
                WeightMode::None => unreachable!(),
            };
            score *= factor;
            Some(factor)
        }
    };

    RankedPath {
        path,
        score,
        geometric_mean_mi: gm,
        edge_mi_values,
        length_penalty: if config.lambda > 0.0 { Some(penalty) } else { None },
        weight_factor,
    }
}
