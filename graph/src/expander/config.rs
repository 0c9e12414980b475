//! Seed-bounded expander configuration (spec §4.3).
use graph_types::{NodeId, DEFAULT_EPSILON};

/// Decides when a single-seed expansion has covered "enough" of the graph
/// to stop, since a lone seed has no second frontier to meet.
pub trait N1HandlingStrategy: Send + Sync {
    fn should_terminate(&self, visited: usize, node_count: usize, iteration: usize) -> bool;
}

/// Stops once the fraction of nodes visited reaches `threshold`, provided
/// at least `min_iterations` rounds have already run.
pub struct CoverageThreshold {
    pub threshold: f64,
    pub min_iterations: usize,
}

impl Default for CoverageThreshold {
    fn default() -> Self {
        CoverageThreshold {
            threshold: 0.5,
            min_iterations: 0,
        }
    }
}

impl N1HandlingStrategy for CoverageThreshold {
    fn should_terminate(&self, visited: usize, node_count: usize, iteration: usize) -> bool {
        if node_count == 0 {
            return true;
        }
        iteration >= self.min_iterations && (visited as f64 / node_count as f64) >= self.threshold
    }
}

pub struct ExpanderConfig {
    /// `nodeWeight(v)` in the `deg(v) / (nodeWeight(v) + ε)` priority
    /// function. Defaults to `1.0` for every node (priority reduces to raw
    /// degree).
    pub node_weight: Box<dyn Fn(&NodeId) -> f64 + Send + Sync>,
    pub epsilon: f64,
    /// Consulted only when exactly one seed is supplied.
    pub termination: Box<dyn N1HandlingStrategy>,
    /// Hard iteration cap is `iteration_multiplier * |V|`, independent of
    /// any frontier-meeting or coverage termination.
    pub iteration_multiplier: usize,
}

impl Default for ExpanderConfig {
    fn default() -> Self {
        ExpanderConfig {
            node_weight: Box::new(|_| 1.0),
            epsilon: DEFAULT_EPSILON,
            termination: Box::new(CoverageThreshold::default()),
            iteration_multiplier: 1,
        }
    }
}
