//! Spec §8, scenario E: a single seed covers the whole grid under a
//! coverage-threshold termination strategy.
use graph_salience::expander::{CoverageThreshold, ExpanderConfig, SeedExpander};
use graph_salience::testing::generate_grid_graph;
use graph_types::{NodeId, Result};

#[test]
fn single_seed_covers_a_four_by_four_grid() -> Result<()> {
    let _ = env_logger::try_init();
    let g = generate_grid_graph(4, 4);
    let expander = SeedExpander::new(&g);
    let mut config = ExpanderConfig::default();
    config.termination = Box::new(CoverageThreshold {
        threshold: 0.8,
        min_iterations: 10,
    });

    let result = expander.expand(&[NodeId::from("1,1")], &config)?;

    assert_eq!(result.sampled_nodes.len(), 16);
    assert!(result.stats.iterations <= 16);
    Ok(())
}
