//! Spec §8, scenario A: diamond graph, hand-computed geometric means.
use graph_salience::mi::MICache;
use graph_salience::ranker::{PathRanker, PathRankingConfig};
use graph_salience::testing::generate_diamond_graph;
use graph_types::{EdgeId, NodeId, Result};
use hashbrown::HashMap;

#[test]
fn diamond_ranks_the_stronger_branch_first() -> Result<()> {
    let g = generate_diamond_graph();

    let mut values = HashMap::new();
    values.insert(EdgeId::from("E0"), 0.5);
    values.insert(EdgeId::from("E1"), 0.8);
    values.insert(EdgeId::from("E2"), 0.6);
    values.insert(EdgeId::from("E3"), 0.4);
    let cache = MICache::from_values(values);

    let config = PathRankingConfig::default();
    let ranked = PathRanker::new(&g, &cache)
        .rank_paths(&NodeId::from("A"), &NodeId::from("D"), &config)?
        .unwrap();

    assert_eq!(ranked.len(), 2);

    assert_eq!(
        ranked[0].path.nodes,
        vec![NodeId::from("A"), NodeId::from("C"), NodeId::from("D")]
    );
    assert!((ranked[0].geometric_mean_mi - 0.5657).abs() < 1e-3);

    assert_eq!(
        ranked[1].path.nodes,
        vec![NodeId::from("A"), NodeId::from("B"), NodeId::from("D")]
    );
    assert!((ranked[1].geometric_mean_mi - 0.5477).abs() < 1e-3);

    assert!(ranked[0].score > ranked[1].score);
    Ok(())
}
