//! Spec §8, scenario B: a weak link dominates the geometric mean.
use graph_salience::graph_view::SimpleGraph;
use graph_salience::mi::MICache;
use graph_salience::model::Edge;
use graph_salience::ranker::{PathRanker, PathRankingConfig};
use graph_types::{EdgeId, NodeId, Result};
use hashbrown::HashMap;

#[test]
fn weak_link_drives_the_chain_score_down_to_its_geometric_mean() -> Result<()> {
    let mut g = SimpleGraph::new(false);
    g.add_edge(Edge::new("E0", "A", "B"));
    g.add_edge(Edge::new("E1", "B", "C"));

    let mut values = HashMap::new();
    values.insert(EdgeId::from("E0"), 0.9);
    values.insert(EdgeId::from("E1"), 0.01);
    let cache = MICache::from_values(values);

    let best = PathRanker::new(&g, &cache)
        .get_best_path(&NodeId::from("A"), &NodeId::from("C"), &PathRankingConfig::default())?
        .unwrap();

    assert_eq!(best.path.len(), 2);
    assert!((best.geometric_mean_mi - 0.0949).abs() < 1e-3);
    assert!((best.score - 0.0949).abs() < 1e-3);
    Ok(())
}
