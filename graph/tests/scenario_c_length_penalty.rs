//! Spec §8, scenario C: the exponential length penalty at lambda = 0.5.
use graph_salience::graph_view::SimpleGraph;
use graph_salience::mi::MICache;
use graph_salience::model::Edge;
use graph_salience::ranker::{PathRanker, PathRankingConfig};
use graph_types::{EdgeId, NodeId, Result};
use hashbrown::HashMap;

#[test]
fn uniform_mi_chain_pays_the_exp_length_penalty() -> Result<()> {
    let mut g = SimpleGraph::new(false);
    g.add_edge(Edge::new("E0", "A", "B"));
    g.add_edge(Edge::new("E1", "B", "C"));

    let mut values = HashMap::new();
    values.insert(EdgeId::from("E0"), 1.0);
    values.insert(EdgeId::from("E1"), 1.0);
    let cache = MICache::from_values(values);

    let mut config = PathRankingConfig::default();
    config.lambda = 0.5;

    let best = PathRanker::new(&g, &cache)
        .get_best_path(&NodeId::from("A"), &NodeId::from("C"), &config)?
        .unwrap();

    assert!((best.length_penalty.unwrap() - 0.3679).abs() < 1e-3);
    assert!((best.score - 0.3679).abs() < 1e-3);
    Ok(())
}
