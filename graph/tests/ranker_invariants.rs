//! End-to-end path ranker invariants (spec §8, items 9-18), driven with
//! hand-constructed [`MICache`] overrides so each test pins exact edge MI
//! values rather than depending on a particular MI strategy's output.
use graph_salience::graph_view::SimpleGraph;
use graph_salience::mi::MICache;
use graph_salience::model::Edge;
use graph_salience::ranker::{PathRanker, PathRankingConfig, TraversalMode};
use graph_salience::testing::{generate_chain_graph, generate_complete_graph, generate_diamond_graph};
use graph_types::{EdgeId, NodeId, Result};
use hashbrown::HashMap;

fn cache_from(pairs: &[(&str, f64)]) -> MICache {
    let mut values = HashMap::new();
    for (id, value) in pairs {
        values.insert(EdgeId::from(*id), *value);
    }
    MICache::from_values(values)
}

#[test]
fn geometric_mean_matches_the_log_space_formula() -> Result<()> {
    let g = generate_chain_graph(false, 4);
    let cache = cache_from(&[("e0", 0.2), ("e1", 0.5), ("e2", 0.8)]);
    let config = PathRankingConfig::default();
    let best = PathRanker::new(&g, &cache)
        .get_best_path(&NodeId::from("0"), &NodeId::from("3"), &config)?
        .unwrap();

    let epsilon = config.epsilon;
    let mean_log = [0.2, 0.5, 0.8]
        .iter()
        .map(|v| (v + epsilon).ln())
        .sum::<f64>()
        / 3.0;
    assert!((best.geometric_mean_mi - mean_log.exp()).abs() < 1e-4);
    Ok(())
}

#[test]
fn geometric_mean_is_bounded_by_min_and_max_edge_mi() -> Result<()> {
    let g = generate_chain_graph(false, 4);
    let cache = cache_from(&[("e0", 0.1), ("e1", 0.9), ("e2", 0.5)]);
    let best = PathRanker::new(&g, &cache)
        .get_best_path(&NodeId::from("0"), &NodeId::from("3"), &PathRankingConfig::default())?
        .unwrap();

    assert!(best.geometric_mean_mi >= 0.1 - 1e-6);
    assert!(best.geometric_mean_mi <= 0.9 + 1e-6);
    Ok(())
}

#[test]
fn increasing_a_single_edge_mi_strictly_increases_score() -> Result<()> {
    let g = generate_chain_graph(false, 3);
    let config = PathRankingConfig::default();

    let low = cache_from(&[("e0", 0.2), ("e1", 0.3)]);
    let high = cache_from(&[("e0", 0.2), ("e1", 0.6)]);

    let low_best = PathRanker::new(&g, &low)
        .get_best_path(&NodeId::from("0"), &NodeId::from("2"), &config)?
        .unwrap();
    let high_best = PathRanker::new(&g, &high)
        .get_best_path(&NodeId::from("0"), &NodeId::from("2"), &config)?
        .unwrap();

    assert!(high_best.score > low_best.score);
    Ok(())
}

#[test]
fn duplicating_a_uniform_path_leaves_score_unchanged_at_lambda_zero() -> Result<()> {
    // The diamond's two branches (A-B-D and A-C-D) are both length 2; with
    // uniform MI on every edge they must tie exactly when lambda is zero.
    let g = generate_diamond_graph();
    let cache = cache_from(&[("E0", 0.5), ("E1", 0.5), ("E2", 0.5), ("E3", 0.5)]);
    let config = PathRankingConfig::default();

    let ranked = PathRanker::new(&g, &cache)
        .rank_paths(&NodeId::from("A"), &NodeId::from("D"), &config)?
        .unwrap();
    assert_eq!(ranked.len(), 2);
    assert!((ranked[0].score - ranked[1].score).abs() < 1e-9);
    assert!((ranked[0].geometric_mean_mi - 0.5).abs() < 1e-6);
    Ok(())
}

#[test]
fn length_penalty_matches_exp_formula_and_feeds_into_score() -> Result<()> {
    let g = generate_chain_graph(false, 3);
    let cache = cache_from(&[("e0", 1.0), ("e1", 1.0)]);
    let mut config = PathRankingConfig::default();
    config.lambda = 0.5;

    let best = PathRanker::new(&g, &cache)
        .get_best_path(&NodeId::from("0"), &NodeId::from("2"), &config)?
        .unwrap();

    let expected = (-0.5f64 * 2.0).exp();
    assert!((best.length_penalty.unwrap() - expected).abs() < 1e-6);
    assert!((best.score - expected).abs() < 1e-6);
    Ok(())
}

#[test]
fn length_penalty_is_undefined_when_lambda_is_zero() -> Result<()> {
    let g = generate_chain_graph(false, 3);
    let cache = cache_from(&[("e0", 1.0), ("e1", 1.0)]);
    let best = PathRanker::new(&g, &cache)
        .get_best_path(&NodeId::from("0"), &NodeId::from("2"), &PathRankingConfig::default())?
        .unwrap();
    assert!(best.length_penalty.is_none());
    Ok(())
}

#[test]
fn a_near_zero_mi_edge_drives_score_toward_epsilon() -> Result<()> {
    let g = generate_chain_graph(false, 3);
    let cache = cache_from(&[("e0", 0.9), ("e1", 0.0)]);
    let best = PathRanker::new(&g, &cache)
        .get_best_path(&NodeId::from("0"), &NodeId::from("2"), &PathRankingConfig::default())?
        .unwrap();
    assert!(best.score < 0.01);
    Ok(())
}

#[test]
fn equal_length_paths_order_by_product_of_mi() -> Result<()> {
    let g = generate_diamond_graph();
    // A-B-D: 0.8 * 0.6 = 0.48; A-C-D: 0.4 * 0.9 = 0.36.
    let cache = cache_from(&[("E0", 0.8), ("E1", 0.4), ("E2", 0.6), ("E3", 0.9)]);
    let ranked = PathRanker::new(&g, &cache)
        .rank_paths(&NodeId::from("A"), &NodeId::from("D"), &PathRankingConfig::default())?
        .unwrap();

    assert_eq!(ranked.len(), 2);
    assert_eq!(
        ranked[0].path.nodes,
        vec![NodeId::from("A"), NodeId::from("B"), NodeId::from("D")]
    );
    Ok(())
}

#[test]
fn ranked_output_is_sorted_descending_and_truncated() -> Result<()> {
    let g = generate_complete_graph(false, 5);
    let mut values = HashMap::new();
    for i in 0..10 {
        values.insert(EdgeId::from(format!("e{i}")), 0.1 * (i as f64 + 1.0));
    }
    let cache = MICache::from_values(values);

    let mut config = PathRankingConfig::default();
    config.shortest_only = false;
    config.max_length = Some(2);
    config.max_paths = 2;

    let ranked = PathRanker::new(&g, &cache)
        .rank_paths(&NodeId::from("0"), &NodeId::from("4"), &config)?
        .unwrap();
    assert!(ranked.len() <= 2);
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    Ok(())
}

#[test]
fn directed_mode_never_traverses_against_an_edges_stored_direction() -> Result<()> {
    let mut g = SimpleGraph::new(true);
    g.add_edge(Edge::new("e0", "a", "b"));
    g.add_edge(Edge::new("e1", "b", "c"));
    let cache = cache_from(&[("e0", 0.5), ("e1", 0.5)]);

    let mut config = PathRankingConfig::default();
    config.traversal_mode = TraversalMode::Directed;

    let backward = PathRanker::new(&g, &cache).rank_paths(&NodeId::from("c"), &NodeId::from("a"), &config)?;
    assert!(backward.is_none());

    let forward = PathRanker::new(&g, &cache)
        .rank_paths(&NodeId::from("a"), &NodeId::from("c"), &config)?
        .unwrap();
    assert_eq!(forward.len(), 1);
    Ok(())
}

#[test]
fn self_path_scores_one_with_no_edges() -> Result<()> {
    let g = generate_chain_graph(false, 3);
    let cache = cache_from(&[("e0", 0.5), ("e1", 0.5)]);
    let best = PathRanker::new(&g, &cache)
        .get_best_path(&NodeId::from("1"), &NodeId::from("1"), &PathRankingConfig::default())?
        .unwrap();
    assert_eq!(best.score, 1.0);
    assert!(best.edge_mi_values.is_empty());
    Ok(())
}

#[test]
fn missing_endpoint_is_invalid_input() {
    let g = generate_chain_graph(false, 3);
    let cache = cache_from(&[("e0", 0.5), ("e1", 0.5)]);
    let err = PathRanker::new(&g, &cache)
        .rank_paths(&NodeId::from("ghost"), &NodeId::from("1"), &PathRankingConfig::default())
        .unwrap_err();
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn unreachable_target_is_an_empty_result_not_an_error() -> Result<()> {
    let mut g = generate_chain_graph(false, 3);
    g.add_node(graph_salience::model::Node::new("island"));
    let cache = cache_from(&[("e0", 0.5), ("e1", 0.5)]);
    let ranked = PathRanker::new(&g, &cache).rank_paths(
        &NodeId::from("0"),
        &NodeId::from("island"),
        &PathRankingConfig::default(),
    )?;
    assert!(ranked.is_none());
    Ok(())
}
