//! The MI engine: builds a [`MICache`] by scoring every edge once, in
//! parallel (spec §5 — the one parallel stage in this crate, grounded on the
//! teacher's `rayon`-based centrality computations).
use super::cache::MICache;
use super::config::MIConfig;
use super::modifiers::*;
use super::strategies::*;
use crate::graph_view::GraphView;
use crate::model::Edge;
use graph_types::{EdgeId, NodeId, Result};
use hashbrown::{HashMap, HashSet};
use rayon::prelude::*;

/// Everything precomputed once, up front, and shared read-only across the
/// parallel per-edge pass. Building this is the only place that walks the
/// whole graph more than once.
struct BuildContext {
    neighbor_sets: HashMap<NodeId, HashSet<NodeId>>,
    degree: HashMap<NodeId, usize>,
    clustering: HashMap<NodeId, f64>,
    node_type_pair_counts: HashMap<(String, String), usize>,
    edge_type_counts: HashMap<String, usize>,
    distinct_edge_types: usize,
    heterogeneous_node_types: bool,
    density: f64,
    node_count: usize,
    edge_count: usize,
}

impl BuildContext {
    fn build(graph: &dyn GraphView, config: &MIConfig) -> Result<Self> {
        let nodes: Vec<&NodeId> = graph.get_all_nodes().map(|n| &n.id).collect();
        let node_count = nodes.len();

        let mut neighbor_sets: HashMap<NodeId, HashSet<NodeId>> = HashMap::with_capacity(node_count);
        let mut degree: HashMap<NodeId, usize> = HashMap::with_capacity(node_count);
        for id in &nodes {
            let neighbors: HashSet<NodeId> = graph.get_neighbors(id)?.cloned().collect();
            degree.insert((*id).clone(), graph.get_degree(id)?);
            neighbor_sets.insert((*id).clone(), neighbors);
        }

        let mut clustering: HashMap<NodeId, f64> = HashMap::with_capacity(node_count);
        for id in &nodes {
            let neighbors = &neighbor_sets[*id];
            let k = neighbors.len();
            if k < 2 {
                clustering.insert((*id).clone(), 0.0);
                continue;
            }
            let mut links = 0usize;
            let neighbor_vec: Vec<&NodeId> = neighbors.iter().collect();
            for i in 0..neighbor_vec.len() {
                for j in (i + 1)..neighbor_vec.len() {
                    if neighbor_sets[neighbor_vec[i]].contains(neighbor_vec[j]) {
                        links += 1;
                    }
                }
            }
            let possible = (k * (k - 1)) / 2;
            clustering.insert((*id).clone(), links as f64 / possible as f64);
        }

        let edges: Vec<&Edge> = graph.get_all_edges().collect();
        let edge_count = edges.len();

        let mut node_type_pair_counts: HashMap<(String, String), usize> = HashMap::new();
        let mut edge_type_counts: HashMap<String, usize> = HashMap::new();
        let mut distinct_node_types: HashSet<&str> = HashSet::new();

        for edge in &edges {
            if let Some(t) = &edge.edge_type {
                *edge_type_counts.entry(t.clone()).or_insert(0) += 1;
            }
            let source_type = graph.get_node(&edge.source).and_then(|n| n.node_type.as_deref());
            let target_type = graph.get_node(&edge.target).and_then(|n| n.node_type.as_deref());
            if let (Some(a), Some(b)) = (source_type, target_type) {
                distinct_node_types.insert(a);
                distinct_node_types.insert(b);
                let key = if a <= b {
                    (a.to_string(), b.to_string())
                } else {
                    (b.to_string(), a.to_string())
                };
                *node_type_pair_counts.entry(key).or_insert(0) += 1;
            }
        }

        let max_possible_edges = if graph.is_directed() {
            node_count.saturating_mul(node_count.saturating_sub(1))
        } else {
            (node_count.saturating_mul(node_count.saturating_sub(1))) / 2
        };
        let density = if max_possible_edges == 0 {
            0.0
        } else {
            edge_count as f64 / max_possible_edges as f64
        };

        Ok(BuildContext {
            neighbor_sets,
            degree,
            clustering,
            node_type_pair_counts,
            distinct_edge_types: edge_type_counts.len(),
            edge_type_counts,
            heterogeneous_node_types: distinct_node_types.len() > 1,
            density: config.density.unwrap_or(density),
            node_count,
            edge_count,
        })
    }

    fn degree_of(&self, id: &NodeId) -> usize {
        self.degree.get(id).copied().unwrap_or(0)
    }

    fn empty_set() -> HashSet<NodeId> {
        HashSet::new()
    }

    fn neighbors_of<'a>(&'a self, id: &NodeId, fallback: &'a HashSet<NodeId>) -> &'a HashSet<NodeId> {
        self.neighbor_sets.get(id).unwrap_or(fallback)
    }
}

/// Scores every edge in `graph` per spec §4.1's strategy precedence and
/// modifier composition, returning the completed, read-only cache.
pub struct MiEngine;

impl MiEngine {
    pub fn build(graph: &dyn GraphView, config: &MIConfig) -> Result<MICache> {
        let ctx = BuildContext::build(graph, config)?;
        let edges: Vec<&Edge> = graph.get_all_edges().collect();
        let empty = BuildContext::empty_set();

        let use_edge_types = config
            .use_edge_types
            .unwrap_or(ctx.distinct_edge_types > 1);

        log::debug!(
            "mi engine: building cache over {} edges ({} nodes); use_edge_types={} heterogeneous_node_types={} density={:.4}",
            ctx.edge_count,
            ctx.node_count,
            use_edge_types,
            ctx.heterogeneous_node_types,
            ctx.density,
        );

        let scored: Vec<(EdgeId, f64, Option<String>)> = edges
            .par_iter()
            .map(|edge| {
                let base = base_mi(edge, graph, &ctx, &empty, use_edge_types, config);
                let value = apply_modifiers(edge, graph, &ctx, base, config);
                let final_value = finalize(value, config.epsilon);
                if log::log_enabled!(log::Level::Trace) {
                    log::trace!("mi engine: edge {} base={:.6} final={:.6}", edge.id, base, final_value);
                }
                let layer = (config.inputs.layer_of)(edge);
                (edge.id.clone(), final_value, layer)
            })
            .collect();

        let mut values = HashMap::with_capacity(scored.len());
        let mut layers = HashMap::new();
        for (id, value, layer) in scored {
            if let Some(layer) = layer {
                layers.insert(id.clone(), layer);
            }
            values.insert(id, value);
        }

        Ok(MICache { values, layers })
    }
}

fn base_mi(
    edge: &Edge,
    graph: &dyn GraphView,
    ctx: &BuildContext,
    empty: &HashSet<NodeId>,
    use_edge_types: bool,
    config: &MIConfig,
) -> f64 {
    let epsilon = config.epsilon;

    if graph.get_node(&edge.source).is_none() || graph.get_node(&edge.target).is_none() {
        return epsilon;
    }

    if edge.is_hyperedge() {
        let mut endpoints = vec![edge.source.clone(), edge.target.clone()];
        endpoints.extend((config.inputs.hyperedge_extra_of)(edge));
        return hyperedge_mi(&endpoints, &ctx.neighbor_sets, epsilon);
    }

    let source_node = graph.get_node(&edge.source);
    let target_node = graph.get_node(&edge.target);

    let attrs = source_node
        .and_then(|n| (config.inputs.attributes_of)(n))
        .zip(target_node.and_then(|n| (config.inputs.attributes_of)(n)));
    if let Some((a, b)) = attrs {
        if !a.is_empty() && !b.is_empty() {
            return attribute_mi(&a, &b, epsilon);
        }
    }

    if ctx.heterogeneous_node_types {
        let types = source_node
            .and_then(|n| n.node_type.as_deref())
            .zip(target_node.and_then(|n| n.node_type.as_deref()));
        if let Some((a, b)) = types {
            let key = if a <= b {
                (a.to_string(), b.to_string())
            } else {
                (b.to_string(), a.to_string())
            };
            let count = ctx.node_type_pair_counts.get(&key).copied().unwrap_or(0);
            return rarity_score(count, ctx.edge_count, epsilon);
        }
    }

    if use_edge_types {
        if let Some(t) = &edge.edge_type {
            let count = ctx.edge_type_counts.get(t).copied().unwrap_or(0);
            return rarity_score(count, ctx.edge_count, epsilon);
        }
    }

    let neighbors_u = ctx.neighbors_of(&edge.source, empty);
    let neighbors_v = ctx.neighbors_of(&edge.target, empty);

    if config.use_adamic_adar {
        return adamic_adar(neighbors_u, neighbors_v, |w| ctx.degree_of(w), epsilon);
    }

    let jaccard_value = jaccard(neighbors_u, neighbors_v, epsilon);
    if config.use_density_normalization {
        return density_normalized_jaccard(jaccard_value, ctx.density, epsilon);
    }
    jaccard_value
}

fn apply_modifiers(edge: &Edge, graph: &dyn GraphView, ctx: &BuildContext, base: f64, config: &MIConfig) -> f64 {
    let mut value = base;

    let source_node = graph.get_node(&edge.source);
    let target_node = graph.get_node(&edge.target);

    value *= temporal_modifier(
        (config.inputs.timestamp_of)(edge),
        config.reference_time,
        config.temporal_decay,
    );
    value *= sign_modifier((config.inputs.sign_of)(edge), config.negative_penalty);
    value *= probability_modifier((config.inputs.probability_of)(edge));
    value *= community_modifier(
        source_node.and_then(|n| (config.inputs.community_of)(n)).as_ref(),
        target_node.and_then(|n| (config.inputs.community_of)(n)).as_ref(),
        config.community_boost,
    );

    let degree_u = ctx.degree_of(&edge.source);
    let degree_v = ctx.degree_of(&edge.target);

    if config.use_degree_based_penalty {
        value *= degree_penalty_modifier(degree_u, degree_v, config.degree_penalty_factor);
    }
    if config.use_idf_weighting {
        value *= idf_modifier(ctx.node_count, degree_u, degree_v, config.epsilon);
    }
    if config.use_edge_type_rarity {
        let edge_type_count = edge.edge_type.as_ref().map(|t| ctx.edge_type_counts.get(t).copied().unwrap_or(0));
        value *= edge_type_rarity_modifier(edge_type_count, ctx.edge_count, config.epsilon);
    }
    if config.use_clustering_penalty {
        let clustering_u = ctx.clustering.get(&edge.source).copied().unwrap_or(0.0);
        let clustering_v = ctx.clustering.get(&edge.target).copied().unwrap_or(0.0);
        value *= clustering_penalty_modifier(clustering_u, clustering_v, config.epsilon);
    }

    value
}

/// Final floor applied exactly once per edge: non-finite or non-positive
/// values collapse to `epsilon`, guaranteeing every cached value is finite
/// and strictly positive (spec invariant).
fn finalize(value: f64, epsilon: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        epsilon
    }
}
