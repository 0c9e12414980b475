//! Base MI formulas (spec §4.1). Every strategy returns a scalar that the
//! caller still has to run through [`crate::mi::finalize`] before caching —
//! these functions don't clamp to strict positivity themselves, since the
//! engine applies that floor exactly once, after modifiers are composed in.
use express_measures::pearson_correlation;
use graph_types::NodeId;
use hashbrown::HashSet;
use itertools::Itertools;

/// Pearson correlation of the endpoints' attribute vectors, aligned on their
/// shared prefix. `|ρ| + ε`, clamped to `(0, 1+ε]`.
pub fn attribute_mi(a: &[f64], b: &[f64], epsilon: f64) -> f64 {
    match pearson_correlation(a, b) {
        Some(rho) => (rho.abs() + epsilon).min(1.0 + epsilon),
        None => epsilon,
    }
}

/// Shared rarity formula behind both the node-type co-occurrence and the
/// edge-type rarity base strategies: `-ln(P) / -ln(ε / (total + ε))`, where
/// `P = (count + ε) / (total + ε)`. Maps to `(0, 1]`: a pair/type that never
/// occurs gets the maximum possible score (the denominator is exactly the
/// score of the rarest possible count, zero).
pub fn rarity_score(count: usize, total: usize, epsilon: f64) -> f64 {
    let total = total as f64;
    let p = (count as f64 + epsilon) / (total + epsilon);
    let worst_p = epsilon / (total + epsilon);
    (-p.ln()) / (-worst_p.ln())
}

/// `|N(u) ∩ N(v)| / |N(u) ∪ N(v)| + ε`. An empty pair (both neighbor sets
/// empty, hence an empty union) returns `ε` directly rather than `0/0`.
pub fn jaccard(neighbors_u: &HashSet<NodeId>, neighbors_v: &HashSet<NodeId>, epsilon: f64) -> f64 {
    let intersection = neighbors_u.intersection(neighbors_v).count();
    let union = neighbors_u.union(neighbors_v).count();
    if union == 0 {
        return epsilon;
    }
    (intersection as f64 / union as f64) + epsilon
}

/// `Σ_{w ∈ N(u)∩N(v)} 1/ln(deg(w)+2)`, normalised by
/// `min(|N(u)|,|N(v)|) / ln(4)`, clamped to `[0,1]`, then `+ε`.
pub fn adamic_adar<'a>(
    neighbors_u: &'a HashSet<NodeId>,
    neighbors_v: &'a HashSet<NodeId>,
    degree_of: impl Fn(&NodeId) -> usize,
    epsilon: f64,
) -> f64 {
    let sum: f64 = neighbors_u
        .intersection(neighbors_v)
        .map(|w| 1.0 / ((degree_of(w) as f64 + 2.0).ln()))
        .sum();

    let min_size = neighbors_u.len().min(neighbors_v.len());
    if min_size == 0 {
        return epsilon;
    }
    let normalizer = min_size as f64 / 4f64.ln();
    (sum / normalizer).clamp(0.0, 1.0) + epsilon
}

/// `clamp((J - d²) / (1 - d²), ε, 1) + ε`; `ε` directly when `d² ≥ 1-ε`.
pub fn density_normalized_jaccard(jaccard_value: f64, density: f64, epsilon: f64) -> f64 {
    let d_squared = density * density;
    if d_squared >= 1.0 - epsilon {
        return epsilon;
    }
    (((jaccard_value - d_squared) / (1.0 - d_squared)).clamp(epsilon, 1.0)) + epsilon
}

/// Geometric mean of the pairwise Jaccard coefficients across every
/// unordered pair of `endpoints` (source, target, and any hyperedge
/// extras), each term already ε-smoothed by [`jaccard`].
pub fn hyperedge_mi(
    endpoints: &[NodeId],
    neighbor_sets: &hashbrown::HashMap<NodeId, HashSet<NodeId>>,
    epsilon: f64,
) -> f64 {
    let empty = HashSet::new();
    let pairwise: Vec<f64> = endpoints
        .iter()
        .tuple_combinations()
        .map(|(a, b)| {
            let na = neighbor_sets.get(a).unwrap_or(&empty);
            let nb = neighbor_sets.get(b).unwrap_or(&empty);
            jaccard(na, nb, epsilon)
        })
        .collect();

    if pairwise.is_empty() {
        return epsilon;
    }
    let mean_log = pairwise.iter().map(|v| (v + epsilon).ln()).sum::<f64>() / pairwise.len() as f64;
    mean_log.exp()
}
