//! The eight multiplicative modifiers (spec §4.1), applied in this fixed
//! order: temporal, sign, probability, community, degree-penalty, IDF,
//! edge-type-rarity, clustering-penalty. Every modifier returns `1.0`
//! (neutral) when its prerequisite input is absent or its config flag is off,
//! so the engine can unconditionally fold all eight over the base score.
use crate::model::CommunityLabel;

/// `exp(-λ · max(0, t_ref - t))`: edges at or after the reference time are
/// undiscounted (`max(0, ...)` floors to zero), only edges older than the
/// reference decay. Neutral when either the decay rate, the edge
/// timestamp, or the reference time is unset.
pub fn temporal_modifier(
    timestamp: Option<f64>,
    reference_time: Option<f64>,
    decay: Option<f64>,
) -> f64 {
    match (timestamp, reference_time, decay) {
        (Some(t), Some(t_ref), Some(lambda)) => (-lambda * (t_ref - t).max(0.0)).exp(),
        _ => 1.0,
    }
}

/// `1 - p` when the edge's sign is negative, `1.0` otherwise (including when
/// unset). `p` is expected in `[0, 1]`; the config layer is responsible for
/// that range, this function just uses the value as given.
pub fn sign_modifier(sign: Option<f64>, negative_penalty: Option<f64>) -> f64 {
    match (sign, negative_penalty) {
        (Some(s), Some(p)) if s < 0.0 => 1.0 - p,
        _ => 1.0,
    }
}

/// The edge's own probability, clamped to `[0, 1]`. A zero-probability
/// edge still passes through `finalize`'s epsilon floor downstream, so it
/// is never actually cached as zero. Neutral when unset.
pub fn probability_modifier(probability: Option<f64>) -> f64 {
    match probability {
        Some(p) => p.clamp(0.0, 1.0),
        None => 1.0,
    }
}

/// `1 + b` when both endpoints share a community, `1.0` otherwise (including
/// when either community is unknown).
pub fn community_modifier(
    source_community: Option<&CommunityLabel>,
    target_community: Option<&CommunityLabel>,
    community_boost: Option<f64>,
) -> f64 {
    match (source_community, target_community, community_boost) {
        (Some(a), Some(b), Some(boost)) if a == b => 1.0 + boost,
        _ => 1.0,
    }
}

/// `exp(-α·(ln(deg(u)+1) + ln(deg(v)+1)))`. Neutral when the flag is off or
/// `α` is unset.
pub fn degree_penalty_modifier(degree_u: usize, degree_v: usize, factor: Option<f64>) -> f64 {
    match factor {
        Some(alpha) => {
            (-alpha * (((degree_u + 1) as f64).ln() + ((degree_v + 1) as f64).ln())).exp()
        }
        None => 1.0,
    }
}

/// `ln(N/(deg(u)+1)+ε) · ln(N/(deg(v)+1)+ε)`: classic inverse-document-
/// frequency weighting applied to degree instead of document count, one
/// factor per endpoint.
pub fn idf_modifier(node_count: usize, degree_u: usize, degree_v: usize, epsilon: f64) -> f64 {
    let idf_of = |degree: usize| (node_count as f64 / (degree as f64 + 1.0) + epsilon).ln();
    idf_of(degree_u) * idf_of(degree_v)
}

/// `-ln(P(edge_type) + ε)`, where `P` is this edge type's frequency among
/// all edges. Neutral (`1.0`) when the edge has no type.
pub fn edge_type_rarity_modifier(
    edge_type_count: Option<usize>,
    total_edges: usize,
    epsilon: f64,
) -> f64 {
    match edge_type_count {
        Some(count) => {
            let p = count as f64 / total_edges.max(1) as f64;
            -(p + epsilon).ln()
        }
        None => 1.0,
    }
}

/// `1 - max(C(u), C(v)) + ε`, where `C` is the local clustering
/// coefficient: an edge touching an already tightly-clustered neighborhood
/// is discounted, since that neighborhood's redundancy makes the edge less
/// informative.
pub fn clustering_penalty_modifier(clustering_u: f64, clustering_v: f64, epsilon: f64) -> f64 {
    1.0 - clustering_u.max(clustering_v) + epsilon
}
