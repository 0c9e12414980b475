//! Configuration surface for the MI engine: the extractor record (`MiInputs`)
//! plus the flags and thresholds from spec §4.1's configuration table.
use crate::model::{CommunityLabel, Edge, Node};
use graph_types::{NodeId, DEFAULT_EPSILON};

/// Optional-accessor record over node/edge payloads, per spec §9's
/// recommendation: "a small interface... with all methods defaulting to
/// 'not present'". Each field defaults to reading the corresponding field
/// already present on [`Node`]/[`Edge`] (spec §3's data model), but callers
/// may override any of them — e.g. to source attributes from a side table
/// instead of the `Node::attributes` field.
pub struct MiInputs {
    pub attributes_of: Box<dyn Fn(&Node) -> Option<Vec<f64>> + Send + Sync>,
    pub community_of: Box<dyn Fn(&Node) -> Option<CommunityLabel> + Send + Sync>,
    pub timestamp_of: Box<dyn Fn(&Edge) -> Option<f64> + Send + Sync>,
    pub sign_of: Box<dyn Fn(&Edge) -> Option<f64> + Send + Sync>,
    pub probability_of: Box<dyn Fn(&Edge) -> Option<f64> + Send + Sync>,
    pub layer_of: Box<dyn Fn(&Edge) -> Option<String> + Send + Sync>,
    pub hyperedge_extra_of: Box<dyn Fn(&Edge) -> Vec<NodeId> + Send + Sync>,
}

impl Default for MiInputs {
    fn default() -> Self {
        MiInputs {
            attributes_of: Box::new(|node| node.attributes.clone()),
            community_of: Box::new(|node| node.community.clone()),
            timestamp_of: Box::new(|edge| edge.timestamp),
            sign_of: Box::new(|edge| edge.sign),
            probability_of: Box::new(|edge| edge.probability),
            layer_of: Box::new(|edge| edge.layer.clone()),
            hyperedge_extra_of: Box::new(|edge| edge.extra_nodes.clone()),
        }
    }
}

/// The MI engine's public configuration (spec §4.1). Every field is
/// optional and independent unless noted; all default to "off".
pub struct MIConfig {
    pub inputs: MiInputs,

    /// `None` auto-detects: enabled when more than one distinct edge type
    /// is present. `Some(true/false)` forces the strategy on or off.
    pub use_edge_types: Option<bool>,

    pub use_adamic_adar: bool,
    pub use_density_normalization: bool,
    /// Overrides the computed graph density used by density normalisation.
    pub density: Option<f64>,

    /// `λ` for the temporal decay modifier; `None` disables it.
    pub temporal_decay: Option<f64>,
    pub reference_time: Option<f64>,

    /// `p ∈ [0,1]` for the sign modifier; `None` disables it.
    pub negative_penalty: Option<f64>,

    /// `b` for the community modifier; `None` disables it.
    pub community_boost: Option<f64>,

    pub use_degree_based_penalty: bool,
    /// `α` for the degree-based penalty modifier.
    pub degree_penalty_factor: Option<f64>,

    pub use_idf_weighting: bool,
    pub use_edge_type_rarity: bool,
    pub use_clustering_penalty: bool,

    /// Numeric floor used throughout ε-smoothing; default `10^-10`.
    pub epsilon: f64,
}

impl Default for MIConfig {
    fn default() -> Self {
        MIConfig {
            inputs: MiInputs::default(),
            use_edge_types: None,
            use_adamic_adar: false,
            use_density_normalization: false,
            density: None,
            temporal_decay: None,
            reference_time: None,
            negative_penalty: None,
            community_boost: None,
            use_degree_based_penalty: false,
            degree_penalty_factor: None,
            use_idf_weighting: false,
            use_edge_type_rarity: false,
            use_clustering_penalty: false,
            epsilon: DEFAULT_EPSILON,
        }
    }
}
