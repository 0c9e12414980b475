//! The immutable, once-built MI cache (spec §3/§6). Mirrors the teacher's
//! `PropertyCache` in spirit (a frozen, build-once struct owned by the
//! consumer rather than threaded through as shared-mutable state), but keyed
//! by edge rather than holding a handful of scalar graph-wide properties.
use graph_types::EdgeId;
use hashbrown::HashMap;

/// `EdgeId -> f64` mapping built once by [`crate::mi::MiEngine::build`] and
/// read-only thereafter. Every edge present in the graph at build time has
/// an entry; values are finite and strictly positive (ε-smoothed).
#[derive(Debug, Clone)]
pub struct MICache {
    pub(crate) values: HashMap<EdgeId, f64>,
    /// Present only when `MIConfig::inputs.layer_of` yielded a layer for an
    /// edge. Not consumed by the path ranker; reserved for the
    /// layer-aggregation site spec §9 leaves open.
    pub(crate) layers: HashMap<EdgeId, String>,
}

impl MICache {
    /// Builds a cache directly from precomputed values, bypassing
    /// [`crate::mi::MiEngine::build`]. Used to pin exact per-edge MI values
    /// in tests (spec §8's lettered scenarios specify literal MI overrides
    /// per edge rather than letting a strategy compute them) and by callers
    /// who already have scores from elsewhere and just want the path
    /// ranker's scoring/enumeration machinery.
    pub fn from_values(values: HashMap<EdgeId, f64>) -> Self {
        MICache {
            values,
            layers: HashMap::new(),
        }
    }

    pub fn get(&self, edge_id: &EdgeId) -> Option<f64> {
        self.values.get(edge_id).copied()
    }

    pub fn keys(&self) -> impl Iterator<Item = &EdgeId> {
        self.values.keys()
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn layer_of(&self, edge_id: &EdgeId) -> Option<&str> {
        self.layers.get(edge_id).map(String::as_str)
    }
}
