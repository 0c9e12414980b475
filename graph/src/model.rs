//! The attributed graph's data model: nodes, edges, paths and ranked paths.
//!
//! Every type here is a plain, immutable-during-a-query-workload value —
//! none of them own any caches. Caches (neighbor sets, degree maps, the MI
//! cache itself) live in [`crate::mi`] and [`crate::graph_view`].
use graph_types::{EdgeId, NodeId, WeightT};

/// A node's community label. The spec allows either a string or an integer
/// label; callers pick whichever fits their data without having to agree on
/// one representation up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommunityLabel {
    Named(String),
    Indexed(i64),
}

/// A graph vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub node_type: Option<String>,
    pub attributes: Option<Vec<f64>>,
    pub community: Option<CommunityLabel>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Node {
            id: id.into(),
            node_type: None,
            attributes: None,
            community: None,
        }
    }

    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    pub fn with_attributes(mut self, attributes: Vec<f64>) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn with_community(mut self, community: CommunityLabel) -> Self {
        self.community = Some(community);
        self
    }
}

/// A graph edge. Every payload field beyond identity and endpoints is
/// optional: the MI engine treats an absent extractor result as "this
/// modifier contributes a neutral `1`", never as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub edge_type: Option<String>,
    pub weight: Option<WeightT>,
    pub timestamp: Option<f64>,
    pub sign: Option<f64>,
    pub probability: Option<f64>,
    pub layer: Option<String>,
    /// Extra node ids beyond source/target, for hyperedges.
    pub extra_nodes: Vec<NodeId>,
}

impl Edge {
    pub fn new(id: impl Into<EdgeId>, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Edge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            edge_type: None,
            weight: None,
            timestamp: None,
            sign: None,
            probability: None,
            layer: None,
            extra_nodes: Vec::new(),
        }
    }

    pub fn with_type(mut self, edge_type: impl Into<String>) -> Self {
        self.edge_type = Some(edge_type.into());
        self
    }

    pub fn with_weight(mut self, weight: WeightT) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_sign(mut self, sign: f64) -> Self {
        self.sign = Some(sign);
        self
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = Some(probability.clamp(0.0, 1.0));
        self
    }

    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }

    pub fn with_extra_nodes(mut self, extra_nodes: Vec<NodeId>) -> Self {
        self.extra_nodes = extra_nodes;
        self
    }

    /// Whether this edge carries a non-empty hyperedge companion set.
    pub fn is_hyperedge(&self) -> bool {
        !self.extra_nodes.is_empty()
    }

    /// The endpoint other than `from`, under the assumption that `from` is
    /// one of `source`/`target`. Used when traversing an edge without
    /// caring which direction it was stored in.
    pub fn other_endpoint(&self, from: &NodeId) -> Option<&NodeId> {
        if &self.source == from {
            Some(&self.target)
        } else if &self.target == from {
            Some(&self.source)
        } else {
            None
        }
    }
}

/// An ordered alternating sequence of nodes and edges. `edges[i]` connects
/// `nodes[i]` and `nodes[i + 1]` in traversal order, which may oppose the
/// edge's stored direction under undirected traversal. A path of length
/// zero has exactly one node and no edges. Simple: no vertex repeats.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeId>,
}

impl Path {
    /// A zero-length path consisting of a single node.
    pub fn singleton(node: NodeId) -> Self {
        Path {
            nodes: vec![node],
            edges: Vec::new(),
        }
    }

    /// Number of edges traversed; zero for a singleton path.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn start(&self) -> &NodeId {
        &self.nodes[0]
    }

    pub fn end(&self) -> &NodeId {
        &self.nodes[self.nodes.len() - 1]
    }
}

/// A scored, MI-ranked path.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPath {
    pub path: Path,
    pub score: f64,
    pub geometric_mean_mi: f64,
    pub edge_mi_values: Vec<f64>,
    pub length_penalty: Option<f64>,
    pub weight_factor: Option<f64>,
}
