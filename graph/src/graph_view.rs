//! The graph collaborator contract (spec §6, §9): the core depends on
//! nothing but this trait, never on a concrete graph container. Encoding it
//! this way means the same MI engine, path ranker and expander work over a
//! hand-rolled in-memory graph, a CSR-backed one, or one backed by a real
//! dataset loader — none of which are this crate's concern.
use crate::model::Edge;
use crate::model::Node;
use graph_types::{CoreError, EdgeId, NodeId, Result};
use hashbrown::HashMap;

/// Everything the MI engine, path ranker and seed-bounded expander need from
/// a graph container. Every method beyond `get_node`/`get_all_nodes`/
/// `get_all_edges`/`get_outgoing_edges` is either derivable from those four
/// (and is, in `SimpleGraph`) or exists purely to let an undirected
/// traversal mode run over a directed graph (`get_incoming_edges`).
pub trait GraphView {
    fn get_node(&self, id: &NodeId) -> Option<&Node>;
    fn get_edge(&self, id: &EdgeId) -> Option<&Edge>;
    fn get_all_nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_>;
    fn get_all_edges(&self) -> Box<dyn Iterator<Item = &Edge> + '_>;

    /// Edges directed out of `id`. For undirected graphs this is every edge
    /// incident to `id`.
    fn get_outgoing_edges(&self, id: &NodeId) -> Result<Box<dyn Iterator<Item = &Edge> + '_>>;

    /// Edges directed into `id`. For undirected graphs this coincides with
    /// [`Self::get_outgoing_edges`]. The default falls back to a linear scan
    /// of all edges, so a minimal collaborator only needs to implement the
    /// four methods above plus this one's omission is safe to rely on.
    fn get_incoming_edges(&self, id: &NodeId) -> Result<Box<dyn Iterator<Item = &Edge> + '_>> {
        if !self.is_directed() {
            return self.get_outgoing_edges(id);
        }
        if self.get_node(id).is_none() {
            return Err(CoreError::missing_node(id));
        }
        let id = id.clone();
        Ok(Box::new(
            self.get_all_edges().filter(move |edge| edge.target == id),
        ))
    }

    fn get_neighbors(&self, id: &NodeId) -> Result<Box<dyn Iterator<Item = &NodeId> + '_>> {
        if self.get_node(id).is_none() {
            return Err(CoreError::missing_node(id));
        }
        let id = id.clone();
        Ok(Box::new(self.get_all_edges().filter_map(move |edge| {
            if edge.source == id {
                Some(&edge.target)
            } else if edge.target == id {
                Some(&edge.source)
            } else {
                None
            }
        })))
    }

    fn get_node_count(&self) -> usize;

    /// Total degree: out-degree plus in-degree for directed graphs
    /// (matching the `deg(v)` used throughout the Jaccard/Adamic-Adar and
    /// expander priority formulas, which don't distinguish direction), or
    /// just the incident-edge count for undirected graphs.
    fn get_degree(&self, id: &NodeId) -> Result<usize> {
        let out = self.get_outgoing_edges(id)?.count();
        if !self.is_directed() {
            return Ok(out);
        }
        Ok(out + self.get_incoming_edges(id)?.count())
    }

    fn is_directed(&self) -> bool;
}

/// A minimal in-memory [`GraphView`]. Not part of the core's scope — the
/// graph container is an external collaborator (spec §1, §6) — but the core
/// needs something concrete to be tested against, the same role the
/// teacher's own `Graph` struct plays for its own test suite.
#[derive(Debug, Clone, Default)]
pub struct SimpleGraph {
    directed: bool,
    nodes: HashMap<NodeId, Node>,
    edges: HashMap<EdgeId, Edge>,
    /// Adjacency index: node id -> ids of edges with that node as source
    /// (or, for undirected graphs, as either endpoint).
    outgoing: HashMap<NodeId, Vec<EdgeId>>,
    /// Adjacency index: node id -> ids of edges with that node as target.
    /// Only populated (and only consulted) for directed graphs.
    incoming: HashMap<NodeId, Vec<EdgeId>>,
}

impl SimpleGraph {
    pub fn new(directed: bool) -> Self {
        SimpleGraph {
            directed,
            ..Default::default()
        }
    }

    pub fn add_node(&mut self, node: Node) -> &mut Self {
        self.outgoing.entry(node.id.clone()).or_default();
        if self.directed {
            self.incoming.entry(node.id.clone()).or_default();
        }
        self.nodes.insert(node.id.clone(), node);
        self
    }

    /// Adds an edge, inserting any endpoint that is not already a known
    /// node. Mirrors the teacher's `GraphBuilder::add_edge`, which likewise
    /// lazily creates endpoints rather than requiring them up front.
    pub fn add_edge(&mut self, edge: Edge) -> &mut Self {
        for id in std::iter::once(&edge.source)
            .chain(std::iter::once(&edge.target))
            .chain(edge.extra_nodes.iter())
        {
            self.outgoing.entry(id.clone()).or_default();
            if self.directed {
                self.incoming.entry(id.clone()).or_default();
            }
            self.nodes
                .entry(id.clone())
                .or_insert_with(|| Node::new(id.clone()));
        }

        self.outgoing
            .get_mut(&edge.source)
            .unwrap()
            .push(edge.id.clone());
        if self.directed {
            self.incoming
                .get_mut(&edge.target)
                .unwrap()
                .push(edge.id.clone());
        } else if edge.source != edge.target {
            self.outgoing
                .get_mut(&edge.target)
                .unwrap()
                .push(edge.id.clone());
        }

        self.edges.insert(edge.id.clone(), edge);
        self
    }
}

impl GraphView for SimpleGraph {
    fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn get_edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    fn get_all_nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
        Box::new(self.nodes.values())
    }

    fn get_all_edges(&self) -> Box<dyn Iterator<Item = &Edge> + '_> {
        Box::new(self.edges.values())
    }

    fn get_outgoing_edges(&self, id: &NodeId) -> Result<Box<dyn Iterator<Item = &Edge> + '_>> {
        let ids = self
            .outgoing
            .get(id)
            .ok_or_else(|| CoreError::missing_node(id))?;
        Ok(Box::new(ids.iter().map(move |edge_id| &self.edges[edge_id])))
    }

    fn get_incoming_edges(&self, id: &NodeId) -> Result<Box<dyn Iterator<Item = &Edge> + '_>> {
        if !self.directed {
            return self.get_outgoing_edges(id);
        }
        let ids = self
            .incoming
            .get(id)
            .ok_or_else(|| CoreError::missing_node(id))?;
        Ok(Box::new(ids.iter().map(move |edge_id| &self.edges[edge_id])))
    }

    fn get_node_count(&self) -> usize {
        self.nodes.len()
    }

    fn get_degree(&self, id: &NodeId) -> Result<usize> {
        let out = self.get_outgoing_edges(id)?.count();
        if !self.directed {
            return Ok(out);
        }
        Ok(out + self.get_incoming_edges(id)?.count())
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}
