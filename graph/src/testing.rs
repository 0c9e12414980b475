//! Synthetic graph generators for the embedded unit tests and the
//! `tests/` integration suite (spec §8's end-to-end scenarios), mirroring
//! the teacher's `generate_chain_graph`/`generate_star_graph`/... test
//! utilities. Compiled into the crate under `#[cfg(any(test, feature =
//! "testing"))]` so both suites can use it without shipping it in release
//! builds that don't opt in.
use crate::graph_view::SimpleGraph;
use crate::model::{Edge, Node};
use graph_types::NodeId;

/// A line of `n` nodes, `0`..`n-1`, joined by `n-1` edges.
pub fn generate_chain_graph(directed: bool, n: usize) -> SimpleGraph {
    let mut g = SimpleGraph::new(directed);
    for i in 0..n {
        g.add_node(Node::new(i.to_string()));
    }
    for i in 0..n.saturating_sub(1) {
        g.add_edge(Edge::new(format!("e{i}"), i.to_string(), (i + 1).to_string()));
    }
    g
}

/// One `center` node connected to `leaves` leaf nodes.
pub fn generate_star_graph(directed: bool, leaves: usize) -> SimpleGraph {
    let mut g = SimpleGraph::new(directed);
    g.add_node(Node::new("center"));
    for i in 0..leaves {
        let leaf = format!("leaf{i}");
        g.add_node(Node::new(leaf.clone()));
        g.add_edge(Edge::new(format!("e{i}"), "center", leaf));
    }
    g
}

/// A cycle of `n` nodes, `0`..`n-1`.
pub fn generate_circle_graph(directed: bool, n: usize) -> SimpleGraph {
    let mut g = SimpleGraph::new(directed);
    for i in 0..n {
        g.add_node(Node::new(i.to_string()));
    }
    for i in 0..n {
        let next = (i + 1) % n;
        g.add_edge(Edge::new(format!("e{i}"), i.to_string(), next.to_string()));
    }
    g
}

/// `K_n`: every pair of `n` nodes joined by an edge.
pub fn generate_complete_graph(directed: bool, n: usize) -> SimpleGraph {
    let mut g = SimpleGraph::new(directed);
    for i in 0..n {
        g.add_node(Node::new(i.to_string()));
    }
    let mut edge_idx = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            g.add_edge(Edge::new(format!("e{edge_idx}"), i.to_string(), j.to_string()));
            edge_idx += 1;
        }
    }
    g
}

/// The diamond from spec §8 scenario A: `A-B`, `A-C`, `B-D`, `C-D`, with
/// edge ids `E0`..`E3` matching the scenario's literal MI overrides.
pub fn generate_diamond_graph() -> SimpleGraph {
    let mut g = SimpleGraph::new(false);
    g.add_edge(Edge::new("E0", "A", "B"));
    g.add_edge(Edge::new("E1", "A", "C"));
    g.add_edge(Edge::new("E2", "B", "D"));
    g.add_edge(Edge::new("E3", "C", "D"));
    g
}

/// Two `K_cluster_size` cliques joined end-to-end by a bridge of
/// `bridge_length` extra edges.
pub fn generate_barbell_graph(cluster_size: usize, bridge_length: usize) -> SimpleGraph {
    let mut g = SimpleGraph::new(false);
    let mut edge_idx = 0usize;
    for cluster in 0..2 {
        for i in 0..cluster_size {
            for j in (i + 1)..cluster_size {
                g.add_edge(Edge::new(
                    format!("e{edge_idx}"),
                    format!("c{cluster}_{i}"),
                    format!("c{cluster}_{j}"),
                ));
                edge_idx += 1;
            }
        }
    }
    let mut prev = "c0_0".to_string();
    for i in 0..bridge_length {
        let next = format!("bridge{i}");
        g.add_edge(Edge::new(format!("e{edge_idx}"), prev.clone(), next.clone()));
        edge_idx += 1;
        prev = next;
    }
    g.add_edge(Edge::new(format!("e{edge_idx}"), prev, "c1_0".to_string()));
    g
}

/// A `width` x `height` grid with node ids `"x,y"` and edges to each
/// right/down neighbor, grounding the expander's scenario E/F fixtures.
pub fn generate_grid_graph(width: usize, height: usize) -> SimpleGraph {
    let mut g = SimpleGraph::new(false);
    for y in 0..height {
        for x in 0..width {
            g.add_node(Node::new(grid_node_id(x, y).as_str()));
        }
    }
    let mut edge_idx = 0usize;
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                g.add_edge(Edge::new(
                    format!("e{edge_idx}"),
                    grid_node_id(x, y).as_str(),
                    grid_node_id(x + 1, y).as_str(),
                ));
                edge_idx += 1;
            }
            if y + 1 < height {
                g.add_edge(Edge::new(
                    format!("e{edge_idx}"),
                    grid_node_id(x, y).as_str(),
                    grid_node_id(x, y + 1).as_str(),
                ));
                edge_idx += 1;
            }
        }
    }
    g
}

/// The node id a grid node at `(x, y)` is stored under.
pub fn grid_node_id(x: usize, y: usize) -> NodeId {
    NodeId::from(format!("{x},{y}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_view::GraphView;

    #[test]
    fn chain_has_n_minus_one_edges() {
        let g = generate_chain_graph(false, 6);
        assert_eq!(g.get_all_edges().count(), 5);
    }

    #[test]
    fn grid_has_expected_node_and_edge_counts() {
        let g = generate_grid_graph(4, 4);
        assert_eq!(g.get_all_nodes().count(), 16);
        // 2 * width * (width - 1) edges in a square grid.
        assert_eq!(g.get_all_edges().count(), 2 * 4 * 3);
    }

    #[test]
    fn diamond_matches_scenario_a_edge_ids() {
        let g = generate_diamond_graph();
        assert!(g.get_edge(&graph_types::EdgeId::from("E0")).is_some());
        assert!(g.get_edge(&graph_types::EdgeId::from("E3")).is_some());
    }
}
