//! Path enumeration: a BFS layered shortest-path DAG (every shortest path,
//! not just one) and a depth-bounded DFS over all simple paths.
use super::config::TraversalMode;
use crate::graph_view::GraphView;
use crate::model::Path;
use graph_types::{EdgeId, NodeId, Result};
use hashbrown::{HashMap, HashSet};
use std::collections::VecDeque;

/// Global hard cap on how many paths either enumerator will ever produce,
/// independent of any caller-supplied `max_paths` (which can only lower it).
pub const MAX_PATH_CAP: usize = 10_000;

/// Every step an edge offers out of a node, under the given traversal mode
/// (spec §4.2: independent of the graph's own directedness). `Directed`
/// only follows outgoing edges; `Undirected` also traverses incident edges
/// back-to-front.
fn directed_steps(
    graph: &dyn GraphView,
    from: &NodeId,
    traversal_mode: TraversalMode,
) -> Result<Vec<(NodeId, EdgeId)>> {
    let mut steps = Vec::new();
    for edge in graph.get_outgoing_edges(from)? {
        if let Some(other) = edge.other_endpoint(from) {
            steps.push((other.clone(), edge.id.clone()));
        }
    }
    // `get_outgoing_edges` already returns every incident edge for a graph
    // that is not itself directed (spec §6), so adding the incoming set
    // there would just duplicate every edge. The `Directed`/`Undirected`
    // distinction only has teeth when the underlying graph actually
    // separates the two.
    if traversal_mode == TraversalMode::Directed || !graph.is_directed() {
        return Ok(steps);
    }
    for edge in graph.get_incoming_edges(from)? {
        if let Some(other) = edge.other_endpoint(from) {
            steps.push((other.clone(), edge.id.clone()));
        }
    }
    Ok(steps)
}

/// All shortest paths from `source` to `target`, found by a BFS layering
/// pass (recording every edge that advances a node's shortest-distance
/// frontier) followed by backpointer reconstruction from `target`.
/// Reconstruction stops early once `max_paths` paths have been produced.
pub fn all_shortest_paths(
    graph: &dyn GraphView,
    source: &NodeId,
    target: &NodeId,
    max_paths: usize,
    traversal_mode: TraversalMode,
) -> Result<Vec<Path>> {
    if source == target {
        return Ok(vec![Path::singleton(source.clone())]);
    }

    let mut distance: HashMap<NodeId, usize> = HashMap::new();
    distance.insert(source.clone(), 0);
    // predecessors[v] = every (u, edge) pair such that u -> v lies on a
    // shortest path from source to v.
    let mut predecessors: HashMap<NodeId, Vec<(NodeId, EdgeId)>> = HashMap::new();

    let mut queue: VecDeque<NodeId> = VecDeque::new();
    queue.push_back(source.clone());

    while let Some(current) = queue.pop_front() {
        let current_distance = distance[&current];
        if distance.contains_key(target) && current_distance >= distance[target] {
            continue;
        }
        for (next, edge_id) in directed_steps(graph, &current, traversal_mode)? {
            match distance.get(&next) {
                None => {
                    distance.insert(next.clone(), current_distance + 1);
                    predecessors.insert(next.clone(), vec![(current.clone(), edge_id)]);
                    queue.push_back(next);
                }
                Some(&d) if d == current_distance + 1 => {
                    predecessors.entry(next).or_default().push((current.clone(), edge_id));
                }
                _ => {}
            }
        }
    }

    if !distance.contains_key(target) {
        return Ok(Vec::new());
    }

    let cap = max_paths.min(MAX_PATH_CAP);
    let mut results = Vec::new();
    let mut node_stack = vec![target.clone()];
    let mut edge_stack: Vec<EdgeId> = Vec::new();
    reconstruct(
        source,
        target,
        &predecessors,
        &mut node_stack,
        &mut edge_stack,
        cap,
        &mut results,
    );
    Ok(results)
}

fn reconstruct(
    source: &NodeId,
    current: &NodeId,
    predecessors: &HashMap<NodeId, Vec<(NodeId, EdgeId)>>,
    node_stack: &mut Vec<NodeId>,
    edge_stack: &mut Vec<EdgeId>,
    cap: usize,
    results: &mut Vec<Path>,
) {
    if results.len() >= cap {
        return;
    }
    if current == source {
        results.push(Path {
            nodes: node_stack.iter().rev().cloned().collect(),
            edges: edge_stack.iter().rev().cloned().collect(),
        });
        return;
    }
    let preds = match predecessors.get(current) {
        Some(preds) => preds,
        None => return,
    };
    for (prev, edge_id) in preds {
        if results.len() >= cap {
            return;
        }
        node_stack.push(prev.clone());
        edge_stack.push(edge_id.clone());
        reconstruct(source, prev, predecessors, node_stack, edge_stack, cap, results);
        edge_stack.pop();
        node_stack.pop();
    }
}

/// All simple (no repeated vertex) paths from `source` to `target`, via
/// depth-first search bounded by `max_length` edges (when set) and capped
/// globally at `max_paths` (further capped by [`MAX_PATH_CAP`]).
pub fn all_simple_paths(
    graph: &dyn GraphView,
    source: &NodeId,
    target: &NodeId,
    max_length: Option<usize>,
    max_paths: usize,
    traversal_mode: TraversalMode,
) -> Result<Vec<Path>> {
    if source == target {
        return Ok(vec![Path::singleton(source.clone())]);
    }

    let cap = max_paths.min(MAX_PATH_CAP);
    let mut results = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    visited.insert(source.clone());
    let mut node_path = vec![source.clone()];
    let mut edge_path: Vec<EdgeId> = Vec::new();

    dfs_simple(
        graph,
        source,
        target,
        max_length,
        cap,
        traversal_mode,
        &mut visited,
        &mut node_path,
        &mut edge_path,
        &mut results,
    )?;

    Ok(results)
}

#[allow(clippy::too_many_arguments)]
fn dfs_simple(
    graph: &dyn GraphView,
    current: &NodeId,
    target: &NodeId,
    max_length: Option<usize>,
    cap: usize,
    traversal_mode: TraversalMode,
    visited: &mut HashSet<NodeId>,
    node_path: &mut Vec<NodeId>,
    edge_path: &mut Vec<EdgeId>,
    results: &mut Vec<Path>,
) -> Result<()> {
    if results.len() >= cap {
        return Ok(());
    }
    if let Some(max_length) = max_length {
        if edge_path.len() >= max_length {
            return Ok(());
        }
    }

    for (next, edge_id) in directed_steps(graph, current, traversal_mode)? {
        if results.len() >= cap {
            return Ok(());
        }
        if visited.contains(&next) {
            continue;
        }
        node_path.push(next.clone());
        edge_path.push(edge_id);
        if &next == target {
            results.push(Path {
                nodes: node_path.clone(),
                edges: edge_path.clone(),
            });
        } else {
            visited.insert(next.clone());
            dfs_simple(
                graph,
                &next,
                target,
                max_length,
                cap,
                traversal_mode,
                visited,
                node_path,
                edge_path,
                results,
            )?;
            visited.remove(&next);
        }
        edge_path.pop();
        node_path.pop();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_view::SimpleGraph;
    use crate::model::{Edge, Node};

    fn chain(n: usize) -> SimpleGraph {
        let mut g = SimpleGraph::new(false);
        for i in 0..n {
            g.add_node(Node::new(i.to_string()));
        }
        for i in 0..n - 1 {
            g.add_edge(Edge::new(format!("e{i}"), i.to_string(), (i + 1).to_string()));
        }
        g
    }

    #[test]
    fn shortest_path_on_chain_is_unique() {
        let g = chain(5);
        let paths = all_shortest_paths(
            &g,
            &NodeId::from("0"),
            &NodeId::from("4"),
            100,
            TraversalMode::Undirected,
        )
        .unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 4);
    }

    #[test]
    fn same_source_and_target_is_singleton() {
        let g = chain(3);
        let paths = all_shortest_paths(
            &g,
            &NodeId::from("1"),
            &NodeId::from("1"),
            100,
            TraversalMode::Undirected,
        )
        .unwrap();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].is_empty());
    }

    #[test]
    fn unreachable_target_yields_no_paths() {
        let mut g = chain(3);
        g.add_node(Node::new("isolated"));
        let paths = all_shortest_paths(
            &g,
            &NodeId::from("0"),
            &NodeId::from("isolated"),
            100,
            TraversalMode::Undirected,
        )
        .unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn directed_mode_respects_edge_direction() {
        let mut g = SimpleGraph::new(true);
        g.add_edge(Edge::new("e0", "a", "b"));
        g.add_edge(Edge::new("e1", "b", "c"));
        let forward = all_shortest_paths(
            &g,
            &NodeId::from("a"),
            &NodeId::from("c"),
            100,
            TraversalMode::Directed,
        )
        .unwrap();
        assert_eq!(forward.len(), 1);
        let backward = all_shortest_paths(
            &g,
            &NodeId::from("c"),
            &NodeId::from("a"),
            100,
            TraversalMode::Directed,
        )
        .unwrap();
        assert!(backward.is_empty());
        let backward_undirected = all_shortest_paths(
            &g,
            &NodeId::from("c"),
            &NodeId::from("a"),
            100,
            TraversalMode::Undirected,
        )
        .unwrap();
        assert_eq!(backward_undirected.len(), 1);
    }
}
