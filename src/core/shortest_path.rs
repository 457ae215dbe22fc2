use crate::core::models::{Graph, GraphError, PathEdge, PathResult, ShortestPathTree};

/// Single-source shortest paths with non-negative weights, dense selection.
/// Each round scans for the unvisited node with the smallest distance; the
/// strict `<` in the scan keeps the lowest node id among ties, which makes
/// repeated runs byte-for-byte deterministic.
pub fn compute_distances(graph: &Graph, source: usize) -> ShortestPathTree {
    let node_count = graph.node_count();
    assert!(source < node_count, "source {} outside 0..{}", source, node_count);

    let mut distances = vec![f64::INFINITY; node_count];
    let mut predecessors: Vec<Option<usize>> = vec![None; node_count];
    let mut visited = vec![false; node_count];

    distances[source] = 0.0;

    for _ in 0..node_count {
        let mut min_distance = f64::INFINITY;
        let mut min_index = None;
        for node in 0..node_count {
            if !visited[node] && distances[node] < min_distance {
                min_distance = distances[node];
                min_index = Some(node);
            }
        }

        // Every remaining node is unreachable.
        let Some(u) = min_index else {
            break;
        };
        visited[u] = true;

        for &(v, weight) in graph.neighbors(u) {
            let candidate = distances[u] + weight;
            // Strict inequality: an equal-cost alternative never replaces
            // the first-found predecessor.
            if candidate < distances[v] {
                distances[v] = candidate;
                predecessors[v] = Some(u);
            }
        }
    }

    ShortestPathTree { distances, predecessors }
}

/// Shortest route from source to destination. An absent route is a normal
/// result (empty path, infinite weight), not an error; source == destination
/// yields the trivial one-node path with weight zero.
pub fn compute_path(graph: &Graph, source: usize, destination: usize) -> PathResult {
    let tree = compute_distances(graph, source);

    if tree.distances[destination].is_infinite() {
        return PathResult { nodes: Vec::new(), total_weight: f64::INFINITY };
    }

    let mut nodes = Vec::new();
    let mut current = Some(destination);
    while let Some(node) = current {
        nodes.push(node);
        current = tree.predecessors[node];
    }
    nodes.reverse();

    PathResult { nodes, total_weight: tree.distances[destination] }
}

/// Expands a node path into its consecutive edges. Paths produced by
/// `compute_path` always resolve; a missing edge means the path did not come
/// from this graph and is reported as a DisconnectedPath bug.
pub fn path_edges(graph: &Graph, path: &[usize]) -> Result<Vec<PathEdge>, GraphError> {
    let mut edges = Vec::with_capacity(path.len().saturating_sub(1));

    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let Some(weight) = graph.edge_weight(from, to) else {
            return Err(GraphError::DisconnectedPath { from, to });
        };
        edges.push(PathEdge { from, to, weight });
    }

    Ok(edges)
}
