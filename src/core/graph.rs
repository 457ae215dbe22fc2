use crate::core::models::{Graph, GraphError, Position};

impl Graph {
    /// Builds a graph from node positions and undirected weighted edges.
    /// Node count is the number of positions; edge endpoints must fall in
    /// [0, node_count). Each input edge is stored in both directions, so
    /// adjacency stays symmetric. Parallel edges are kept as given.
    pub fn new(positions: Vec<Position>, edges: &[(usize, usize, f64)]) -> Result<Self, GraphError> {
        if positions.is_empty() {
            return Err(GraphError::InvalidTopology("graph needs at least one node".to_string()));
        }

        let node_count = positions.len();
        let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); node_count];

        for &(u, v, weight) in edges {
            if u >= node_count || v >= node_count {
                return Err(GraphError::InvalidTopology(format!(
                    "edge {}-{} references a node outside 0..{}",
                    u, v, node_count
                )));
            }
            if u == v {
                return Err(GraphError::InvalidTopology(format!("self loop on node {}", u)));
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(GraphError::InvalidTopology(format!(
                    "edge {}-{} has invalid weight {}",
                    u, v, weight
                )));
            }

            adjacency[u].push((v, weight));
            adjacency[v].push((u, weight));
        }

        Ok(Graph { positions, adjacency })
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    pub fn position(&self, node: usize) -> Position {
        self.positions[node]
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Neighbor entries of `u` in insertion order. Both directions of one
    /// input edge show up as separate entries on their respective nodes.
    pub fn neighbors(&self, u: usize) -> &[(usize, f64)] {
        &self.adjacency[u]
    }

    /// Weight of the first stored entry for `v` among the neighbors of `u`,
    /// or None when the nodes are not adjacent.
    pub fn edge_weight(&self, u: usize, v: usize) -> Option<f64> {
        self.adjacency[u]
            .iter()
            .find(|(node, _)| *node == v)
            .map(|(_, weight)| *weight)
    }
}
