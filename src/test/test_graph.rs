use crate::core::{DEMO_POSITIONS, Graph, GraphError, Position, demo_graph};

fn line_positions(count: usize) -> Vec<Position> {
    (0..count).map(|i| Position { x: i as f64 * 100.0, y: 0.0 }).collect()
}

#[test]
fn when_edge_references_missing_node_construction_fails() {
    let result = Graph::new(line_positions(3), &[(0, 3, 1.0)]);
    assert!(matches!(result, Err(GraphError::InvalidTopology(_))));
}

#[test]
fn when_edge_has_self_loop_construction_fails() {
    let result = Graph::new(line_positions(3), &[(1, 1, 1.0)]);
    assert!(matches!(result, Err(GraphError::InvalidTopology(_))));
}

#[test]
fn when_edge_has_negative_weight_construction_fails() {
    let result = Graph::new(line_positions(3), &[(0, 1, -2.0)]);
    assert!(matches!(result, Err(GraphError::InvalidTopology(_))));
}

#[test]
fn when_edge_has_non_finite_weight_construction_fails() {
    let result = Graph::new(line_positions(3), &[(0, 1, f64::NAN)]);
    assert!(matches!(result, Err(GraphError::InvalidTopology(_))));

    let result = Graph::new(line_positions(3), &[(0, 1, f64::INFINITY)]);
    assert!(matches!(result, Err(GraphError::InvalidTopology(_))));
}

#[test]
fn when_no_nodes_construction_fails() {
    let result = Graph::new(Vec::new(), &[]);
    assert!(matches!(result, Err(GraphError::InvalidTopology(_))));
}

#[test]
fn single_node_graph_is_valid() {
    let graph = Graph::new(line_positions(1), &[]).unwrap();
    assert_eq!(graph.node_count(), 1);
    assert!(graph.neighbors(0).is_empty());
}

#[test]
fn adjacency_is_symmetric() {
    let graph = demo_graph();
    for u in 0..graph.node_count() {
        for &(v, weight) in graph.neighbors(u) {
            let mirrored = graph
                .neighbors(v)
                .iter()
                .any(|&(back, back_weight)| back == u && back_weight == weight);
            assert!(mirrored, "edge {}-{} has no mirrored entry", u, v);
        }
    }
}

#[test]
fn neighbors_keep_insertion_order() {
    let graph = demo_graph();
    // Node 0 touches rows 0-1:5, 0-3:8 and the repeated 3-0:8, in that order.
    assert_eq!(graph.neighbors(0), &[(1, 5.0), (3, 8.0), (3, 8.0)]);
}

#[test]
fn edge_weight_returns_first_match_for_parallel_edges() {
    let graph = Graph::new(line_positions(2), &[(0, 1, 5.0), (0, 1, 9.0)]).unwrap();
    assert_eq!(graph.edge_weight(0, 1), Some(5.0));
    assert_eq!(graph.edge_weight(1, 0), Some(5.0));
}

#[test]
fn edge_weight_is_none_for_non_adjacent_nodes() {
    let graph = demo_graph();
    assert_eq!(graph.edge_weight(0, 5), None);
}

#[test]
fn demo_positions_are_exposed() {
    let graph = demo_graph();
    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.position(4), DEMO_POSITIONS[4]);
}
