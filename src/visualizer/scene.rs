use crate::core::{Graph, PathEdge};
use crate::visualizer::models::{EdgeVisual, NodeRole, NodeVisual, Scene, SelectionState};

/// Builds the frame description for the current state. Pure: no surface
/// handles, no accumulation, safe to call on every redraw.
pub fn build_scene(
    graph: &Graph,
    selection: SelectionState,
    path_edges: &[PathEdge],
    current_path: &[usize],
) -> Scene {
    let mut edges = Vec::new();
    for u in 0..graph.node_count() {
        for &(v, weight) in graph.neighbors(u) {
            // Adjacency holds both directions; keep the u < v one so every
            // unordered edge is drawn exactly once.
            if u > v {
                continue;
            }
            let on_path = path_edges.iter().any(|edge| edge.connects(u, v));
            edges.push(EdgeVisual { from: u, to: v, weight, on_path });
        }
    }

    let nodes = (0..graph.node_count())
        .map(|id| {
            let position = graph.position(id);
            NodeVisual {
                id,
                x: position.x,
                y: position.y,
                label: (id + 1).to_string(),
                role: node_role(id, selection, current_path),
            }
        })
        .collect();

    Scene { nodes, edges }
}

fn node_role(node: usize, selection: SelectionState, current_path: &[usize]) -> NodeRole {
    if selection.origin == Some(node) {
        NodeRole::Origin
    } else if selection.destination == Some(node) {
        NodeRole::Destination
    } else if current_path.contains(&node) {
        NodeRole::OnPath
    } else {
        NodeRole::Default
    }
}
