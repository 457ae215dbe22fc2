use crate::core::{Graph, PathResult};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
struct JsonData {
    nodes: Vec<JsonNode>,
    links: Vec<JsonEdge>,
    route: Option<JsonRoute>,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonNode {
    id: usize,
    x: f64,
    y: f64,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonEdge {
    source: usize,
    target: usize,
    weight: f64,
}

#[derive(Serialize, Deserialize, Debug)]
struct JsonRoute {
    nodes: Vec<usize>,
    total_time: f64,
}

pub fn get_json_data(graph: &Graph, route: Option<&PathResult>) -> String {
    let nodes: Vec<JsonNode> = (0..graph.node_count())
        .map(|id| {
            let position = graph.position(id);
            JsonNode { id, x: position.x, y: position.y }
        })
        .collect();

    let links: Vec<JsonEdge> = (0..graph.node_count())
        .flat_map(|u| {
            graph
                .neighbors(u)
                .iter()
                .filter(move |&&(v, _)| u < v)
                .map(move |&(v, weight)| JsonEdge { source: u, target: v, weight })
        })
        .collect();

    let route = route.filter(|r| r.is_reachable()).map(|r| JsonRoute {
        nodes: r.nodes.clone(),
        total_time: r.total_weight,
    });

    let json_data = JsonData { nodes, links, route };
    serde_json::to_string_pretty(&json_data).unwrap()
}
