mod consts;
mod graph;
mod models;
mod shortest_path;

pub use consts::*;
pub use models::{Graph, GraphError, PathEdge, PathResult, Position, ShortestPathTree};
pub use shortest_path::{compute_distances, compute_path, path_edges};
