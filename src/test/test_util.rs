pub use dissimilar::diff as __diff;

use crate::core::{Graph, PathEdge, PathResult, compute_path, demo_graph, path_edges};
use crate::visualizer::{Scene, SelectionState, build_scene, render_scene_to_string};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

/// Character grid cell size used by scene snapshots; the demo positions are
/// laid out on a rough 100-unit raster.
pub const SNAPSHOT_STEP: f64 = 100.0;

pub struct RouteTestState {
    pub graph: Graph,
    pub selection: SelectionState,
    pub route: Option<PathResult>,
    pub path_edges: Vec<PathEdge>,
}

impl RouteTestState {
    pub fn new() -> Self {
        Self::with_graph(demo_graph())
    }

    pub fn with_graph(graph: Graph) -> Self {
        RouteTestState {
            graph,
            selection: SelectionState::default(),
            route: None,
            path_edges: Vec::new(),
        }
    }

    pub fn select(&mut self, origin: Option<usize>, destination: Option<usize>) {
        self.selection.set_origin(origin);
        self.selection.set_destination(destination);
    }

    /// Selects both ends and computes the route, like the calculate-route
    /// action does after validation.
    pub fn calculate(&mut self, origin: usize, destination: usize) -> PathResult {
        self.select(Some(origin), Some(destination));
        let route = compute_path(&self.graph, origin, destination);
        self.path_edges = path_edges(&self.graph, &route.nodes).expect("route must be connected");
        self.route = Some(route.clone());
        route
    }

    pub fn current_path(&self) -> &[usize] {
        self.route.as_ref().map(|route| route.nodes.as_slice()).unwrap_or(&[])
    }

    pub fn scene(&self) -> Scene {
        build_scene(&self.graph, self.selection, &self.path_edges, self.current_path())
    }

    pub fn scene_to_string(&self) -> String {
        render_scene_to_string(&self.scene(), SNAPSHOT_STEP)
    }

    pub fn assert_scene_matches(&self, expected: &str) {
        let actual = self.scene_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}
