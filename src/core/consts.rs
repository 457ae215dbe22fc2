use crate::core::models::{Graph, Position};

/// Hit-test radius around each node center, in surface units.
pub const NODE_RADIUS: f64 = 25.0;

/// Fare charged per second of travel time.
pub const RATE_PER_SECOND: f64 = 0.50;

/// Travel seconds to animation seconds, so long routes stay watchable.
pub const ANIMATION_SCALE: f64 = 0.3;

/// The six-stop demo network. Edge rows are (from, to, seconds); the list
/// deliberately repeats 3-0 and 5-2, so parallel entries exist in adjacency
/// and first-match lookup stays observable.
pub const DEMO_EDGES: &[(usize, usize, f64)] = &[
    (0, 1, 5.0),
    (0, 3, 8.0),
    (1, 2, 6.0),
    (1, 4, 9.0),
    (2, 5, 7.0),
    (3, 4, 4.0),
    (3, 0, 8.0),
    (4, 5, 3.0),
    (5, 2, 7.0),
];

pub const DEMO_POSITIONS: &[Position] = &[
    Position { x: 150.0, y: 100.0 },
    Position { x: 350.0, y: 80.0 },
    Position { x: 550.0, y: 100.0 },
    Position { x: 150.0, y: 300.0 },
    Position { x: 350.0, y: 320.0 },
    Position { x: 550.0, y: 300.0 },
];

pub fn demo_graph() -> Graph {
    Graph::new(DEMO_POSITIONS.to_vec(), DEMO_EDGES)
        .unwrap_or_else(|err| panic!("demo network must be valid: {}", err))
}
