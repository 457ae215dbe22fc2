use crate::core::Graph;
use crate::visualizer::models::{ClickOutcome, SelectionState};

impl SelectionState {
    pub fn set_origin(&mut self, node: Option<usize>) {
        self.origin = node;
    }

    pub fn set_destination(&mut self, node: Option<usize>) {
        self.destination = node;
    }

    pub fn clear(&mut self) {
        self.origin = None;
        self.destination = None;
    }

    pub fn both_set(&self) -> bool {
        self.origin.is_some() && self.destination.is_some()
    }

    /// Click-to-select state machine: the first click picks the origin, the
    /// second a different destination. Clicking the origin again does
    /// nothing, and once both ends are set further clicks are ignored until
    /// an external clear.
    pub fn handle_node_click(&mut self, node: usize) -> ClickOutcome {
        match (self.origin, self.destination) {
            (None, _) => {
                self.origin = Some(node);
                ClickOutcome::OriginSet(node)
            }
            (Some(origin), None) if node != origin => {
                self.destination = Some(node);
                ClickOutcome::DestinationSet(node)
            }
            _ => ClickOutcome::Ignored,
        }
    }
}

/// Node whose center lies within `radius` of the point, scanning ids in
/// ascending order so overlapping circles resolve to the lowest id.
pub fn node_at_point(graph: &Graph, x: f64, y: f64, radius: f64) -> Option<usize> {
    (0..graph.node_count()).find(|&node| graph.position(node).distance_to(x, y) <= radius)
}
