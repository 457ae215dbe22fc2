use crate::core::{Graph, Position, demo_graph};
use crate::visualizer::{ClickOutcome, SelectionState, node_at_point};

#[test]
fn selection_starts_unset() {
    let selection = SelectionState::default();
    assert_eq!(selection.origin, None);
    assert_eq!(selection.destination, None);
    assert!(!selection.both_set());
}

#[test]
fn setters_do_not_cross_validate() {
    // Equal ends are caught by the calculate action, not here.
    let mut selection = SelectionState::default();
    selection.set_origin(Some(2));
    selection.set_destination(Some(2));
    assert_eq!(selection.origin, Some(2));
    assert_eq!(selection.destination, Some(2));
}

#[test]
fn clear_resets_both_ends() {
    let mut selection = SelectionState::default();
    selection.set_origin(Some(1));
    selection.set_destination(Some(4));
    selection.clear();
    assert_eq!(selection, SelectionState::default());
}

#[test]
fn first_click_sets_the_origin() {
    let mut selection = SelectionState::default();
    assert_eq!(selection.handle_node_click(3), ClickOutcome::OriginSet(3));
    assert_eq!(selection.origin, Some(3));
    assert_eq!(selection.destination, None);
}

#[test]
fn second_click_on_a_different_node_sets_the_destination() {
    let mut selection = SelectionState::default();
    selection.handle_node_click(3);
    assert_eq!(selection.handle_node_click(5), ClickOutcome::DestinationSet(5));
    assert_eq!(selection.origin, Some(3));
    assert_eq!(selection.destination, Some(5));
}

#[test]
fn clicking_the_origin_again_does_nothing() {
    let mut selection = SelectionState::default();
    selection.handle_node_click(3);
    assert_eq!(selection.handle_node_click(3), ClickOutcome::Ignored);
    assert_eq!(selection.origin, Some(3));
    assert_eq!(selection.destination, None);
}

#[test]
fn clicks_after_both_ends_are_set_are_ignored() {
    let mut selection = SelectionState::default();
    selection.handle_node_click(0);
    selection.handle_node_click(1);
    assert_eq!(selection.handle_node_click(2), ClickOutcome::Ignored);
    assert_eq!(selection.origin, Some(0));
    assert_eq!(selection.destination, Some(1));
}

#[test]
fn dropdown_origin_and_canvas_click_converge() {
    // Origin picked externally, click supplies only the destination.
    let mut selection = SelectionState::default();
    selection.set_origin(Some(2));
    assert_eq!(selection.handle_node_click(4), ClickOutcome::DestinationSet(4));
    assert_eq!(selection.destination, Some(4));
}

#[test]
fn point_inside_a_node_circle_resolves_to_that_node() {
    let graph = demo_graph();
    // Stop 2 sits at (550, 100).
    assert_eq!(node_at_point(&graph, 560.0, 110.0, 25.0), Some(2));
}

#[test]
fn point_on_the_radius_boundary_still_hits() {
    let graph = demo_graph();
    // Stop 0 sits at (150, 100); this point is exactly 25 away.
    assert_eq!(node_at_point(&graph, 175.0, 100.0, 25.0), Some(0));
}

#[test]
fn point_outside_every_circle_resolves_to_none() {
    let graph = demo_graph();
    assert_eq!(node_at_point(&graph, 300.0, 200.0, 25.0), None);
}

#[test]
fn overlapping_nodes_resolve_to_the_lowest_id() {
    let positions = vec![
        Position { x: 100.0, y: 100.0 },
        Position { x: 100.0, y: 100.0 },
        Position { x: 110.0, y: 100.0 },
    ];
    let graph = Graph::new(positions, &[(0, 1, 1.0)]).unwrap();
    assert_eq!(node_at_point(&graph, 105.0, 100.0, 25.0), Some(0));
}
