use crate::animation::route_duration;
use crate::app::models::{RouteCommand, RouteRecord, RouteState, RouteSummary, StatusMessage};
use crate::core::{RATE_PER_SECOND, compute_path, path_edges};
use crate::visualizer::node_at_point;
use std::time::Instant;

/// Applies one main-screen command. Returns the record of a freshly computed
/// route so the shell can append it to the route log; every other command
/// returns None.
pub fn handle_command(
    state: &mut RouteState,
    command: RouteCommand,
    now: Instant,
) -> Option<RouteRecord> {
    // A new action always replaces whatever message the previous one left.
    state.message = None;

    match command {
        RouteCommand::OriginSelected(node) => {
            state.selection.set_origin(node);
            None
        }
        RouteCommand::DestinationSelected(node) => {
            state.selection.set_destination(node);
            None
        }
        RouteCommand::CanvasClick { x, y } => {
            if let Some(node) = node_at_point(&state.graph, x, y, state.config.node_radius) {
                state.selection.handle_node_click(node);
            }
            None
        }
        RouteCommand::CalculateRoute => calculate_route(state, now),
        RouteCommand::NewRoute => {
            // Cancel strictly before clearing, so a stale tick cannot
            // repaint progress over the reset state.
            state.animation.cancel();
            state.selection.clear();
            state.route = None;
            state.path_edges.clear();
            state.progress = 0.0;
            state.results = None;
            None
        }
    }
}

fn calculate_route(state: &mut RouteState, now: Instant) -> Option<RouteRecord> {
    let (Some(origin), Some(destination)) = (state.selection.origin, state.selection.destination)
    else {
        state.message = Some(StatusMessage::error("Pick both an origin and a destination"));
        return None;
    };

    if origin == destination {
        state.message = Some(StatusMessage::error("Origin and destination must be different"));
        return None;
    }

    let route = compute_path(&state.graph, origin, destination);
    if !route.is_reachable() {
        state.message = Some(StatusMessage::error("No route exists between the selected stops"));
        return None;
    }

    // compute_path only emits adjacent node pairs, so a lookup miss here is
    // an engine bug, not a user input problem.
    let edges = path_edges(&state.graph, &route.nodes)
        .unwrap_or_else(|err| panic!("computed route must be connected: {}", err));

    let record = RouteRecord {
        origin,
        destination,
        nodes: route.nodes.clone(),
        total_time: route.total_weight,
    };

    state.animation.cancel();
    state.animation.start(route_duration(route.total_weight), now);
    state.progress = 0.0;
    state.results = None;
    state.path_edges = edges;
    state.route = Some(route);

    Some(record)
}

/// Advances the progress bar; on the completing tick the fare summary
/// becomes available.
pub fn tick_animation(state: &mut RouteState, now: Instant) {
    let Some(tick) = state.animation.tick(now) else {
        return;
    };

    state.progress = tick.fraction;
    if tick.just_completed {
        if let Some(route) = &state.route {
            state.results = Some(RouteSummary {
                total_time: route.total_weight,
                cost: route.total_weight * RATE_PER_SECOND,
            });
        }
    }
}
