// Terminal route planner with ratatui.
// A six-stop demo network, shortest routes by travel time, and a per-second
// fare. Accounts are local JSON records; see exports/ for the stores.

use RouteEngine::auth::UserStore;
use RouteEngine::console_interface::{App, cleanup_terminal, run_app, setup_terminal};
use RouteEngine::core::{compute_path, demo_graph};
use RouteEngine::visualizer::{RenderConfig, get_json_data};
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let switch = std::env::args().nth(1).unwrap_or("interactive".to_string());

    match switch.as_str() {
        "export" => run_export(),
        "interactive" => run_interactive(),
        _ => {
            println!(
                "Unknown mode: {}. Use 'interactive' or 'export'. defaulting to interactive",
                switch
            );
            run_interactive()
        }
    }
}

fn run_interactive() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all("exports")?;
    let store = UserStore::load("exports/users.json")?;
    let mut route_log = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open("exports/route_log.log")?;

    let app = App::new(store, demo_graph(), RenderConfig::default());

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, app, &mut route_log);
    cleanup_terminal()?;
    result
}

fn run_export() -> Result<(), Box<dyn std::error::Error>> {
    let graph = demo_graph();

    // Optional 0-based origin and destination ids.
    let origin: Option<usize> = std::env::args().nth(2).map(|arg| arg.parse()).transpose()?;
    let destination: Option<usize> = std::env::args().nth(3).map(|arg| arg.parse()).transpose()?;

    let route = match (origin, destination) {
        (Some(origin), Some(destination))
            if origin < graph.node_count() && destination < graph.node_count() =>
        {
            Some(compute_path(&graph, origin, destination))
        }
        (Some(_), Some(_)) => {
            println!("Origin and destination must be in 0..{}", graph.node_count());
            None
        }
        _ => None,
    };

    match &route {
        Some(result) if result.is_reachable() => {
            println!("Route {:?} takes {}s", result.nodes, result.total_weight);
        }
        Some(_) => println!("No route between the requested stops"),
        None => {}
    }

    let json_data = get_json_data(&graph, route.as_ref());
    std::fs::create_dir_all("exports")?;
    let mut f = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open("exports/route_graph.json")?;
    f.write_all(json_data.as_bytes())?;
    println!("Network exported to exports/route_graph.json");

    Ok(())
}
