mod console_interface;
mod json_export;
mod models;
mod scene;
mod selection;

pub use console_interface::{CanvasViewport, render_scene, render_scene_to_string, scene_bounds};
pub use json_export::get_json_data;
pub use models::{
    ClickOutcome, EdgeVisual, NodeRole, NodeVisual, Palette, RenderConfig, Scene, SelectionState,
};
pub use scene::build_scene;
pub use selection::node_at_point;
