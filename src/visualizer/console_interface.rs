use crate::visualizer::models::{NodeRole, RenderConfig, Scene};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Line};
use ratatui::widgets::{Block, Borders};

/// Surface-coordinate window of a rendered canvas, kept around so terminal
/// mouse clicks can be mapped back onto graph coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanvasViewport {
    pub area: Rect,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl CanvasViewport {
    /// Graph-surface point under a terminal cell, or None when the click
    /// falls outside the canvas interior.
    pub fn surface_point(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let inner = Rect {
            x: self.area.x + 1,
            y: self.area.y + 1,
            width: self.area.width.saturating_sub(2),
            height: self.area.height.saturating_sub(2),
        };
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        if column < inner.x
            || column >= inner.x + inner.width
            || row < inner.y
            || row >= inner.y + inner.height
        {
            return None;
        }

        // Screen rows grow downward, exactly like surface y.
        let fx = (column - inner.x) as f64 + 0.5;
        let fy = (row - inner.y) as f64 + 0.5;
        let x = self.x_bounds[0] + fx / inner.width as f64 * (self.x_bounds[1] - self.x_bounds[0]);
        let y = self.y_bounds[0] + fy / inner.height as f64 * (self.y_bounds[1] - self.y_bounds[0]);
        Some((x, y))
    }
}

/// Axis-aligned window containing every node circle plus a margin.
pub fn scene_bounds(scene: &Scene, node_radius: f64) -> ([f64; 2], [f64; 2]) {
    let margin = node_radius * 2.0;
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for node in &scene.nodes {
        x_min = x_min.min(node.x);
        x_max = x_max.max(node.x);
        y_min = y_min.min(node.y);
        y_max = y_max.max(node.y);
    }
    if scene.nodes.is_empty() {
        return ([0.0, 1.0], [0.0, 1.0]);
    }
    ([x_min - margin, x_max + margin], [y_min - margin, y_max + margin])
}

/// Paints the scene onto a ratatui canvas. Surface y grows downward while
/// canvas y grows upward, so every y is flipped inside the bounds.
pub fn render_scene(
    frame: &mut Frame,
    area: Rect,
    scene: &Scene,
    config: &RenderConfig,
) -> CanvasViewport {
    let (x_bounds, y_bounds) = scene_bounds(scene, config.node_radius);
    let flip = |y: f64| y_bounds[0] + y_bounds[1] - y;
    let palette = config.palette;

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("Network"))
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for edge in &scene.edges {
                let from = &scene.nodes[edge.from];
                let to = &scene.nodes[edge.to];
                let color = if edge.on_path { palette.edge_on_path } else { palette.edge_default };
                ctx.draw(&Line {
                    x1: from.x,
                    y1: flip(from.y),
                    x2: to.x,
                    y2: flip(to.y),
                    color,
                });
            }

            ctx.layer();

            // Weight labels at edge midpoints, then the node circles on top.
            for edge in &scene.edges {
                let from = &scene.nodes[edge.from];
                let to = &scene.nodes[edge.to];
                let mid_x = (from.x + to.x) / 2.0;
                let mid_y = (from.y + to.y) / 2.0;
                let color = if edge.on_path { palette.edge_on_path } else { palette.edge_default };
                ctx.print(
                    mid_x,
                    flip(mid_y),
                    Span::styled(format!("{}s", edge.weight), Style::default().fg(color)),
                );
            }

            for node in &scene.nodes {
                let color = palette.node_color(node.role);
                ctx.draw(&Circle {
                    x: node.x,
                    y: flip(node.y),
                    radius: config.node_radius,
                    color,
                });
                ctx.print(
                    node.x,
                    flip(node.y),
                    Span::styled(node.label.clone(), Style::default().fg(color)),
                );
            }
        });

    frame.render_widget(canvas, area);
    CanvasViewport { area, x_bounds, y_bounds }
}

/// Coarse character rendering of a scene, one cell per `step` surface
/// units. Origin renders as 'O', destination 'D', on-path '*', others 'o'.
pub fn render_scene_to_string(scene: &Scene, step: f64) -> String {
    if scene.nodes.is_empty() {
        return String::new();
    }

    let x_min = scene.nodes.iter().map(|n| n.x).fold(f64::INFINITY, f64::min);
    let y_min = scene.nodes.iter().map(|n| n.y).fold(f64::INFINITY, f64::min);

    let mut cells: Vec<(usize, usize, char)> = scene
        .nodes
        .iter()
        .map(|node| {
            let col = ((node.x - x_min) / step).round() as usize;
            let row = ((node.y - y_min) / step).round() as usize;
            let symbol = match node.role {
                NodeRole::Origin => 'O',
                NodeRole::Destination => 'D',
                NodeRole::OnPath => '*',
                NodeRole::Default => 'o',
            };
            (row, col, symbol)
        })
        .collect();
    cells.sort();

    let rows = cells.iter().map(|&(row, _, _)| row).max().unwrap_or(0) + 1;
    let cols = cells.iter().map(|&(_, col, _)| col).max().unwrap_or(0) + 1;

    let mut grid = vec![vec!['.'; cols]; rows];
    for (row, col, symbol) in cells {
        grid[row][col] = symbol;
    }

    let mut result = String::new();
    for row in grid {
        for symbol in row {
            result.push(symbol);
        }
        result.push('\n');
    }
    result
}
