use ratatui::style::Color;

/// Chosen endpoints for the next route. Both unset initially; setters do no
/// cross-validation, the calculate-route command checks "both set and
/// different" when it fires.
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct SelectionState {
    pub origin: Option<usize>,
    pub destination: Option<usize>,
}

/// What a canvas click did to the selection.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ClickOutcome {
    OriginSet(usize),
    DestinationSet(usize),
    Ignored,
}

/// Fill role of a node, in precedence order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NodeRole {
    Origin,
    Destination,
    OnPath,
    Default,
}

#[derive(Clone, PartialEq, Debug)]
pub struct NodeVisual {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    /// 1-based label shown to riders; ids stay 0-based everywhere else.
    pub label: String,
    pub role: NodeRole,
}

#[derive(Clone, PartialEq, Debug)]
pub struct EdgeVisual {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
    pub on_path: bool,
}

/// Pure description of one frame: every node once, every unordered edge
/// once. Rebuilding from the same inputs yields an equal scene.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<NodeVisual>,
    pub edges: Vec<EdgeVisual>,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Palette {
    pub node_default: Color,
    pub node_origin: Color,
    pub node_destination: Color,
    pub node_on_path: Color,
    pub edge_default: Color,
    pub edge_on_path: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            node_default: Color::Rgb(160, 196, 255),
            node_origin: Color::Rgb(255, 175, 204),
            node_destination: Color::Rgb(155, 246, 255),
            node_on_path: Color::Rgb(253, 255, 182),
            edge_default: Color::Rgb(208, 208, 208),
            edge_on_path: Color::Rgb(253, 255, 182),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RenderConfig {
    pub node_radius: f64,
    pub palette: Palette,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            node_radius: crate::core::NODE_RADIUS,
            palette: Palette::default(),
        }
    }
}

impl Palette {
    pub fn node_color(&self, role: NodeRole) -> Color {
        match role {
            NodeRole::Origin => self.node_origin,
            NodeRole::Destination => self.node_destination,
            NodeRole::OnPath => self.node_on_path,
            NodeRole::Default => self.node_default,
        }
    }
}
