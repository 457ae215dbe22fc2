use crate::animation::RouteAnimation;
use crate::core::{Graph, PathEdge, PathResult};
use crate::visualizer::{RenderConfig, SelectionState};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    Welcome,
    Register,
    Login,
    Main,
}

#[derive(Clone, PartialEq, Debug)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage { text: text.into(), is_error: true }
    }

    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage { text: text.into(), is_error: false }
    }
}

/// Shown once the progress animation reaches 100%.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RouteSummary {
    pub total_time: f64,
    pub cost: f64,
}

/// Everything the main screen needs to compute and animate one route.
pub struct RouteState {
    pub graph: Graph,
    pub config: RenderConfig,
    pub selection: SelectionState,
    pub route: Option<PathResult>,
    pub path_edges: Vec<PathEdge>,
    pub animation: RouteAnimation,
    pub progress: f64,
    pub results: Option<RouteSummary>,
    pub message: Option<StatusMessage>,
}

impl RouteState {
    pub fn new(graph: Graph, config: RenderConfig) -> Self {
        RouteState {
            graph,
            config,
            selection: SelectionState::default(),
            route: None,
            path_edges: Vec::new(),
            animation: RouteAnimation::new(),
            progress: 0.0,
            results: None,
            message: None,
        }
    }

    pub fn current_path(&self) -> &[usize] {
        self.route.as_ref().map(|route| route.nodes.as_slice()).unwrap_or(&[])
    }
}

/// The external command surface of the main screen. Dropdown-style picks and
/// canvas clicks both land here and converge on the same selection setters.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RouteCommand {
    OriginSelected(Option<usize>),
    DestinationSelected(Option<usize>),
    CanvasClick { x: f64, y: f64 },
    CalculateRoute,
    NewRoute,
}

/// One completed route request, appended to the route log by the shell.
#[derive(Clone, PartialEq, Debug)]
pub struct RouteRecord {
    pub origin: usize,
    pub destination: usize,
    pub nodes: Vec<usize>,
    pub total_time: f64,
}

/// One text input of a form.
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    pub masked: bool,
}

impl FormField {
    fn new(label: &'static str, masked: bool) -> Self {
        FormField { label, value: String::new(), masked }
    }
}

pub struct FormState {
    pub fields: Vec<FormField>,
    pub focus: usize,
}

impl FormState {
    pub fn register_form() -> Self {
        FormState {
            fields: vec![
                FormField::new("Name", false),
                FormField::new("Email", false),
                FormField::new("Password", true),
            ],
            focus: 0,
        }
    }

    pub fn login_form() -> Self {
        FormState {
            fields: vec![FormField::new("Email", false), FormField::new("Password", true)],
            focus: 0,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    pub fn push_char(&mut self, ch: char) {
        self.fields[self.focus].value.push(ch);
    }

    pub fn backspace(&mut self) {
        self.fields[self.focus].value.pop();
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields[index].value.trim()
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focus = 0;
    }
}
