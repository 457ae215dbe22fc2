mod models;
mod update;

pub use models::{
    FormField, FormState, RouteCommand, RouteRecord, RouteState, RouteSummary, Screen,
    StatusMessage,
};
pub use update::{handle_command, tick_animation};
