mod models;
mod store;

pub use models::{AuthError, User};
pub use store::UserStore;
