use serde::{Deserialize, Serialize};
use std::fmt;

/// One registered rider. Passwords are stored as given; this demo's account
/// flow is intentionally local-only plaintext.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AuthError {
    DuplicateEmail,
    InvalidCredentials,
    Storage(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::DuplicateEmail => write!(f, "this email is already registered"),
            AuthError::InvalidCredentials => write!(f, "wrong email or password"),
            AuthError::Storage(reason) => write!(f, "account storage failed: {}", reason),
        }
    }
}

impl std::error::Error for AuthError {}
