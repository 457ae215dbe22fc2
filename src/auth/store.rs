use crate::auth::models::{AuthError, User};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Default)]
struct StoredAccounts {
    users: Vec<User>,
    current: Option<User>,
}

/// Rider accounts plus the active session, persisted as one JSON document.
/// Every mutation rewrites the file, so a fresh load always observes the
/// last completed operation.
pub struct UserStore {
    path: PathBuf,
    users: Vec<User>,
    current: Option<User>,
}

impl UserStore {
    /// Opens the store at `path`; a missing file is an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AuthError> {
        let path = path.as_ref().to_path_buf();

        let stored = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .map_err(|err| AuthError::Storage(err.to_string()))?;
            serde_json::from_str::<StoredAccounts>(&raw)
                .map_err(|err| AuthError::Storage(err.to_string()))?
        } else {
            StoredAccounts::default()
        };

        Ok(UserStore { path, users: stored.users, current: stored.current })
    }

    fn save(&self) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|err| AuthError::Storage(err.to_string()))?;
            }
        }

        let stored = StoredAccounts { users: self.users.clone(), current: self.current.clone() };
        let raw = serde_json::to_string_pretty(&stored)
            .map_err(|err| AuthError::Storage(err.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|err| AuthError::Storage(err.to_string()))
    }

    /// Creates an account. Emails are the unique key.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        if self.users.iter().any(|user| user.email == email) {
            return Err(AuthError::DuplicateEmail);
        }

        self.users.push(User {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        });
        self.save()
    }

    /// Matches email and password against the stored records and caches the
    /// user as the active session.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .users
            .iter()
            .find(|user| user.email == email && user.password == password)
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;

        self.current = Some(user.clone());
        self.save()?;
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.current = None;
        self.save()
    }

    pub fn current_session(&self) -> Option<&User> {
        self.current.as_ref()
    }
}
