//! User storage.
//!
//! The store is the only shared state in the service. Handlers talk to it
//! through the `UserStore` trait so tests run against an isolated instance
//! instead of process-wide state.

use std::sync::Mutex;

use crate::db::models::User;

/// Returned when an insert would break username uniqueness.
#[derive(Debug, PartialEq, Eq)]
pub struct UsernameTaken;

pub trait UserStore: Send + Sync {
    /// Look up a user by exact, case-sensitive username.
    fn find_by_username(&self, username: &str) -> Option<User>;

    /// First user whose username and password both match exactly.
    fn find_by_credentials(&self, username: &str, password: &str) -> Option<User>;

    /// Append a new user, assigning `id = count + 1`. Leaves the store
    /// untouched if the username is already present.
    fn insert(&self, username: &str, password: &str) -> Result<User, UsernameTaken>;

    fn count(&self) -> usize;
}

/// In-memory store: a mutex-guarded list of users.
///
/// axum serves requests from a multi-threaded runtime, so the lock is what
/// upholds username uniqueness when registrations race. Records live for
/// the process run and are lost on restart.
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    /// Store seeded with the admin account the reference deployment ships
    /// with.
    pub fn with_default_admin() -> Self {
        let store = Self::new();
        store
            .insert("admin", "admin123")
            .expect("empty store cannot hold a duplicate");
        store
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for MemoryUserStore {
    fn find_by_username(&self, username: &str) -> Option<User> {
        let users = self.users.lock().expect("user store lock poisoned");
        users.iter().find(|u| u.username == username).cloned()
    }

    fn find_by_credentials(&self, username: &str, password: &str) -> Option<User> {
        let users = self.users.lock().expect("user store lock poisoned");
        users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .cloned()
    }

    fn insert(&self, username: &str, password: &str) -> Result<User, UsernameTaken> {
        // Uniqueness check and append happen under one lock acquisition so
        // concurrent registers cannot both pass the check.
        let mut users = self.users.lock().expect("user store lock poisoned");
        if users.iter().any(|u| u.username == username) {
            return Err(UsernameTaken);
        }
        let user = User {
            id: users.len() as u32 + 1,
            username: username.to_string(),
            password: password.to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }

    fn count(&self) -> usize {
        self.users.lock().expect("user store lock poisoned").len()
    }
}
