use crate::types::{AppError, Result, UserResponse};
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// A stored user account.
#[derive(Debug, Clone)]
pub struct User {
    /// Stable account identifier, bound into issued tokens.
    pub id: Uuid,
    /// Unique username, used as the token subject.
    pub username: String,
    /// Contact email address.
    pub email: String,
    /// Argon2id PHC hash of the password.
    pub password_hash: String,
    /// Account creation time (seconds since epoch).
    pub created_at: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// In-memory user store keyed by username.
///
/// Accounts live for the lifetime of the process. Token verification never
/// reads this store; only registration and login touch it.
#[derive(Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a user, rejecting duplicate usernames.
    pub fn create_user(&self, username: &str, email: &str, password_hash: &str) -> Result<User> {
        let mut users = self.users.write();
        if users.contains_key(username) {
            return Err(AppError::InvalidInput("user already exists".to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now().timestamp(),
        };
        users.insert(username.to_string(), user.clone());

        Ok(user)
    }

    /// Looks a user up by username.
    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.read().get(username).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_fetch_user() {
        let store = UserStore::new();

        let created = store
            .create_user("alice", "alice@example.com", "$argon2id$fake")
            .expect("should create user");
        assert!(!created.id.is_nil());

        let fetched = store
            .get_user_by_username("alice")
            .expect("user should exist");
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.email, "alice@example.com");

        assert!(store.get_user_by_username("bob").is_none());
    }

    #[test]
    fn duplicate_username_is_rejected() {
        let store = UserStore::new();
        let first = store
            .create_user("alice", "alice@example.com", "hash-1")
            .expect("should create user");

        let result = store.create_user("alice", "other@example.com", "hash-2");
        assert!(matches!(result, Err(AppError::InvalidInput(_))));

        // The original account is untouched.
        let fetched = store
            .get_user_by_username("alice")
            .expect("user should exist");
        assert_eq!(fetched.id, first.id);
        assert_eq!(fetched.password_hash, "hash-1");
    }
}
