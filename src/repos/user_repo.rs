/*
 * Responsibility
 * - the fixed login list (not a table); immutable after startup
 * - exact-match credential check against SHA-256 digests
 */
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Permission tier carried in the token's role claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Reader,
    Writer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Reader => "reader",
            Role::Writer => "writer",
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub username: &'static str,
    password_digest: [u8; 32],
    pub role: Role,
}

impl User {
    // Only the digest is kept in memory; comparisons never touch the
    // clear-text password again.
    pub fn new(username: &'static str, password: &str, role: Role) -> Self {
        Self {
            username,
            password_digest: Sha256::digest(password.as_bytes()).into(),
            role,
        }
    }
}

pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The code-defined login list. One reader, one writer.
    pub fn with_default_users() -> Self {
        Self::new(vec![
            User::new("reader", "Walks#Reader1", Role::Reader),
            User::new("writer", "Walks#Writer1", Role::Writer),
        ])
    }

    /// Exact match on both username and password digest, or nothing.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        let digest: [u8; 32] = Sha256::digest(password.as_bytes()).into();
        self.users
            .iter()
            .find(|u| u.username == username && u.password_digest == digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticate_accepts_exact_credentials() {
        let store = UserStore::with_default_users();

        let user = store.authenticate("reader", "Walks#Reader1").unwrap();
        assert_eq!(user.username, "reader");
        assert_eq!(user.role, Role::Reader);

        let user = store.authenticate("writer", "Walks#Writer1").unwrap();
        assert_eq!(user.role, Role::Writer);
    }

    #[test]
    fn authenticate_rejects_wrong_password_and_unknown_user() {
        let store = UserStore::with_default_users();

        assert!(store.authenticate("reader", "Walks#Reader2").is_none());
        assert!(store.authenticate("nobody", "Walks#Reader1").is_none());
        assert!(store.authenticate("reader", "").is_none());
    }

    #[test]
    fn username_match_is_case_sensitive() {
        let store = UserStore::with_default_users();

        assert!(store.authenticate("Reader", "Walks#Reader1").is_none());
    }
}
