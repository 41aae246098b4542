use crate::domain::model::{Role, User};

#[derive(Debug, Clone, PartialEq)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Store seeded with the built-in accounts: admin, john and guest.
    pub fn new() -> Self {
        let mut store = Self::empty();
        store.add(User::new("admin", Role::Admin));
        store.add(User::new("john", Role::User));
        store.add(User::new("guest", Role::User));
        store
    }

    pub fn empty() -> Self {
        Self { users: Vec::new() }
    }

    pub fn add(&mut self, user: User) {
        tracing::debug!("Registered user {}", user);
        self.users.push(user);
    }

    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Case-insensitive, first match wins.
    pub fn login(&self, username: &str) -> Option<&User> {
        let found = self
            .users
            .iter()
            .find(|u| u.username.to_lowercase() == username.to_lowercase());

        match found {
            Some(user) => tracing::info!("Login as {}", user),
            None => tracing::warn!("Unknown user '{}'", username),
        }
        found
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_users() {
        let store = UserStore::new();
        let names: Vec<&str> = store.all().iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["admin", "john", "guest"]);
    }

    #[test]
    fn test_login_is_case_insensitive() {
        let store = UserStore::new();
        let admin = store.login("ADMIN").unwrap();
        assert_eq!(admin.username, "admin");
        assert!(admin.role.is_admin());

        let john = store.login("John").unwrap();
        assert_eq!(john.role, Role::User);
    }

    #[test]
    fn test_login_unknown_user() {
        let store = UserStore::new();
        assert!(store.login("mallory").is_none());
        assert!(UserStore::empty().login("admin").is_none());
    }

    #[test]
    fn test_login_first_match_wins() {
        let mut store = UserStore::empty();
        store.add(User::new("Kim", Role::Admin));
        store.add(User::new("kim", Role::User));
        assert_eq!(store.login("kim").unwrap().role, Role::Admin);
    }
}
