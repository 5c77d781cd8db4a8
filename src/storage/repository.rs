use crate::model::User;

/// Read-only access to user records.
pub trait UserSource: Send + Sync {
    /// All users, in insertion order.
    fn all(&self) -> &[User];

    /// The first user whose id matches `id` exactly (case-sensitive).
    fn find(&self, id: &str) -> Option<&User> {
        self.all().iter().find(|u| u.id == id)
    }
}

/// Immutable in-memory user list, built once at startup.
#[derive(Debug, Clone)]
pub struct UserRepository {
    users: Vec<User>,
}

impl UserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The fixed demo data set.
    pub fn seeded() -> Self {
        Self::new(vec![
            User::new("1", "Alice", "alice@example.com"),
            User::new("2", "Bob", "bob@example.com"),
            User::new("3", "Carol", "carol@example.com"),
        ])
    }
}

impl Default for UserRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

impl UserSource for UserRepository {
    fn all(&self) -> &[User] {
        &self.users
    }
}
