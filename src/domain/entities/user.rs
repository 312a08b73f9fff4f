//! User entity for registered accounts.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// Created once at registration and never mutated or deleted by any exposed
/// operation. The password is only ever held in hashed form.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
