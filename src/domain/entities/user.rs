//! User entity for link ownership and authentication.

use chrono::{DateTime, Utc};

/// A registered account that owns shortened links.
///
/// The password is stored as an Argon2id hash; the plaintext never reaches
/// the domain layer.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}
