//! User record and payload shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user row as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A user with its derived post count, as returned by reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub post_count: i64,
}

/// Payload for a freshly created user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    pub user: UserRecord,
}

/// Payload for a single user profile read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfilePayload {
    pub user: UserSummary,
}

/// Payload for the all-users listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersPayload {
    pub users: Vec<UserSummary>,
}
