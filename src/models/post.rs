//! Post record and payload shapes.
//!
//! Reads denormalize the owning user into an inline `author` object so a
//! client never needs a second lookup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author info inlined into post reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostAuthor {
    pub id: i64,
    pub username: String,
}

/// A post with its author denormalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: PostAuthor,
}

/// Payload for a single post read or create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPayload {
    pub post: PostDetail,
}

/// Payload for the all-posts listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsPayload {
    pub posts: Vec<PostDetail>,
}

/// Payload for a post search, including the echoed query and match count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultsPayload {
    pub query: String,
    pub result_count: usize,
    pub posts: Vec<PostDetail>,
}
