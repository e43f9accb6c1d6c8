//! Post handlers.
//!
//! Backs the `posts://` resources and the `create_post` and `search_posts`
//! tools.

use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::db::{Store, posts, users, with_session};
use crate::error::AppError;
use crate::models::{Envelope, PostPayload, PostsPayload, SearchResultsPayload};

/// Input for the create_post tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreatePostInput {
    /// Title of the new post
    pub title: String,
    /// Body content of the new post
    pub content: String,
    /// ID of the authoring user. Must reference an existing user.
    pub user_id: i64,
}

/// Input for the search_posts tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchPostsInput {
    /// Case-insensitive substring matched against post titles and content
    pub query: String,
}

pub struct PostToolHandler {
    store: Arc<Store>,
}

impl PostToolHandler {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// All posts with their authors.
    pub async fn list_posts(&self) -> Envelope {
        with_session(&self.store, |session| {
            Box::pin(async move {
                let posts = posts::list_with_authors(session).await?;
                Ok(PostsPayload { posts })
            })
        })
        .await
    }

    /// A single post with its author, or a structured not-found error.
    pub async fn get_post(&self, post_id: i64) -> Envelope {
        with_session(&self.store, move |session| {
            Box::pin(async move {
                match posts::find_with_author(session, post_id).await? {
                    Some(post) => Ok(PostPayload { post }),
                    None => Err(AppError::not_found("Post", post_id)),
                }
            })
        })
        .await
    }

    /// Create a post, rejecting unknown author ids.
    pub async fn create_post(&self, input: CreatePostInput) -> Envelope {
        with_session(&self.store, move |session| {
            Box::pin(async move {
                let Some(author) = users::find_author(session, input.user_id).await? else {
                    return Err(AppError::not_found("User", input.user_id));
                };

                let post = posts::insert(session, &input.title, &input.content, &author).await?;
                info!(post_id = post.id, user_id = author.id, "Post created");
                Ok(PostPayload { post })
            })
        })
        .await
    }

    /// Case-insensitive substring search over titles and content. An empty
    /// result is a success with `result_count: 0`, never an error.
    pub async fn search_posts(&self, input: SearchPostsInput) -> Envelope {
        with_session(&self.store, move |session| {
            Box::pin(async move {
                let posts = posts::search(session, &input.query).await?;
                Ok(SearchResultsPayload {
                    query: input.query,
                    result_count: posts.len(),
                    posts,
                })
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_input_parsing() {
        let json = r#"{"title": "Hello", "content": "First post", "user_id": 3}"#;
        let input: CreatePostInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.title, "Hello");
        assert_eq!(input.user_id, 3);
    }

    #[test]
    fn test_create_post_input_rejects_missing_user_id() {
        let json = r#"{"title": "Hello", "content": "First post"}"#;
        assert!(serde_json::from_str::<CreatePostInput>(json).is_err());
    }

    #[test]
    fn test_search_input_parsing() {
        let json = r#"{"query": "sourdough"}"#;
        let input: SearchPostsInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.query, "sourdough");
    }
}
