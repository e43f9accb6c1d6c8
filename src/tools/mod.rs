//! Tool and resource handlers.
//!
//! This module contains the business handlers behind the MCP surface:
//! - `users`: list users, read a profile, create a user
//! - `posts`: list posts, read a post, create a post, search posts
//!
//! Every handler method runs its unit of work through the session wrapper
//! and returns an [`Envelope`](crate::models::Envelope).

pub mod posts;
pub mod users;

pub use posts::{CreatePostInput, PostToolHandler, SearchPostsInput};
pub use users::{CreateUserInput, UserToolHandler};
