//! User handlers.
//!
//! Backs the `users://` resources and the `create_user` tool.

use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::db::{Store, users, with_session};
use crate::error::AppError;
use crate::models::{Envelope, UserPayload, UserProfilePayload, UsersPayload};

/// Input for the create_user tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateUserInput {
    /// Username for the new user. Must not collide with an existing user.
    pub username: String,
    /// Email address for the new user. Must not collide with an existing user.
    pub email: String,
}

pub struct UserToolHandler {
    store: Arc<Store>,
}

impl UserToolHandler {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// All users with their post counts.
    pub async fn list_users(&self) -> Envelope {
        with_session(&self.store, |session| {
            Box::pin(async move {
                let users = users::list_with_post_counts(session).await?;
                Ok(UsersPayload { users })
            })
        })
        .await
    }

    /// A single user profile, or a structured not-found error.
    pub async fn get_user_profile(&self, user_id: i64) -> Envelope {
        with_session(&self.store, move |session| {
            Box::pin(async move {
                match users::find_with_post_count(session, user_id).await? {
                    Some(user) => Ok(UserProfilePayload { user }),
                    None => Err(AppError::not_found("User", user_id)),
                }
            })
        })
        .await
    }

    /// Create a user, rejecting duplicate usernames or emails.
    pub async fn create_user(&self, input: CreateUserInput) -> Envelope {
        with_session(&self.store, move |session| {
            Box::pin(async move {
                if users::username_or_email_exists(session, &input.username, &input.email).await? {
                    return Err(AppError::validation("Username or email already exists"));
                }

                let user = users::insert(session, &input.username, &input.email).await?;
                info!(user_id = user.id, username = %user.username, "User created");
                Ok(UserPayload { user })
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_input_parsing() {
        let json = r#"{"username": "ada", "email": "ada@example.com"}"#;
        let input: CreateUserInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.username, "ada");
        assert_eq!(input.email, "ada@example.com");
    }

    #[test]
    fn test_create_user_input_rejects_missing_email() {
        let json = r#"{"username": "ada"}"#;
        assert!(serde_json::from_str::<CreateUserInput>(json).is_err());
    }
}
