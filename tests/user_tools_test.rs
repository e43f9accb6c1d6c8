//! Integration tests for user handlers.
//!
//! Tests verify that:
//! - Creating a user returns the stored record with a fresh id
//! - Duplicate usernames and emails are rejected without inserting
//! - Listings inline the derived post count
//! - Missing profiles are reported as error envelopes, not faults

use blog_mcp_server::db::Store;
use blog_mcp_server::tools::{
    CreatePostInput, CreateUserInput, PostToolHandler, UserToolHandler,
};
use std::collections::HashSet;
use std::sync::Arc;

async fn setup() -> (Arc<Store>, UserToolHandler) {
    let store = Arc::new(Store::in_memory().await.unwrap());
    let handler = UserToolHandler::new(store.clone());
    (store, handler)
}

fn input(username: &str, email: &str) -> CreateUserInput {
    CreateUserInput {
        username: username.to_string(),
        email: email.to_string(),
    }
}

#[tokio::test]
async fn test_create_user_returns_created_record() {
    let (_store, handler) = setup().await;

    let envelope = handler.create_user(input("ada", "ada@example.com")).await;
    assert!(envelope.is_success());

    let user = &envelope.data().unwrap()["user"];
    assert_eq!(user["id"], 1);
    assert_eq!(user["username"], "ada");
    assert_eq!(user["email"], "ada@example.com");
    assert!(user["created_at"].is_string());
}

#[tokio::test]
async fn test_duplicate_username_is_rejected_without_insert() {
    let (_store, handler) = setup().await;

    handler.create_user(input("ada", "ada@example.com")).await;
    let envelope = handler.create_user(input("ada", "other@example.com")).await;

    assert_eq!(
        envelope.error_message(),
        Some("Username or email already exists")
    );

    let listing = handler.list_users().await;
    assert_eq!(listing.data().unwrap()["users"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_email_is_rejected_without_insert() {
    let (_store, handler) = setup().await;

    handler.create_user(input("ada", "ada@example.com")).await;
    let envelope = handler.create_user(input("grace", "ada@example.com")).await;

    assert_eq!(
        envelope.error_message(),
        Some("Username or email already exists")
    );

    let listing = handler.list_users().await;
    assert_eq!(listing.data().unwrap()["users"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_successful_creates_return_fresh_ids() {
    let (_store, handler) = setup().await;

    let mut seen = HashSet::new();
    for (username, email) in [
        ("ada", "ada@example.com"),
        ("grace", "grace@example.com"),
        ("edsger", "edsger@example.com"),
    ] {
        let envelope = handler.create_user(input(username, email)).await;
        let id = envelope.data().unwrap()["user"]["id"].as_i64().unwrap();
        assert!(seen.insert(id), "id {} returned twice", id);
    }
}

#[tokio::test]
async fn test_list_users_inlines_post_counts() {
    let (store, handler) = setup().await;
    let post_handler = PostToolHandler::new(store.clone());

    let envelope = handler.create_user(input("ada", "ada@example.com")).await;
    let user_id = envelope.data().unwrap()["user"]["id"].as_i64().unwrap();

    for title in ["Notes", "More notes"] {
        let envelope = post_handler
            .create_post(CreatePostInput {
                title: title.to_string(),
                content: "...".to_string(),
                user_id,
            })
            .await;
        assert!(envelope.is_success());
    }

    let listing = handler.list_users().await;
    let users = listing.data().unwrap()["users"].as_array().unwrap().clone();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["post_count"], 2);
}

#[tokio::test]
async fn test_get_user_profile_found_and_missing() {
    let (_store, handler) = setup().await;

    handler.create_user(input("ada", "ada@example.com")).await;

    let found = handler.get_user_profile(1).await;
    assert!(found.is_success());
    assert_eq!(found.data().unwrap()["user"]["username"], "ada");
    assert_eq!(found.data().unwrap()["user"]["post_count"], 0);

    let missing = handler.get_user_profile(99).await;
    assert_eq!(missing.error_message(), Some("User with ID 99 not found"));
}
