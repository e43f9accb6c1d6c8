//! Integration tests for post handlers.
//!
//! Tests verify that:
//! - Creating a post denormalizes the author into the response
//! - Unknown author ids are rejected without inserting
//! - Search matches title OR content, case-insensitively
//! - An empty search result is a success with result_count 0

use blog_mcp_server::db::Store;
use blog_mcp_server::tools::{
    CreatePostInput, CreateUserInput, PostToolHandler, SearchPostsInput, UserToolHandler,
};
use std::sync::Arc;

/// Store with one user ("ada", id 1) and a post handler over it.
async fn setup() -> (Arc<Store>, PostToolHandler) {
    let store = Arc::new(Store::in_memory().await.unwrap());

    let envelope = UserToolHandler::new(store.clone())
        .create_user(CreateUserInput {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await;
    assert!(envelope.is_success());

    let handler = PostToolHandler::new(store.clone());
    (store, handler)
}

fn post(title: &str, content: &str, user_id: i64) -> CreatePostInput {
    CreatePostInput {
        title: title.to_string(),
        content: content.to_string(),
        user_id,
    }
}

fn search(query: &str) -> SearchPostsInput {
    SearchPostsInput {
        query: query.to_string(),
    }
}

#[tokio::test]
async fn test_create_post_inlines_author() {
    let (_store, handler) = setup().await;

    let envelope = handler.create_post(post("Hello", "First post", 1)).await;
    assert!(envelope.is_success());

    let created = &envelope.data().unwrap()["post"];
    assert_eq!(created["id"], 1);
    assert_eq!(created["title"], "Hello");
    assert_eq!(created["author"]["id"], 1);
    assert_eq!(created["author"]["username"], "ada");
}

#[tokio::test]
async fn test_create_post_unknown_user_is_rejected_without_insert() {
    let (_store, handler) = setup().await;

    let envelope = handler.create_post(post("Hello", "First post", 42)).await;
    assert_eq!(envelope.error_message(), Some("User with ID 42 not found"));

    let listing = handler.list_posts().await;
    assert_eq!(listing.data().unwrap()["posts"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_get_post_found_and_missing() {
    let (_store, handler) = setup().await;

    handler.create_post(post("Hello", "First post", 1)).await;

    let found = handler.get_post(1).await;
    assert!(found.is_success());
    assert_eq!(found.data().unwrap()["post"]["title"], "Hello");

    let missing = handler.get_post(7).await;
    assert_eq!(missing.error_message(), Some("Post with ID 7 not found"));
}

#[tokio::test]
async fn test_search_matches_title_and_content_case_insensitively() {
    let (_store, handler) = setup().await;

    handler
        .create_post(post("Sourdough diary", "Day one of the starter", 1))
        .await;
    handler
        .create_post(post("Trail notes", "Sketching with watercolor pencils", 1))
        .await;

    // Title match, different case
    let envelope = handler.search_posts(search("SOURDOUGH")).await;
    let data = envelope.data().unwrap();
    assert_eq!(data["result_count"], 1);
    assert_eq!(data["posts"][0]["title"], "Sourdough diary");
    assert_eq!(data["query"], "SOURDOUGH");

    // Content match
    let envelope = handler.search_posts(search("watercolor")).await;
    let data = envelope.data().unwrap();
    assert_eq!(data["result_count"], 1);
    assert_eq!(data["posts"][0]["title"], "Trail notes");
}

#[tokio::test]
async fn test_search_with_no_matches_is_a_success() {
    let (_store, handler) = setup().await;

    handler.create_post(post("Hello", "First post", 1)).await;

    let envelope = handler.search_posts(search("zeppelin")).await;
    assert!(envelope.is_success());

    let data = envelope.data().unwrap();
    assert_eq!(data["result_count"], 0);
    assert_eq!(data["posts"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_posts_orders_by_id() {
    let (_store, handler) = setup().await;

    handler.create_post(post("First", "a", 1)).await;
    handler.create_post(post("Second", "b", 1)).await;

    let listing = handler.list_posts().await;
    let posts = listing.data().unwrap()["posts"].as_array().unwrap().clone();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["title"], "First");
    assert_eq!(posts[1]["title"], "Second");
}
