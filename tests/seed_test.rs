//! Integration tests for database seeding.
//!
//! Tests verify that:
//! - An empty database is seeded with 10 users and 1-5 posts each
//! - Seeding is idempotent (a second run changes nothing)
//! - Idempotency holds across process restarts of an on-disk database

use blog_mcp_server::db::{Store, seed, users, with_session};
use blog_mcp_server::models::Envelope;

async fn run_seed(store: &Store) -> Envelope {
    with_session(store, |session| Box::pin(seed(session))).await
}

async fn user_count(store: &Store) -> i64 {
    let envelope = with_session(store, |session| {
        Box::pin(async move { users::count(session).await })
    })
    .await;
    envelope.data().unwrap().as_i64().unwrap()
}

#[tokio::test]
async fn test_seed_populates_empty_database() {
    let store = Store::in_memory().await.unwrap();

    let envelope = run_seed(&store).await;
    assert!(envelope.is_success());

    let data = envelope.data().unwrap();
    assert_eq!(data["seeded"], true);
    assert_eq!(data["users"], 10);

    let posts = data["posts"].as_u64().unwrap();
    assert!(
        (10..=50).contains(&posts),
        "expected 1-5 posts per user, got {} total",
        posts
    );

    assert_eq!(user_count(&store).await, 10);
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let store = Store::in_memory().await.unwrap();

    let first = run_seed(&store).await;
    assert_eq!(first.data().unwrap()["seeded"], true);

    let second = run_seed(&store).await;
    assert!(second.is_success());
    assert_eq!(second.data().unwrap()["seeded"], false);

    assert_eq!(user_count(&store).await, 10);
}

#[tokio::test]
async fn test_seed_skips_on_reopened_database() {
    let temp = tempfile::NamedTempFile::new().unwrap();
    let path = temp.path().to_path_buf();

    {
        let store = Store::open(&path).await.unwrap();
        let envelope = run_seed(&store).await;
        assert_eq!(envelope.data().unwrap()["seeded"], true);
        store.close().await;
    }

    let store = Store::open(&path).await.unwrap();
    let envelope = run_seed(&store).await;
    assert_eq!(envelope.data().unwrap()["seeded"], false);
    assert_eq!(user_count(&store).await, 10);
    store.close().await;
}
