//! Row-level operations on the users table.
//!
//! Each function is a unit of work over a caller-supplied [`Session`];
//! transaction boundaries belong to the caller (usually `with_session`).

use crate::error::AppResult;
use crate::models::{PostAuthor, UserRecord, UserSummary};
use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::session::Session;

/// Number of user rows.
pub async fn count(session: &mut Session) -> AppResult<i64> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM users")
        .fetch_one(&mut **session)
        .await?;
    Ok(row.try_get("count")?)
}

/// True if a user with this username or email already exists.
pub async fn username_or_email_exists(
    session: &mut Session,
    username: &str,
    email: &str,
) -> AppResult<bool> {
    let row = sqlx::query("SELECT 1 FROM users WHERE username = ? OR email = ? LIMIT 1")
        .bind(username)
        .bind(email)
        .fetch_optional(&mut **session)
        .await?;
    Ok(row.is_some())
}

/// Insert a user and return the stored record.
pub async fn insert(session: &mut Session, username: &str, email: &str) -> AppResult<UserRecord> {
    let created_at = Utc::now();
    let result = sqlx::query("INSERT INTO users (username, email, created_at) VALUES (?, ?, ?)")
        .bind(username)
        .bind(email)
        .bind(created_at)
        .execute(&mut **session)
        .await?;

    Ok(UserRecord {
        id: result.last_insert_rowid(),
        username: username.to_string(),
        email: email.to_string(),
        created_at,
    })
}

/// All users with their derived post counts, ordered by id.
pub async fn list_with_post_counts(session: &mut Session) -> AppResult<Vec<UserSummary>> {
    let rows = sqlx::query(
        "SELECT u.id, u.username, u.email, u.created_at, COUNT(p.id) AS post_count \
         FROM users u LEFT JOIN posts p ON p.user_id = u.id \
         GROUP BY u.id ORDER BY u.id",
    )
    .fetch_all(&mut **session)
    .await?;

    rows.iter().map(summary_from_row).collect()
}

/// A single user with post count, or None if the id is unknown.
pub async fn find_with_post_count(
    session: &mut Session,
    user_id: i64,
) -> AppResult<Option<UserSummary>> {
    let row = sqlx::query(
        "SELECT u.id, u.username, u.email, u.created_at, COUNT(p.id) AS post_count \
         FROM users u LEFT JOIN posts p ON p.user_id = u.id \
         WHERE u.id = ? GROUP BY u.id",
    )
    .bind(user_id)
    .fetch_optional(&mut **session)
    .await?;

    row.as_ref().map(summary_from_row).transpose()
}

/// Author info for a post insert, or None if the id is unknown.
pub async fn find_author(session: &mut Session, user_id: i64) -> AppResult<Option<PostAuthor>> {
    let row = sqlx::query("SELECT id, username FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(&mut **session)
        .await?;

    row.map(|row| {
        Ok(PostAuthor {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
        })
    })
    .transpose()
}

fn summary_from_row(row: &SqliteRow) -> AppResult<UserSummary> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(UserSummary {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        created_at,
        post_count: row.try_get("post_count")?,
    })
}
