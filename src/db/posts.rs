//! Row-level operations on the posts table.
//!
//! Reads join the owning user so every post carries its author inline.

use crate::error::AppResult;
use crate::models::{PostAuthor, PostDetail};
use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use super::session::Session;

/// Number of post rows.
pub async fn count(session: &mut Session) -> AppResult<i64> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM posts")
        .fetch_one(&mut **session)
        .await?;
    Ok(row.try_get("count")?)
}

/// Insert a post for an already-verified author and return the stored record.
pub async fn insert(
    session: &mut Session,
    title: &str,
    content: &str,
    author: &PostAuthor,
) -> AppResult<PostDetail> {
    let created_at = Utc::now();
    let result =
        sqlx::query("INSERT INTO posts (title, content, created_at, user_id) VALUES (?, ?, ?, ?)")
            .bind(title)
            .bind(content)
            .bind(created_at)
            .bind(author.id)
            .execute(&mut **session)
            .await?;

    Ok(PostDetail {
        id: result.last_insert_rowid(),
        title: title.to_string(),
        content: content.to_string(),
        created_at,
        author: author.clone(),
    })
}

/// All posts with their authors, ordered by id.
pub async fn list_with_authors(session: &mut Session) -> AppResult<Vec<PostDetail>> {
    let rows = sqlx::query(
        "SELECT p.id, p.title, p.content, p.created_at, \
                u.id AS author_id, u.username AS author_username \
         FROM posts p JOIN users u ON u.id = p.user_id \
         ORDER BY p.id",
    )
    .fetch_all(&mut **session)
    .await?;

    rows.iter().map(detail_from_row).collect()
}

/// A single post with its author, or None if the id is unknown.
pub async fn find_with_author(
    session: &mut Session,
    post_id: i64,
) -> AppResult<Option<PostDetail>> {
    let row = sqlx::query(
        "SELECT p.id, p.title, p.content, p.created_at, \
                u.id AS author_id, u.username AS author_username \
         FROM posts p JOIN users u ON u.id = p.user_id \
         WHERE p.id = ?",
    )
    .bind(post_id)
    .fetch_optional(&mut **session)
    .await?;

    row.as_ref().map(detail_from_row).transpose()
}

/// Case-insensitive substring search against title OR content.
pub async fn search(session: &mut Session, query: &str) -> AppResult<Vec<PostDetail>> {
    let pattern = format!("%{}%", query.to_lowercase());
    let rows = sqlx::query(
        "SELECT p.id, p.title, p.content, p.created_at, \
                u.id AS author_id, u.username AS author_username \
         FROM posts p JOIN users u ON u.id = p.user_id \
         WHERE lower(p.title) LIKE ? OR lower(p.content) LIKE ? \
         ORDER BY p.id",
    )
    .bind(&pattern)
    .bind(&pattern)
    .fetch_all(&mut **session)
    .await?;

    rows.iter().map(detail_from_row).collect()
}

fn detail_from_row(row: &SqliteRow) -> AppResult<PostDetail> {
    let created_at: DateTime<Utc> = row.try_get("created_at")?;
    Ok(PostDetail {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        created_at,
        author: PostAuthor {
            id: row.try_get("author_id")?,
            username: row.try_get("author_username")?,
        },
    })
}
