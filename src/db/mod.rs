//! Database layer.
//!
//! This module provides database access functionality:
//! - Store handle over a SQLite connection pool with schema bootstrap
//! - Session-scoped operation wrapper (commit on success, rollback on failure,
//!   envelope normalization)
//! - Row-level operations for users and posts
//! - Idempotent sample-data seeder

pub mod posts;
pub mod seed;
pub mod session;
pub mod store;
pub mod users;

pub use seed::{SeedSummary, seed};
pub use session::{Session, with_session};
pub use store::Store;
