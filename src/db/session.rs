//! Session-scoped operation wrapper.
//!
//! Every handler runs its unit of work through [`with_session`]: the wrapper
//! opens a transactional session, invokes the work with it, commits on
//! success, rolls back on failure, and normalizes the outcome into an
//! [`Envelope`]. Callers never see a raised fault and no transaction is left
//! open after the call returns.
//!
//! Code that already holds a session (the seeder) calls the row-level
//! operations directly; the wrapper only commits transactions it opened
//! itself.

use crate::error::AppResult;
use crate::models::Envelope;
use futures_util::future::BoxFuture;
use serde::Serialize;
use sqlx::{Sqlite, Transaction};
use tracing::{debug, error, warn};

use super::store::Store;

/// The transactional handle supplied to units of work.
pub type Session = Transaction<'static, Sqlite>;

/// Run `op` inside its own transaction and envelope the outcome.
///
/// - `Ok(value)` commits and yields `{"success": true, "data": <value>}`
///   (or a bare `{"success": true}` for empty results).
/// - `Err(err)` rolls back and yields `{"error": "<message>"}`.
/// - Failures to open, commit, or roll back are themselves enveloped,
///   never propagated.
pub async fn with_session<T, F>(store: &Store, op: F) -> Envelope
where
    T: Serialize,
    F: for<'c> FnOnce(&'c mut Session) -> BoxFuture<'c, AppResult<T>>,
{
    let mut session = match store.begin().await {
        Ok(session) => session,
        Err(err) => {
            error!(error = %err, "Failed to open database session");
            return Envelope::error(err.to_string());
        }
    };

    match op(&mut session).await {
        Ok(value) => match session.commit().await {
            Ok(()) => Envelope::success(value),
            Err(err) => {
                error!(error = %err, "Failed to commit session");
                Envelope::error(err.to_string())
            }
        },
        Err(err) => {
            if err.is_client_error() {
                debug!(error = %err, "Operation rejected, rolling back");
            } else {
                warn!(error = %err, "Operation failed, rolling back");
            }
            if let Err(rollback_err) = session.rollback().await {
                warn!(error = %rollback_err, "Rollback failed");
            }
            Envelope::error(err.to_string())
        }
    }
}
