//! Error types for the Blog MCP Server.
//!
//! This module defines all error types using `thiserror` for ergonomic error
//! handling. Domain failures (duplicates, missing records) are surfaced to MCP
//! clients as `{"error": ...}` envelopes rather than protocol errors; the
//! `rmcp::ErrorData` conversion below is reserved for transport-level concerns
//! such as unknown resource URIs or missing prompt arguments.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Connection failed: {message}")]
    Connection { message: String },

    #[error("Database error: {message}")]
    Database {
        message: String,
        /// e.g., "2067" for a SQLite UNIQUE constraint violation
        sql_state: Option<String>,
    },

    #[error("{message}")]
    Validation { message: String },

    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a database error with optional SQL state.
    pub fn database(message: impl Into<String>, sql_state: Option<String>) -> Self {
        Self::Database {
            message: message.into(),
            sql_state,
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not-found error for a record type and id.
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for failures the client caused (bad input, missing record).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::NotFound { .. })
    }
}

/// Convert sqlx errors to AppError.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Configuration(msg) => AppError::connection(msg.to_string()),
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().map(|c| c.to_string());
                AppError::database(db_err.message(), code)
            }
            sqlx::Error::RowNotFound => AppError::database("No rows returned", None),
            sqlx::Error::PoolTimedOut => {
                AppError::connection("Timed out acquiring a connection from the pool")
            }
            sqlx::Error::PoolClosed => AppError::connection("Connection pool is closed"),
            sqlx::Error::Io(io_err) => AppError::connection(format!("I/O error: {}", io_err)),
            sqlx::Error::ColumnNotFound(col) => {
                AppError::internal(format!("Column not found: {}", col))
            }
            sqlx::Error::ColumnDecode { index, source } => {
                AppError::internal(format!("Failed to decode column {}: {}", index, source))
            }
            sqlx::Error::Decode(source) => AppError::internal(format!("Decode error: {}", source)),
            sqlx::Error::WorkerCrashed => AppError::internal("Database worker crashed"),
            _ => AppError::internal(format!("Unknown database error: {}", err)),
        }
    }
}

/// Result type alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Convert AppError to MCP ErrorData for semantic error categorization.
impl From<AppError> for rmcp::ErrorData {
    fn from(err: AppError) -> Self {
        match &err {
            AppError::Validation { .. } => rmcp::ErrorData::invalid_params(err.to_string(), None),
            AppError::NotFound { .. } => rmcp::ErrorData::resource_not_found(err.to_string(), None),
            AppError::Database {
                message, sql_state, ..
            } => {
                let msg = match sql_state {
                    Some(code) => format!("{} (SQLSTATE: {})", message, code),
                    None => message.clone(),
                };
                rmcp::ErrorData::internal_error(msg, None)
            }
            AppError::Connection { .. } | AppError::Internal { .. } => {
                rmcp::ErrorData::internal_error(err.to_string(), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::connection("Failed to open blog.db");
        assert!(err.to_string().contains("Connection failed"));
    }

    #[test]
    fn test_not_found_display() {
        let err = AppError::not_found("User", 42);
        assert_eq!(err.to_string(), "User with ID 42 not found");
    }

    #[test]
    fn test_validation_display_is_bare_message() {
        let err = AppError::validation("Username or email already exists");
        assert_eq!(err.to_string(), "Username or email already exists");
    }

    #[test]
    fn test_is_client_error() {
        assert!(AppError::validation("dup").is_client_error());
        assert!(AppError::not_found("Post", 1).is_client_error());
        assert!(!AppError::internal("boom").is_client_error());
    }

    // Tests for From<AppError> for rmcp::ErrorData

    #[test]
    fn test_validation_maps_to_invalid_params() {
        let mcp_err: rmcp::ErrorData = AppError::validation("bad input").into();
        // invalid_params uses -32602
        assert_eq!(mcp_err.code.0, -32602);
    }

    #[test]
    fn test_not_found_maps_to_resource_not_found() {
        let mcp_err: rmcp::ErrorData = AppError::not_found("User", 7).into();
        // resource_not_found uses -32002 in rmcp
        assert_eq!(mcp_err.code.0, -32002);
    }

    #[test]
    fn test_database_maps_to_internal_error() {
        let mcp_err: rmcp::ErrorData =
            AppError::database("UNIQUE constraint failed", Some("2067".to_string())).into();
        // internal_error uses -32603
        assert_eq!(mcp_err.code.0, -32603);
        assert!(mcp_err.message.contains("2067"));
    }

    #[test]
    fn test_internal_maps_to_internal_error() {
        let mcp_err: rmcp::ErrorData = AppError::internal("unknown error").into();
        assert_eq!(mcp_err.code.0, -32603);
    }
}
