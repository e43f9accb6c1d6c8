//! Blog MCP Server Library
//!
//! This library exposes a users/posts SQLite dataset through MCP
//! (Model Context Protocol) resources, tools, and prompts.

pub mod config;
pub mod db;
pub mod error;
pub mod mcp;
pub mod models;
pub mod tools;
pub mod transport;

pub use config::Config;
pub use error::AppError;
pub use mcp::BlogService;
