//! MCP service implementation using rmcp.
//!
//! This module defines the BlogService struct exposing the users/posts
//! dataset via the MCP protocol: create/search tools, `users://` and
//! `posts://` resources, and the two prompt templates. Every tool call and
//! resource read returns the success/error envelope; protocol-level errors
//! are reserved for unknown URIs, unknown prompts, and missing prompt
//! arguments.

use crate::db::Store;
use crate::mcp::prompts;
use crate::mcp::resources::{self, ResourceRef};
use crate::models::Envelope;
use crate::tools::{
    CreatePostInput, CreateUserInput, PostToolHandler, SearchPostsInput, UserToolHandler,
};
use rmcp::Json;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        ListResourceTemplatesResult, ListResourcesResult, PaginatedRequestParam, ProtocolVersion,
        ReadResourceRequestParam, ReadResourceResult, ResourceContents, ServerCapabilities,
        ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::Value as JsonValue;
use std::sync::Arc;

#[derive(Clone)]
pub struct BlogService {
    /// Shared store handle for all database operations
    store: Arc<Store>,
    /// Tool router for MCP tool dispatch (auto-generated)
    tool_router: ToolRouter<Self>,
}

impl BlogService {
    /// Create a new BlogService instance over a shared store.
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    fn user_handler(&self) -> UserToolHandler {
        UserToolHandler::new(self.store.clone())
    }

    fn post_handler(&self) -> PostToolHandler {
        PostToolHandler::new(self.store.clone())
    }

    /// Serve a parsed resource URI as an envelope.
    async fn read_resource_ref(&self, resource: ResourceRef) -> Envelope {
        match resource {
            ResourceRef::AllUsers => self.user_handler().list_users().await,
            ResourceRef::UserProfile(user_id) => {
                self.user_handler().get_user_profile(user_id).await
            }
            ResourceRef::AllPosts => self.post_handler().list_posts().await,
            ResourceRef::Post(post_id) => self.post_handler().get_post(post_id).await,
        }
    }
}

/// Prompt arguments arrive as JSON values but ids are commonly passed as
/// strings; accept both.
fn argument_as_i64(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[tool_router]
impl BlogService {
    #[tool(
        description = "Create a new user with the given username and email.\nReturns the created record, or an error envelope when the username or email already exists."
    )]
    async fn create_user(
        &self,
        Parameters(input): Parameters<CreateUserInput>,
    ) -> Json<Envelope> {
        Json(self.user_handler().create_user(input).await)
    }

    #[tool(
        description = "Create a new post with the given title, content, and authoring user ID.\nReturns the created record with author info, or an error envelope when the user ID does not exist."
    )]
    async fn create_post(
        &self,
        Parameters(input): Parameters<CreatePostInput>,
    ) -> Json<Envelope> {
        Json(self.post_handler().create_post(input).await)
    }

    #[tool(
        description = "Search posts by title or content.\nCase-insensitive substring match; returns the match count and full records. An empty result is a success, not an error."
    )]
    async fn search_posts(
        &self,
        Parameters(input): Parameters<SearchPostsInput>,
    ) -> Json<Envelope> {
        Json(self.post_handler().search_posts(input).await)
    }
}

#[tool_handler]
impl ServerHandler for BlogService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "blog-mcp-server".to_owned(),
                title: Some("Blog MCP Server".to_owned()),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Users and posts over SQLite.\n\
                \n\
                ## Resources\n\
                - `users://all` - all users with post counts\n\
                - `users://{user_id}/profile` - a single user profile\n\
                - `posts://all` - all posts with authors\n\
                - `posts://{post_id}` - a single post\n\
                \n\
                ## Tools\n\
                - `create_user(username, email)` - both must be unused\n\
                - `create_post(title, content, user_id)` - user_id must exist\n\
                - `search_posts(query)` - case-insensitive substring search\n\
                \n\
                ## Responses\n\
                Every tool call and resource read returns a JSON envelope:\n\
                `{\"success\": true, \"data\": ...}` on success and\n\
                `{\"error\": \"<message>\"}` on failure. Failures such as a\n\
                duplicate username or an unknown ID are reported in the\n\
                envelope, not as protocol errors."
                    .to_string(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: resources::static_resources(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult {
            resource_templates: resources::resource_templates(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let Some(resource) = resources::parse_resource_uri(&uri) else {
            return Err(McpError::resource_not_found(
                format!("Unknown resource URI: {}", uri),
                None,
            ));
        };

        let envelope = self.read_resource_ref(resource).await;
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(envelope.to_json_string(), uri)],
        })
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: prompts::all_prompts(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn get_prompt(
        &self,
        GetPromptRequestParam { name, arguments }: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        match name.as_str() {
            prompts::USER_PROFILE_ANALYSIS => {
                let username = arguments
                    .as_ref()
                    .and_then(|args| args.get("username"))
                    .and_then(|value| value.as_str())
                    .ok_or_else(|| {
                        McpError::invalid_params("Missing required argument: username", None)
                    })?;
                Ok(prompts::user_profile_analysis(username))
            }
            prompts::POST_FEEDBACK => {
                let post_id = arguments
                    .as_ref()
                    .and_then(|args| args.get("post_id"))
                    .and_then(argument_as_i64)
                    .ok_or_else(|| {
                        McpError::invalid_params("Missing required argument: post_id", None)
                    })?;
                Ok(prompts::post_feedback(post_id))
            }
            _ => Err(McpError::invalid_params(
                format!("Unknown prompt: {}", name),
                None,
            )),
        }
    }
}
