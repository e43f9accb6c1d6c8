//! Resource catalog and URI parsing.
//!
//! The server exposes four resource patterns:
//! - `users://all` - every user with post counts
//! - `users://{user_id}/profile` - a single user profile
//! - `posts://all` - every post with author info
//! - `posts://{post_id}` - a single post

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, Resource, ResourceTemplate};

pub const ALL_USERS_URI: &str = "users://all";
pub const ALL_POSTS_URI: &str = "posts://all";

/// A parsed resource URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceRef {
    AllUsers,
    UserProfile(i64),
    AllPosts,
    Post(i64),
}

/// Parse a resource URI into a [`ResourceRef`]. Returns None for URIs
/// outside the four supported patterns.
pub fn parse_resource_uri(uri: &str) -> Option<ResourceRef> {
    if uri == ALL_USERS_URI {
        return Some(ResourceRef::AllUsers);
    }
    if uri == ALL_POSTS_URI {
        return Some(ResourceRef::AllPosts);
    }
    if let Some(rest) = uri.strip_prefix("users://") {
        return match rest.split_once('/') {
            Some((id, "profile")) => id.parse().ok().map(ResourceRef::UserProfile),
            _ => None,
        };
    }
    if let Some(rest) = uri.strip_prefix("posts://") {
        if rest.contains('/') {
            return None;
        }
        return rest.parse().ok().map(ResourceRef::Post);
    }
    None
}

/// The fixed resources advertised by list_resources.
pub fn static_resources() -> Vec<Resource> {
    let mut all_users = RawResource::new(ALL_USERS_URI, "all_users");
    all_users.description = Some("All users with their post counts".to_string());

    let mut all_posts = RawResource::new(ALL_POSTS_URI, "all_posts");
    all_posts.description = Some("All posts with their authors".to_string());

    vec![all_users.no_annotation(), all_posts.no_annotation()]
}

/// The parameterized resources advertised by list_resource_templates.
pub fn resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: "users://{user_id}/profile".to_string(),
            name: "user_profile".to_string(),
            title: None,
            description: Some("A single user profile with post count".to_string()),
            mime_type: None,
        }
        .no_annotation(),
        RawResourceTemplate {
            uri_template: "posts://{post_id}".to_string(),
            name: "post".to_string(),
            title: None,
            description: Some("A single post with author info".to_string()),
            mime_type: None,
        }
        .no_annotation(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_uris() {
        assert_eq!(parse_resource_uri("users://all"), Some(ResourceRef::AllUsers));
        assert_eq!(parse_resource_uri("posts://all"), Some(ResourceRef::AllPosts));
    }

    #[test]
    fn test_parse_user_profile() {
        assert_eq!(
            parse_resource_uri("users://42/profile"),
            Some(ResourceRef::UserProfile(42))
        );
    }

    #[test]
    fn test_parse_post_by_id() {
        assert_eq!(parse_resource_uri("posts://7"), Some(ResourceRef::Post(7)));
    }

    #[test]
    fn test_parse_rejects_unknown_patterns() {
        assert_eq!(parse_resource_uri("users://42"), None);
        assert_eq!(parse_resource_uri("users://42/posts"), None);
        assert_eq!(parse_resource_uri("users://abc/profile"), None);
        assert_eq!(parse_resource_uri("posts://7/comments"), None);
        assert_eq!(parse_resource_uri("posts://abc"), None);
        assert_eq!(parse_resource_uri("comments://all"), None);
        assert_eq!(parse_resource_uri(""), None);
    }

    #[test]
    fn test_catalog_counts() {
        assert_eq!(static_resources().len(), 2);
        assert_eq!(resource_templates().len(), 2);
    }
}
