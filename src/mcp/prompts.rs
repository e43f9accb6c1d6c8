//! Prompt templates.
//!
//! Two static prompts: a profile-analysis prompt parameterized by username,
//! and a fixed feedback dialogue parameterized by post id.

use rmcp::model::{GetPromptResult, Prompt, PromptArgument, PromptMessage, PromptMessageRole};

pub const USER_PROFILE_ANALYSIS: &str = "user_profile_analysis";
pub const POST_FEEDBACK: &str = "post_feedback";

/// The prompts advertised by list_prompts.
pub fn all_prompts() -> Vec<Prompt> {
    vec![
        Prompt::new(
            USER_PROFILE_ANALYSIS,
            Some("Prompt for analyzing a user's profile and posts"),
            Some(vec![PromptArgument {
                name: "username".to_string(),
                title: None,
                description: Some("Username of the user to analyze".to_string()),
                required: Some(true),
            }]),
        ),
        Prompt::new(
            POST_FEEDBACK,
            Some("Interactive prompt for providing feedback on a post"),
            Some(vec![PromptArgument {
                name: "post_id".to_string(),
                title: None,
                description: Some("ID of the post to review".to_string()),
                required: Some(true),
            }]),
        ),
    ]
}

/// Build the profile-analysis prompt for a username.
pub fn user_profile_analysis(username: &str) -> GetPromptResult {
    let text = format!(
        "Analyze the profile and posts of user \"{}\".\n\
         \n\
         1. What are the main topics they write about?\n\
         2. What is their writing style?\n\
         3. How active are they based on post frequency?\n\
         4. Provide some suggestions for content they might be interested in creating.",
        username
    );

    GetPromptResult {
        description: Some("Prompt for analyzing a user's profile and posts".to_string()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
    }
}

/// Build the fixed feedback dialogue for a post id.
pub fn post_feedback(post_id: i64) -> GetPromptResult {
    GetPromptResult {
        description: Some("Interactive prompt for providing feedback on a post".to_string()),
        messages: vec![
            PromptMessage::new_text(
                PromptMessageRole::User,
                format!("I'd like feedback on post with ID {}", post_id),
            ),
            PromptMessage::new_text(
                PromptMessageRole::Assistant,
                "I'll help analyze this post. What specific aspects would you like feedback on?",
            ),
            PromptMessage::new_text(
                PromptMessageRole::User,
                "I'm interested in the clarity, engagement potential, and grammar.",
            ),
            PromptMessage::new_text(
                PromptMessageRole::Assistant,
                "I'll analyze those aspects. Let me retrieve the post content first.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_prompts_listed() {
        let prompts = all_prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts.iter().any(|p| p.name == USER_PROFILE_ANALYSIS));
        assert!(prompts.iter().any(|p| p.name == POST_FEEDBACK));
    }

    #[test]
    fn test_user_profile_analysis_interpolates_username() {
        let result = user_profile_analysis("ada");
        assert_eq!(result.messages.len(), 1);
        let rendered = serde_json::to_string(&result.messages[0]).unwrap();
        assert!(rendered.contains("ada"));
        assert!(rendered.contains("writing style"));
    }

    #[test]
    fn test_post_feedback_is_a_four_message_dialogue() {
        let result = post_feedback(7);
        assert_eq!(result.messages.len(), 4);
        let first = serde_json::to_string(&result.messages[0]).unwrap();
        assert!(first.contains("post with ID 7"));
    }
}
