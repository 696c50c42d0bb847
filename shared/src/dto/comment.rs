use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::envelope::{Entity, Reference};

/// A comment attached to a forum post, task, document or user.
///
/// Replies point at their parent through `parent_comment`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub author: Option<Reference>,
    #[serde(default)]
    pub parent_comment: Option<Reference>,
    #[serde(default)]
    pub forum_post: Option<Reference>,
    #[serde(default)]
    pub task: Option<Reference>,
    #[serde(default)]
    pub document: Option<Reference>,
    #[serde(default)]
    pub user: Option<Reference>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Comment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Comment {
    /// True when this comment is a direct reply to `parent_id`.
    pub fn is_reply_to(&self, parent_id: &str) -> bool {
        self.parent_comment
            .as_ref()
            .is_some_and(|parent| parent.is(parent_id))
    }
}

/// Target filter for `GET /comments`. Exactly one is normally set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forum_post: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Body of `POST /comments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forum_post: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment: Option<String>,
}

/// Body of `PUT /comments/:id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateCommentRequest {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_reply_to() {
        let root: Comment =
            serde_json::from_str(r#"{"_id":"c1","content":"gốc","parentComment":null}"#).unwrap();
        let reply: Comment =
            serde_json::from_str(r#"{"_id":"c2","content":"trả lời","parentComment":"c1"}"#).unwrap();
        let populated: Comment = serde_json::from_str(
            r#"{"_id":"c3","content":"x","parentComment":{"_id":"c1","content":"gốc"}}"#,
        )
        .unwrap();

        assert!(!root.is_reply_to("c1"));
        assert!(reply.is_reply_to("c1"));
        assert!(populated.is_reply_to("c1"));
        assert!(!reply.is_reply_to("c2"));
    }
}
