//! # User Comment Queries
//!
//! Comments written on a user's wall, cached per user. Every successful
//! mutation invalidates all `["comments", "user", ..]` entries so open views
//! refetch.

use std::time::Duration;

use shared::{Comment, CreateCommentRequest, UpdateCommentRequest};

use super::{QueryCache, QueryKey, QueryOptions};
use crate::core::Result;
use crate::query_key;
use crate::services::api::ApiClient;

const USER_COMMENTS_STALE_TIME: Duration = Duration::from_secs(30);

pub fn user_comments_prefix() -> QueryKey {
    query_key!["comments", "user"]
}

#[derive(Clone)]
pub struct UserCommentQueries {
    api: ApiClient,
    cache: QueryCache,
}

impl UserCommentQueries {
    pub fn new(api: ApiClient, cache: QueryCache) -> Self {
        Self { api, cache }
    }

    pub async fn list(&self, user_id: &str) -> Result<Option<Vec<Comment>>> {
        let api = &self.api;
        let options = QueryOptions::default()
            .enabled(!user_id.is_empty())
            .stale_time(USER_COMMENTS_STALE_TIME)
            .retry(1);
        self.cache
            .fetch(&user_comments_prefix().with(user_id), &options, move || async move {
                api.get_user_comments(user_id).await.map(|response| response.data)
            })
            .await
    }

    pub async fn create(&self, request: &CreateCommentRequest) -> Result<Comment> {
        let comment = self.api.create_comment(request).await?.data;
        self.invalidate();
        Ok(comment)
    }

    pub async fn update(&self, id: &str, content: &str) -> Result<Comment> {
        let request = UpdateCommentRequest {
            content: content.to_string(),
        };
        let comment = self.api.update_comment(id, &request).await?.data;
        self.invalidate();
        Ok(comment)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api.delete_comment(id).await?;
        self.invalidate();
        Ok(())
    }

    fn invalidate(&self) {
        self.cache.invalidate(&user_comments_prefix());
    }
}
