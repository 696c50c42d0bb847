//! # Forum Post Store

use shared::{ForumPost, ForumPostListParams, ForumPostPayload};

use super::messages::FORUM_POSTS;
use super::state::{ResourceStore, StoreCell};
use crate::core::Result;
use crate::services::api::ApiClient;

#[derive(Clone)]
pub struct ForumPostStore {
    api: ApiClient,
    cell: StoreCell<ForumPost>,
}

impl ResourceStore for ForumPostStore {
    type Item = ForumPost;

    fn cell(&self) -> &StoreCell<ForumPost> {
        &self.cell
    }
}

impl ForumPostStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cell: StoreCell::default(),
        }
    }

    pub async fn fetch_posts(&self, params: &ForumPostListParams) -> Result<Vec<ForumPost>> {
        let response = self
            .cell
            .run(
                "fetch_posts",
                FORUM_POSTS.fetch_list,
                self.api.get_forum_posts(params),
                |state, response| state.replace_all(response.data.clone(), response.count),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn fetch_post(&self, id: &str) -> Result<ForumPost> {
        let response = self
            .cell
            .run(
                "fetch_post",
                FORUM_POSTS.fetch_one,
                self.api.get_forum_post(id),
                |state, response| state.current = Some(response.data.clone()),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn create_post(&self, payload: &ForumPostPayload) -> Result<ForumPost> {
        let response = self
            .cell
            .run(
                "create_post",
                FORUM_POSTS.create,
                self.api.create_forum_post(payload),
                |state, response| state.prepend(response.data.clone()),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn update_post(&self, id: &str, payload: &ForumPostPayload) -> Result<ForumPost> {
        let response = self
            .cell
            .run(
                "update_post",
                FORUM_POSTS.update,
                self.api.update_forum_post(id, payload),
                |state, response| state.replace(&response.data),
            )
            .await?;
        Ok(response.data)
    }

    /// Pin or unpin a post through a partial update.
    pub async fn set_pinned(&self, id: &str, pinned: bool) -> Result<ForumPost> {
        let payload = ForumPostPayload {
            is_pinned: Some(pinned),
            ..Default::default()
        };
        self.update_post(id, &payload).await
    }

    pub async fn delete_post(&self, id: &str) -> Result<()> {
        self.cell
            .run(
                "delete_post",
                FORUM_POSTS.delete,
                self.api.delete_forum_post(id),
                |state, _| state.remove(id),
            )
            .await?;
        Ok(())
    }
}
