//! Cached statistics for the dashboard home, project and user pages.

use std::time::Duration;

use shared::{OverviewStatistics, ProjectStatistics, UserStatistics};

use super::{QueryCache, QueryOptions};
use crate::core::Result;
use crate::query_key;
use crate::services::api::ApiClient;

const STATISTICS_STALE_TIME: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct StatisticsQueries {
    api: ApiClient,
    cache: QueryCache,
}

impl StatisticsQueries {
    pub fn new(api: ApiClient, cache: QueryCache) -> Self {
        Self { api, cache }
    }

    fn options(enabled: bool) -> QueryOptions {
        QueryOptions::default()
            .enabled(enabled)
            .stale_time(STATISTICS_STALE_TIME)
            .retry(1)
    }

    pub async fn overview(&self) -> Result<Option<OverviewStatistics>> {
        let api = &self.api;
        self.cache
            .fetch(&query_key!["statistics", "overview"], &Self::options(true), move || async move {
                api.get_overview_statistics().await.map(|response| response.data)
            })
            .await
    }

    pub async fn project(&self, project_id: &str) -> Result<Option<ProjectStatistics>> {
        let api = &self.api;
        self.cache
            .fetch(
                &query_key!["statistics", "project", project_id],
                &Self::options(!project_id.is_empty()),
                move || async move {
                    api.get_project_statistics(project_id)
                        .await
                        .map(|response| response.data)
                },
            )
            .await
    }

    pub async fn user(&self, user_id: &str) -> Result<Option<UserStatistics>> {
        let api = &self.api;
        self.cache
            .fetch(
                &query_key!["statistics", "user", user_id],
                &Self::options(!user_id.is_empty()),
                move || async move { api.get_user_statistics(user_id).await.map(|response| response.data) },
            )
            .await
    }

    /// Force every statistics view to refetch on next access.
    pub fn invalidate_all(&self) {
        self.cache.invalidate(&query_key!["statistics"]);
    }
}
