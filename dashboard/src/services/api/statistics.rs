//! # Statistics Endpoints

use shared::{ApiResponse, OverviewStatistics, ProjectStatistics, UserStatistics};

use super::client::{path, ApiClient};
use crate::core::Result;

impl ApiClient {
    pub async fn get_overview_statistics(&self) -> Result<ApiResponse<OverviewStatistics>> {
        self.send_get("/statistics/overview", Vec::new()).await
    }

    pub async fn get_project_statistics(&self, project_id: &str) -> Result<ApiResponse<ProjectStatistics>> {
        self.send_get(&path(&["statistics", "projects", project_id]), Vec::new())
            .await
    }

    pub async fn get_user_statistics(&self, user_id: &str) -> Result<ApiResponse<UserStatistics>> {
        self.send_get(&path(&["statistics", "users", user_id]), Vec::new())
            .await
    }
}
