use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Workspace-wide counters for the dashboard home page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewStatistics {
    pub total_projects: u64,
    pub total_tasks: u64,
    pub total_documents: u64,
    pub total_users: u64,
    pub total_forum_posts: u64,
    pub tasks_by_status: BTreeMap<String, u64>,
    pub projects_by_status: BTreeMap<String, u64>,
    pub documents_by_category: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectStatistics {
    pub project_id: String,
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub average_progress: f64,
    pub total_documents: u64,
    pub total_members: u64,
    pub tasks_by_status: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStatistics {
    pub user_id: String,
    pub assigned_tasks: u64,
    pub completed_tasks: u64,
    pub documents_uploaded: u64,
    pub comments_written: u64,
    pub projects_joined: u64,
}

impl ProjectStatistics {
    /// Share of completed tasks in percent, 0 when the project has no tasks.
    pub fn completion_rate(&self) -> f64 {
        if self.total_tasks == 0 {
            return 0.0;
        }
        self.completed_tasks as f64 * 100.0 / self.total_tasks as f64
    }
}
