//! # User Endpoints
//!
//! User administration and the signed-in user's own profile.

use shared::{
    ApiResponse, MessageResponse, Profile, UpdateProfileRequest, UpdateUserRequest, User,
    UserListParams,
};

use super::client::{path, query_pairs, ApiClient};
use crate::core::Result;

impl ApiClient {
    pub async fn get_users(&self, params: &UserListParams) -> Result<ApiResponse<Vec<User>>> {
        self.send_get("/users", query_pairs(params)?).await
    }

    pub async fn get_user(&self, id: &str) -> Result<ApiResponse<User>> {
        self.send_get(&path(&["users", id]), Vec::new()).await
    }

    pub async fn update_user(&self, id: &str, request: &UpdateUserRequest) -> Result<ApiResponse<User>> {
        self.send_put(&path(&["users", id]), request).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<MessageResponse> {
        self.send_delete(&path(&["users", id])).await
    }

    /// Profile of the user the current token belongs to.
    #[tracing::instrument(skip(self))]
    pub async fn get_profile(&self) -> Result<ApiResponse<Profile>> {
        self.send_get("/users/profile", Vec::new()).await
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<ApiResponse<Profile>> {
        self.send_put("/users/profile", request).await
    }
}
