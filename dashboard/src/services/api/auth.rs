//! # Authentication Endpoints
//!
//! Login, registration, logout and the current-user lookup.

use shared::{
    ApiResponse, AuthPayload, ChangePasswordRequest, LoginRequest, MessageResponse,
    RegisterRequest, SessionUser,
};

use super::client::ApiClient;
use crate::core::Result;

impl ApiClient {
    /// Login with email and password.
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<ApiResponse<AuthPayload>> {
        tracing::info!("Attempting login");
        let response = self.send_post("/auth/login", request).await;
        if response.is_ok() {
            tracing::info!("Login successful");
        }
        response
    }

    /// Register a new account. The backend signs the new user in directly.
    #[tracing::instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse<AuthPayload>> {
        self.send_post("/auth/register", request).await
    }

    /// Invalidate the current token server-side.
    pub async fn logout(&self) -> Result<MessageResponse> {
        self.send_post("/auth/logout", &serde_json::json!({})).await
    }

    /// The user the current token belongs to.
    pub async fn current_user(&self) -> Result<ApiResponse<SessionUser>> {
        self.send_get("/auth/me", Vec::new()).await
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<MessageResponse> {
        self.send_put("/auth/change-password", request).await
    }
}
