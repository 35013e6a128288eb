use super::ApiClient;
use crate::domain::entities::{LoginRequest, LoginResponse};
use crate::shared::error::AppError;
use reqwest::Method;

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.send_json(Method::POST, "/api/v1/auth/login", None, request, "Login gagal")
            .await
    }
}
