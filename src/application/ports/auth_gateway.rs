use crate::domain::entities::{LoginRequest, LoginResponse};
use crate::shared::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError>;
}
