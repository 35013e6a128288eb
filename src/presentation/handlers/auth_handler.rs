use crate::{
    application::services::AuthService,
    presentation::dto::{
        Validate,
        auth_dto::{AuthStatusResponse, LoginRequest, SessionResponse},
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct AuthHandler {
    auth_service: Arc<AuthService>,
}

impl AuthHandler {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<SessionResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let session = self
            .auth_service
            .login(&request.email, &request.password)
            .await?;
        Ok(session.into())
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        self.auth_service.logout().await;
        Ok(())
    }

    pub async fn status(&self) -> Result<AuthStatusResponse, AppError> {
        let status = self.auth_service.status().await;
        Ok(AuthStatusResponse {
            is_authenticated: status.is_authenticated,
            current_user: status.session.map(SessionResponse::from),
        })
    }
}
