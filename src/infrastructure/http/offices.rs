use super::ApiClient;
use super::api_client::api_path;
use crate::domain::entities::{Office, OfficeInput, Role};
use crate::shared::error::AppError;
use reqwest::Method;

impl ApiClient {
    pub async fn list_offices(&self, token: Option<&str>) -> Result<Vec<Office>, AppError> {
        self.get_json("/api/v1/offices", token, "Gagal memuat kantor")
            .await
    }

    pub async fn create_office(
        &self,
        token: Option<&str>,
        input: &OfficeInput,
    ) -> Result<Office, AppError> {
        self.send_json(Method::POST, "/api/v1/offices", token, input, "Gagal membuat kantor")
            .await
    }

    pub async fn update_office(
        &self,
        token: Option<&str>,
        office_id: &str,
        input: &OfficeInput,
    ) -> Result<Office, AppError> {
        self.send_json(
            Method::PUT,
            &api_path(&["offices", office_id])?,
            token,
            input,
            "Gagal memperbarui kantor",
        )
        .await
    }

    pub async fn list_roles(&self, token: Option<&str>) -> Result<Vec<Role>, AppError> {
        self.get_json("/api/v1/roles", token, "Gagal memuat peran")
            .await
    }
}
