use super::ApiClient;
use super::api_client::api_path;
use crate::domain::entities::{User, UserInput};
use crate::shared::error::AppError;
use reqwest::Method;

impl ApiClient {
    pub async fn list_users(&self, token: Option<&str>) -> Result<Vec<User>, AppError> {
        self.get_json("/api/v1/users", token, "Gagal memuat pengguna")
            .await
    }

    pub async fn create_user(
        &self,
        token: Option<&str>,
        input: &UserInput,
    ) -> Result<User, AppError> {
        self.send_json(Method::POST, "/api/v1/users", token, input, "Gagal membuat pengguna")
            .await
    }

    pub async fn update_user(
        &self,
        token: Option<&str>,
        user_id: &str,
        input: &UserInput,
    ) -> Result<User, AppError> {
        self.send_json(
            Method::PUT,
            &api_path(&["users", user_id])?,
            token,
            input,
            "Gagal memperbarui pengguna",
        )
        .await
    }

    pub async fn delete_user(&self, token: Option<&str>, user_id: &str) -> Result<(), AppError> {
        self.delete(&api_path(&["users", user_id])?, token, "Gagal menghapus pengguna")
            .await
    }
}
