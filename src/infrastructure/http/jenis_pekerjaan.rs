use super::ApiClient;
use super::api_client::api_path;
use crate::domain::entities::{JenisPekerjaan, JenisPekerjaanInput};
use crate::shared::error::AppError;
use reqwest::Method;

impl ApiClient {
    pub async fn list_jenis_pekerjaan(
        &self,
        token: Option<&str>,
    ) -> Result<Vec<JenisPekerjaan>, AppError> {
        self.get_json("/api/v1/jenis-pekerjaan", token, "Gagal memuat jenis pekerjaan")
            .await
    }

    pub async fn create_jenis_pekerjaan(
        &self,
        token: Option<&str>,
        input: &JenisPekerjaanInput,
    ) -> Result<JenisPekerjaan, AppError> {
        self.send_json(
            Method::POST,
            "/api/v1/jenis-pekerjaan",
            token,
            input,
            "Gagal membuat jenis pekerjaan",
        )
        .await
    }

    pub async fn update_jenis_pekerjaan(
        &self,
        token: Option<&str>,
        id: &str,
        input: &JenisPekerjaanInput,
    ) -> Result<JenisPekerjaan, AppError> {
        self.send_json(
            Method::PUT,
            &api_path(&["jenis-pekerjaan", id])?,
            token,
            input,
            "Gagal memperbarui jenis pekerjaan",
        )
        .await
    }

    pub async fn delete_jenis_pekerjaan(
        &self,
        token: Option<&str>,
        id: &str,
    ) -> Result<(), AppError> {
        self.delete(
            &api_path(&["jenis-pekerjaan", id])?,
            token,
            "Gagal menghapus jenis pekerjaan",
        )
        .await
    }
}
