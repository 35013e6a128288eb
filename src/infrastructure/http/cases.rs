use super::ApiClient;
use super::api_client::api_path;
use crate::domain::entities::{Case, CaseInput, CaseListQuery};
use crate::shared::error::AppError;
use reqwest::Method;

impl ApiClient {
    pub async fn list_cases(
        &self,
        token: Option<&str>,
        query: &CaseListQuery,
    ) -> Result<Vec<Case>, AppError> {
        self.get_json_with_query("/api/v1/cases", token, query, "Gagal memuat daftar berkas")
            .await
    }

    pub async fn get_case(&self, token: Option<&str>, case_id: &str) -> Result<Case, AppError> {
        self.get_json(&api_path(&["cases", case_id])?, token, "Gagal memuat berkas")
            .await
    }

    pub async fn create_case(
        &self,
        token: Option<&str>,
        input: &CaseInput,
    ) -> Result<Case, AppError> {
        self.send_json(Method::POST, "/api/v1/cases", token, input, "Gagal membuat berkas")
            .await
    }

    pub async fn update_case(
        &self,
        token: Option<&str>,
        case_id: &str,
        input: &CaseInput,
    ) -> Result<Case, AppError> {
        self.send_json(
            Method::PUT,
            &api_path(&["cases", case_id])?,
            token,
            input,
            "Gagal memperbarui berkas",
        )
        .await
    }

    pub async fn delete_case(&self, token: Option<&str>, case_id: &str) -> Result<(), AppError> {
        self.delete(&api_path(&["cases", case_id])?, token, "Gagal menghapus berkas")
            .await
    }
}
