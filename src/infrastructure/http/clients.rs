use super::ApiClient;
use super::api_client::api_path;
use crate::domain::entities::{Client, ClientInput};
use crate::shared::error::AppError;
use reqwest::Method;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ClientSearch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
}

impl ApiClient {
    pub async fn list_clients(
        &self,
        token: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Client>, AppError> {
        let query = ClientSearch {
            search: search.map(str::trim).filter(|s| !s.is_empty()),
        };
        self.get_json_with_query("/api/v1/clients", token, &query, "Gagal memuat klien")
            .await
    }

    pub async fn get_client(&self, token: Option<&str>, client_id: &str) -> Result<Client, AppError> {
        self.get_json(&api_path(&["clients", client_id])?, token, "Gagal memuat klien")
            .await
    }

    pub async fn create_client(
        &self,
        token: Option<&str>,
        input: &ClientInput,
    ) -> Result<Client, AppError> {
        self.send_json(Method::POST, "/api/v1/clients", token, input, "Gagal membuat klien")
            .await
    }

    pub async fn update_client(
        &self,
        token: Option<&str>,
        client_id: &str,
        input: &ClientInput,
    ) -> Result<Client, AppError> {
        self.send_json(
            Method::PUT,
            &api_path(&["clients", client_id])?,
            token,
            input,
            "Gagal memperbarui klien",
        )
        .await
    }

    pub async fn delete_client(&self, token: Option<&str>, client_id: &str) -> Result<(), AppError> {
        self.delete(&api_path(&["clients", client_id])?, token, "Gagal menghapus klien")
            .await
    }
}
