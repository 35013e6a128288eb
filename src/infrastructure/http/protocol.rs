use super::ApiClient;
use super::api_client::api_path;
use crate::domain::entities::{KlapperEntry, KlapperQuery, ProtocolEntry, ProtocolQuery};
use crate::shared::error::AppError;

impl ApiClient {
    pub async fn list_protocol_entries(
        &self,
        token: Option<&str>,
        query: &ProtocolQuery,
    ) -> Result<Vec<ProtocolEntry>, AppError> {
        self.get_json_with_query("/api/v1/protocol", token, query, "Gagal memuat protokol")
            .await
    }

    pub async fn get_protocol_entry(
        &self,
        token: Option<&str>,
        entry_id: &str,
    ) -> Result<ProtocolEntry, AppError> {
        self.get_json(&api_path(&["protocol", entry_id])?, token, "Gagal memuat protokol")
            .await
    }

    pub async fn list_klapper_entries(
        &self,
        token: Option<&str>,
        query: &KlapperQuery,
    ) -> Result<Vec<KlapperEntry>, AppError> {
        self.get_json_with_query("/api/v1/klapper", token, query, "Gagal memuat klapper")
            .await
    }
}
