use super::ApiClient;
use super::api_client::api_path;
use super::api_client::request_json;
use crate::domain::entities::{
    CaseDocumentEntry, CaseDocumentUpdate, DocumentRequirementTemplate,
    DocumentRequirementTemplateInput, DocumentUpload,
};
use crate::shared::error::AppError;
use reqwest::Method;
use reqwest::multipart::{Form, Part};

impl ApiClient {
    pub async fn list_document_templates(
        &self,
        token: Option<&str>,
    ) -> Result<Vec<DocumentRequirementTemplate>, AppError> {
        self.get_json(
            "/api/v1/document-templates",
            token,
            "Gagal memuat template dokumen",
        )
        .await
    }

    pub async fn create_document_template(
        &self,
        token: Option<&str>,
        input: &DocumentRequirementTemplateInput,
    ) -> Result<DocumentRequirementTemplate, AppError> {
        self.send_json(
            Method::POST,
            "/api/v1/document-templates",
            token,
            input,
            "Gagal membuat template dokumen",
        )
        .await
    }

    pub async fn delete_document_template(
        &self,
        token: Option<&str>,
        template_id: &str,
    ) -> Result<(), AppError> {
        self.delete(
            &api_path(&["document-templates", template_id])?,
            token,
            "Gagal menghapus template dokumen",
        )
        .await
    }

    pub async fn list_case_documents(
        &self,
        token: Option<&str>,
        case_id: &str,
    ) -> Result<Vec<CaseDocumentEntry>, AppError> {
        self.get_json(
            &api_path(&["cases", case_id, "documents"])?,
            token,
            "Gagal memuat dokumen berkas",
        )
        .await
    }

    /// Changes the verification state of one checklist row.
    pub async fn update_case_document(
        &self,
        token: Option<&str>,
        document_id: &str,
        update: &CaseDocumentUpdate,
    ) -> Result<CaseDocumentEntry, AppError> {
        self.send_json(
            Method::PUT,
            &api_path(&["case-documents", document_id])?,
            token,
            update,
            "Gagal memperbarui dokumen",
        )
        .await
    }

    pub async fn upload_case_document(
        &self,
        token: Option<&str>,
        document_id: &str,
        upload: DocumentUpload,
    ) -> Result<CaseDocumentEntry, AppError> {
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.mime_type)
            .map_err(|err| AppError::InvalidInput(format!("Tipe file tidak valid: {err}")))?;
        let form = Form::new().part("file", part);
        let builder = self
            .request(
                Method::POST,
                &api_path(&["case-documents", document_id, "upload"])?,
                token,
            )
            .multipart(form);
        request_json(builder, "Gagal mengunggah dokumen").await
    }
}
