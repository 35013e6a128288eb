use crate::{
    application::services::CaseDetailService,
    domain::derivations::today_string,
    presentation::dto::{
        Validate,
        case_detail_dto::{CaseDetailRequest, CaseDetailResponse},
    },
    shared::error::AppError,
};
use std::sync::Arc;

pub struct CaseDetailHandler {
    case_detail_service: Arc<CaseDetailService>,
}

impl CaseDetailHandler {
    pub fn new(case_detail_service: Arc<CaseDetailService>) -> Self {
        Self {
            case_detail_service,
        }
    }

    pub async fn get_case_detail(
        &self,
        request: CaseDetailRequest,
    ) -> Result<CaseDetailResponse, AppError> {
        request.validate().map_err(AppError::InvalidInput)?;

        let detail = self.case_detail_service.load(&request.case_id).await?;
        Ok(CaseDetailResponse::from_detail(detail, &today_string()))
    }
}
