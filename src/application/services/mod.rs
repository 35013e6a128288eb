pub mod auth_service;
pub mod case_detail_service;

pub use auth_service::{AuthService, AuthStatus};
pub use case_detail_service::{CaseDetail, CaseDetailService};
