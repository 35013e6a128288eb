pub mod ports;
pub mod services;

pub use services::{AuthService, CaseDetail, CaseDetailService};
