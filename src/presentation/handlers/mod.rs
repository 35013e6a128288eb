pub mod auth_handler;
pub mod case_detail_handler;
pub mod schedule_handler;

pub use auth_handler::AuthHandler;
pub use case_detail_handler::CaseDetailHandler;
pub use schedule_handler::ScheduleHandler;
