pub mod auth_gateway;
pub mod case_gateway;
pub mod session_store;

pub use auth_gateway::AuthGateway;
pub use case_gateway::CaseGateway;
pub use session_store::SessionStore;
