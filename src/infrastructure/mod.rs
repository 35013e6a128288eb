pub mod http;
pub mod session;

pub use http::ApiClient;
pub use session::MemorySessionStore;
