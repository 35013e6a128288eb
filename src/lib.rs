//! Client library for the notary/PPAT case-management backend.
//!
//! Layers follow the usual split: `domain` holds records and pure view
//! derivations, `application` the ports and services, `infrastructure` the
//! REST client and session store, `presentation` the handlers a UI calls.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod state;

pub use application::services::{AuthService, CaseDetail, CaseDetailService};
pub use infrastructure::{ApiClient, MemorySessionStore};
pub use presentation::dto::ApiResponse;
pub use shared::{AppConfig, AppError, Result};
pub use state::AppState;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Calling this twice is a
/// no-op rather than a panic, so tests and binaries can both use it.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
