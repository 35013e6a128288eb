mod api_client;
mod auth;
mod cases;
mod clients;
mod documents;
mod gateway;
mod jenis_pekerjaan;
mod offices;
mod protocol;
mod schedule_events;
mod tasks;
mod users;
mod workflow_templates;

pub use api_client::ApiClient;
