use crate::shared::config::ApiConfig;
use crate::shared::error::AppError;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

const PATH_ROOT: &str = "http://localhost/";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Stateless REST client for the case-management backend.
///
/// Every endpoint takes the bearer token explicitly; `None` sends the request
/// without an `Authorization` header and lets the backend decide.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| AppError::ConfigurationError(err.to_string()))?;
        Self::with_client(client, &config.base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, AppError> {
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = build_url(&self.base_url, path);
        let builder = self
            .client
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        match token {
            Some(token) if !token.is_empty() => builder.bearer_auth(token),
            _ => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        fallback: &str,
    ) -> Result<T, AppError> {
        request_json(self.request(Method::GET, path, token), fallback).await
    }

    pub(crate) async fn get_json_with_query<T, Q>(
        &self,
        path: &str,
        token: Option<&str>,
        query: &Q,
        fallback: &str,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        request_json(self.request(Method::GET, path, token).query(query), fallback).await
    }

    pub(crate) async fn send_json<T, B>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: &B,
        fallback: &str,
    ) -> Result<T, AppError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        request_json(self.request(method, path, token).json(body), fallback).await
    }

    pub(crate) async fn delete(
        &self,
        path: &str,
        token: Option<&str>,
        fallback: &str,
    ) -> Result<(), AppError> {
        request_empty(self.request(Method::DELETE, path, token), fallback).await
    }
}

pub(crate) fn normalize_base_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim().trim_end_matches('/').to_string();
    let url = Url::parse(&trimmed)
        .map_err(|err| AppError::ConfigurationError(format!("Invalid URL: {err}")))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed),
        _ => Err(AppError::ConfigurationError(
            "URL scheme must be http or https".to_string(),
        )),
    }
}

/// Builds `/api/v1/<segments..>`, percent-encoding each segment so ids
/// containing `/`, `?` or `#` stay inside their own path segment.
pub(crate) fn api_path(segments: &[&str]) -> Result<String, AppError> {
    let mut url = Url::parse(PATH_ROOT)
        .map_err(|err| AppError::Internal(format!("Invalid path root: {err}")))?;
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| AppError::Internal("Path root cannot be a base".to_string()))?;
        path.pop_if_empty().extend(["api", "v1"]).extend(segments);
    }
    Ok(url.path().to_string())
}

pub(crate) fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Sends the request and decodes a JSON body.
///
/// The body is parsed whatever the status; on non-2xx its `error` field
/// becomes the error message, or `fallback` when absent.
pub(crate) async fn request_json<T: DeserializeOwned>(
    builder: RequestBuilder,
    fallback: &str,
) -> Result<T, AppError> {
    let (status, body) = execute(builder).await?;
    if !status.is_success() {
        return Err(error_from_body(status, &body, fallback));
    }
    serde_json::from_str(&body).map_err(|err| AppError::DeserializationError(err.to_string()))
}

/// Like [`request_json`] for endpoints whose success body is ignored.
pub(crate) async fn request_empty(builder: RequestBuilder, fallback: &str) -> Result<(), AppError> {
    let (status, body) = execute(builder).await?;
    if !status.is_success() {
        return Err(error_from_body(status, &body, fallback));
    }
    Ok(())
}

async fn execute(builder: RequestBuilder) -> Result<(StatusCode, String), AppError> {
    let (client, request) = builder.build_split();
    let request = request?;
    let method = request.method().clone();
    let path = request.url().path().to_string();
    let response = client.execute(request).await?;
    let status = response.status();
    let body = response.text().await?;
    debug!(%method, %path, status = status.as_u16(), "api request finished");
    Ok((status, body))
}

pub(crate) fn error_from_body(status: StatusCode, body: &str, fallback: &str) -> AppError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    AppError::api(status.as_u16(), message)
}
