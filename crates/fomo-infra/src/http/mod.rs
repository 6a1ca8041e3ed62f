//! REST adapters for the FOMO backend.

mod admin;
mod analytics;
mod content;
mod registration;

pub use admin::HttpAdminAuth;
pub use analytics::HttpAnalytics;
pub use content::{HttpCollection, HttpRoadmap, HttpSettings};
pub use registration::HttpRegistrationApi;

use std::time::Duration;

use anyhow::Context;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use fomo_core::admin::AdminSession;
use fomo_core::ports::{ContentApiError, RegistrationApiError};

/// Shared HTTP client bound to the API base URL (e.g. `https://host/api`).
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `path` with one extra, percent-encoded segment appended.
    pub(crate) fn segment_url(&self, path: &str, segment: &str) -> Result<Url, HttpFailure> {
        let mut url = Url::parse(&self.url(path))
            .map_err(|err| HttpFailure::Transport(format!("invalid API url: {err}")))?;
        url.path_segments_mut()
            .map_err(|_| HttpFailure::Transport("API base url cannot carry a path".to_string()))?
            .push(segment);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.http.put(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.url(path))
    }

    pub(crate) fn authorized(request: RequestBuilder, session: &AdminSession) -> RequestBuilder {
        request.header(AUTHORIZATION, session.bearer())
    }

    /// Sends the request and decodes a JSON body.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, HttpFailure> {
        let response = Self::send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| HttpFailure::Decode(err.to_string()))
    }

    /// Sends the request and ignores any response body.
    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<(), HttpFailure> {
        Self::send(request).await.map(|_| ())
    }

    async fn send(request: RequestBuilder) -> Result<reqwest::Response, HttpFailure> {
        let response = request.send().await.map_err(HttpFailure::from)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let detail = error_detail(&body);
        debug!(status = %status, detail = ?detail, "api request rejected");
        Err(HttpFailure::Status { status, detail })
    }
}

/// Failure of a single API call, before it is mapped to a port error.
#[derive(Debug)]
pub enum HttpFailure {
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
    Transport(String),
    Decode(String),
}

impl From<reqwest::Error> for HttpFailure {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            HttpFailure::Decode(error.to_string())
        } else if let Some(status) = error.status() {
            HttpFailure::Status {
                status,
                detail: None,
            }
        } else {
            HttpFailure::Transport(error.to_string())
        }
    }
}

impl From<HttpFailure> for RegistrationApiError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Status { status, detail } => RegistrationApiError::Rejected {
                status: status.as_u16(),
                detail,
            },
            HttpFailure::Transport(message) => RegistrationApiError::Transport(message),
            HttpFailure::Decode(message) => RegistrationApiError::Decode(message),
        }
    }
}

impl From<HttpFailure> for ContentApiError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Status { status, .. } if status == StatusCode::UNAUTHORIZED => {
                ContentApiError::Unauthorized
            }
            HttpFailure::Status { status, detail } if status == StatusCode::NOT_FOUND => {
                ContentApiError::NotFound(detail.unwrap_or_else(|| "resource".to_string()))
            }
            HttpFailure::Status { status, detail } => ContentApiError::Rejected {
                status: status.as_u16(),
                detail,
            },
            HttpFailure::Transport(message) => ContentApiError::Transport(message),
            HttpFailure::Decode(message) => ContentApiError::Decode(message),
        }
    }
}

/// Extracts `{"detail": "..."}` from an error body. Structured validation
/// details are not surfaced.
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|detail| detail.as_str())
        .map(str::to_string)
        .filter(|detail| !detail.trim().is_empty())
}
