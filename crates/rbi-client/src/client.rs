//! Shared HTTP client behind every API wrapper.

use std::time::Duration;

use rbi_shared::config::ClientSettings;
use rbi_shared::constants::{DEFAULT_LAUNCH_FILE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use reqwest::redirect::Policy;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ClientError;

/// Path the backend redirects to when it wants a launch attempted again.
pub(crate) const START_PATH: &str = "/start";
const MAX_REDIRECTS: usize = 10;

pub(crate) fn is_start_path(url: &Url) -> bool {
    url.path().ends_with(START_PATH)
}

/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    launch_file_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::build(
            base_url,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            DEFAULT_LAUNCH_FILE_URL,
        )
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ClientError> {
        Self::build(
            &settings.base_url,
            Duration::from_secs(settings.timeout_seconds),
            &settings.launch_file_url,
        )
    }

    fn build(
        base_url: &str,
        timeout: Duration,
        launch_file_url: &str,
    ) -> Result<Self, ClientError> {
        Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        // Only the backend's "try again" redirect is followed; the redirect to
        // a launched container is returned to the caller untouched.
        let policy = Policy::custom(|attempt| {
            if attempt.previous().len() < MAX_REDIRECTS && is_start_path(attempt.url()) {
                attempt.follow()
            } else {
                attempt.stop()
            }
        });

        let http = Client::builder().timeout(timeout).redirect(policy).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            launch_file_url: launch_file_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// File opened by [`ApiClient::launch_default_container`].
    pub fn launch_file_url(&self) -> &str {
        &self.launch_file_url
    }

    pub(crate) fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ClientError> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url =
            Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<RequestBuilder, ClientError> {
        let url = self.url(path, query)?;
        debug!(%method, %url, "api request");
        Ok(self.http.request(method, url))
    }

    /// Sends and fails on anything but a 2xx.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, %body, "api request rejected");
            return Err(ClientError::Status { status, body });
        }
        Ok(response)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let request = self.request(Method::GET, path, query)?;
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// POST with an optional JSON body; the backend answers with plain text.
    pub(crate) async fn post_text<B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<String, ClientError> {
        let mut request = self.request(Method::POST, path, query)?;
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = self.send(request).await?;
        Ok(response.text().await?)
    }
}
