//! Container lifecycle operations.

use rbi_core::{ContainerInfo, LaunchContainerRequest, StopContainerRequest};
use reqwest::header::LOCATION;
use reqwest::Method;
use serde::Serialize;
use tracing::{info, warn};
use validator::Validate;

use crate::client::{is_start_path, ApiClient};
use crate::error::ClientError;

/// Result of `POST /start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchedContainer {
    /// Id taken from the backend's redirect, when it sent one.
    pub container_id: Option<String>,
    /// Where the launched session is served, relative to the backend.
    pub location: Option<String>,
    pub message: String,
}

impl LaunchedContainer {
    fn from_location(location: &str, path: &str) -> Self {
        let container_id = path
            .trim_matches('/')
            .rsplit('/')
            .next()
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        Self {
            container_id,
            location: Some(location.to_string()),
            message: String::new(),
        }
    }
}

impl ApiClient {
    /// `GET /list`
    pub async fn get_data(&self) -> Result<Vec<ContainerInfo>, ClientError> {
        self.get_json("/list", &[]).await
    }

    /// `POST /start?fileUrl=..`
    ///
    /// Port-conflict redirects back to `/start` are followed by the client;
    /// the final redirect names the new container.
    pub async fn launch_container(&self, file_url: &str) -> Result<LaunchedContainer, ClientError> {
        LaunchContainerRequest {
            file_url: file_url.to_string(),
        }
        .validate()?;

        let request = self.request(Method::POST, "/start", &[("fileUrl", file_url)])?;
        let response = request.send().await?;
        let status = response.status();

        if status.is_redirection() {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| {
                    ClientError::UnexpectedResponse(format!("{} without a Location header", status))
                })?;
            let target = response.url().join(location).map_err(|e| {
                ClientError::UnexpectedResponse(format!("bad Location {}: {}", location, e))
            })?;
            // The policy stopped following retries, so the backend never settled.
            if is_start_path(&target) {
                warn!(location, "container launch retry limit reached");
                return Err(ClientError::UnexpectedResponse(
                    "launch retry limit reached".to_string(),
                ));
            }
            let launched = LaunchedContainer::from_location(location, target.path());
            info!(location, "container launched");
            return Ok(launched);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, %body, "container launch rejected");
            return Err(ClientError::Status { status, body });
        }

        let message = response.text().await?;
        info!("container launched");
        Ok(LaunchedContainer {
            container_id: None,
            location: None,
            message,
        })
    }

    /// Launches the configured default document.
    pub async fn launch_default_container(&self) -> Result<LaunchedContainer, ClientError> {
        let file_url = self.launch_file_url().to_string();
        self.launch_container(&file_url).await
    }

    /// `POST /stop` with `{"containerId": ..}`
    pub async fn stop_container(&self, container_id: &str) -> Result<String, ClientError> {
        let body = StopContainerRequest {
            container_id: container_id.to_string(),
        };
        body.validate()?;
        let message = self.post_text("/stop", &[], Some(&body)).await?;
        info!(container_id, "container stopped");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FILE: &str = "https://files.example.com/docs/report.docx";

    #[tokio::test]
    async fn test_get_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/list"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "ID": 1,
                    "ContainerId": "abc",
                    "IP": "172.17.0.2",
                    "Port": "",
                    "MinPort": 10400,
                    "ExpireAt": null
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let containers = client.get_data().await.unwrap();
        assert_eq!(containers[0].container_id, "abc");
        assert_eq!(containers[0].min_port, 10400);
    }

    #[tokio::test]
    async fn test_launch_reads_container_from_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/start"))
            .and(query_param("fileUrl", FILE))
            .respond_with(ResponseTemplate::new(302).insert_header("Location", "/0f3a9c/"))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let launched = client.launch_container(FILE).await.unwrap();
        assert_eq!(launched.container_id.as_deref(), Some("0f3a9c"));
        assert_eq!(launched.location.as_deref(), Some("/0f3a9c/"));
    }

    #[tokio::test]
    async fn test_launch_follows_retry_redirect() {
        let server = MockServer::start().await;
        let retry = format!("/start?fileUrl={}", FILE);
        Mock::given(path("/start"))
            .respond_with(ResponseTemplate::new(302).insert_header("Location", retry.as_str()))
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(path("/start"))
            .respond_with(ResponseTemplate::new(200))
            .with_priority(2)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let launched = client.launch_container(FILE).await.unwrap();
        assert!(launched.container_id.is_none());
        assert_eq!(server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_launch_gives_up_when_backend_keeps_retrying() {
        let server = MockServer::start().await;
        let retry = format!("/start?fileUrl={}", FILE);
        Mock::given(path("/start"))
            .respond_with(ResponseTemplate::new(302).insert_header("Location", retry.as_str()))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let err = client.launch_container(FILE).await.unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedResponse(msg) if msg.contains("retry limit")));

        let requests = server.received_requests().await.unwrap();
        assert!(requests.len() > 1);
        assert!(requests.len() <= 11);
    }

    #[tokio::test]
    async fn test_launch_failure_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/start"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Failed to start the service"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let err = client.launch_container(FILE).await.unwrap_err();
        assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    }

    #[tokio::test]
    async fn test_launch_validates_file_url() {
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        assert!(matches!(
            client.launch_container("report.docx").await,
            Err(ClientError::InvalidRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_launch_default_uses_configured_file() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/start"))
            .and(query_param("fileUrl", FILE))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let settings = rbi_shared::config::ClientSettings {
            base_url: server.uri(),
            timeout_seconds: 5,
            launch_file_url: FILE.to_string(),
        };
        let client = ApiClient::from_settings(&settings).unwrap();
        client.launch_default_container().await.unwrap();
    }

    #[tokio::test]
    async fn test_stop_sends_container_id_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/stop"))
            .and(body_json(json!({ "containerId": "c1" })))
            .respond_with(ResponseTemplate::new(200).set_body_string("Container stopped"))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        assert_eq!(client.stop_container("c1").await.unwrap(), "Container stopped");
    }

    #[tokio::test]
    async fn test_stop_requires_id() {
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        assert!(client.stop_container("").await.is_err());
    }
}
