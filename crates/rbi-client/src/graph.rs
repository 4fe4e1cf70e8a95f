//! Automation graph operations.

use rbi_core::{GraphData, UpdateGraphRequest};
use validator::Validate;

use crate::client::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    /// `GET /graph/get?automation_id=..`
    pub async fn get_graph(&self, automation_id: i64) -> Result<GraphData, ClientError> {
        let id = automation_id.to_string();
        self.get_json("/graph/get", &[("automation_id", id.as_str())]).await
    }

    /// `POST /graph/update`
    pub async fn update_graph(&self, data: &UpdateGraphRequest) -> Result<String, ClientError> {
        data.validate()?;
        self.post_text("/graph/update", &[], Some(data)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_graph() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/graph/get"))
            .and(query_param("automation_id", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ID": 9,
                "automation_id": 3,
                "data": {"nodes": [], "edges": []}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let graph = client.get_graph(3).await.unwrap();
        assert_eq!(graph.id, 9);
        assert!(graph.data["nodes"].is_array());
    }

    #[tokio::test]
    async fn test_missing_graph_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(path("/graph/get"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Graph not found"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let err = client.get_graph(42).await.unwrap_err();
        assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    }

    #[tokio::test]
    async fn test_update_graph() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graph/update"))
            .and(body_json(json!({ "automation_id": 3, "data": {"nodes": [{"id": "n1"}]} })))
            .respond_with(ResponseTemplate::new(200).set_body_string("Graph updated"))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let request = UpdateGraphRequest {
            automation_id: 3,
            data: json!({"nodes": [{"id": "n1"}]}),
        };
        assert_eq!(client.update_graph(&request).await.unwrap(), "Graph updated");
    }
}
