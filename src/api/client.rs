use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use super::error::ClientError;
use crate::server::{GenerateFeatureRequest, GenerateFeatureResponse};
use crate::simulator::StatusPayload;
use crate::state_machine::JobId;

/// The two calls a mock orchestrator answers.
#[allow(async_fn_in_trait)]
pub trait OrchestratorApi {
    /// Start a job for `description` and return its id.
    async fn generate_feature(&self, description: &str) -> Result<JobId, ClientError>;

    /// Fetch the current status of a job.
    async fn status(&self, job_id: &JobId) -> Result<StatusPayload, ClientError>;
}

pub struct OrchestratorClient {
    client: Client,
    base_url: String,
}

impl OrchestratorClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn api_error(response: Response) -> ClientError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        ClientError::ApiError { status, message }
    }
}

impl OrchestratorApi for OrchestratorClient {
    async fn generate_feature(&self, description: &str) -> Result<JobId, ClientError> {
        let response = self
            .client
            .post(format!("{}/generate-feature", self.base_url))
            .json(&GenerateFeatureRequest {
                description: description.to_string(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let body = response.json::<GenerateFeatureResponse>().await?;
        Ok(body.job_id)
    }

    async fn status(&self, job_id: &JobId) -> Result<StatusPayload, ClientError> {
        let response = self
            .client
            .get(format!("{}/status/{job_id}", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::JobNotFound(job_id.to_string()));
        }
        if !status.is_success() {
            return Err(Self::api_error(response).await);
        }

        let body = response.json::<StatusPayload>().await?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::simulator::{RunStatus, compute_status};

    #[tokio::test]
    async fn generate_feature_posts_description() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-feature"))
            .and(body_json(json!({"description": "Products CRUD"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jobId": "job-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = OrchestratorClient::new(&server.uri()).unwrap();
        let id = client.generate_feature("Products CRUD").await.unwrap();
        assert_eq!(id.as_str(), "job-1");
    }

    #[tokio::test]
    async fn status_decodes_payload() {
        let server = MockServer::start().await;
        let payload = compute_status(Duration::from_secs(5));
        Mock::given(method("GET"))
            .and(path("/status/job-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
            .mount(&server)
            .await;

        let client = OrchestratorClient::new(&server.uri()).unwrap();
        let got = client.status(&JobId::from("job-1".to_string())).await.unwrap();
        assert_eq!(got, payload);
        assert_eq!(got.status, RunStatus::Running);
    }

    #[tokio::test]
    async fn status_404_is_job_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/status/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Job not found"})))
            .mount(&server)
            .await;

        let client = OrchestratorClient::new(&server.uri()).unwrap();
        let err = client
            .status(&JobId::from("missing".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::JobNotFound(ref id) if id == "missing"));
    }

    #[tokio::test]
    async fn server_error_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-feature"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
            .mount(&server)
            .await;

        let client = OrchestratorClient::new(&server.uri()).unwrap();
        let err = client.generate_feature("x").await.unwrap_err();
        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "internal");
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_ignored() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-feature"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jobId": "job-2"})))
            .mount(&server)
            .await;

        let client = OrchestratorClient::new(&format!("{}/", server.uri())).unwrap();
        let id = client.generate_feature("anything").await.unwrap();
        assert_eq!(id.as_str(), "job-2");
    }
}
