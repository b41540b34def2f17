//! HTTP client gateway
//!
//! Every network call the client makes goes through here: bearer auth is
//! injected from the token store, bodies are JSON, and failures are
//! normalized into the [`RequestError`] taxonomy. No retries, no timeout
//! enforcement, no caching - each call hits the network exactly once and
//! the outcome is the caller's to handle.

use std::sync::Arc;

use oneflow_core::auth::ports::TokenStore;
use oneflow_domain::{RequestError, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error-body shape the backend uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Gateway for the OneFlow REST backend.
pub struct HttpGateway {
    client: ReqwestClient,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl HttpGateway {
    /// Start building a gateway.
    pub fn builder() -> HttpGatewayBuilder {
        HttpGatewayBuilder::default()
    }

    /// The configured base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a GET request and decode the JSON body.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let response = self.send::<()>(Method::GET, path, None).await?;
        Self::decode(response).await
    }

    /// Execute a POST request with a JSON body and decode the response.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// Execute a PUT request with a JSON body and decode the response.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.send(Method::PUT, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// Execute a PUT request, discarding whatever body the server answers
    /// with. Update endpoints echo the record in assorted envelopes; callers
    /// re-fetch the canonical state anyway.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put_discard<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, Some(body)).await?;
        Ok(())
    }

    /// Execute a DELETE request, discarding any response body.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send::<()>(Method::DELETE, path, None).await?;
        Ok(())
    }

    /// Build, authorize, and send one request. Non-2xx statuses and
    /// transport failures come back as [`RequestError`]s.
    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "sending request");

        let mut request =
            self.client.request(method, &url).header(CONTENT_TYPE, "application/json");

        // The token store is the single source of session state; requests
        // made while logged out simply go out unauthenticated.
        if let Some(token) = self.tokens.load() {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let response =
            request.send().await.map_err(|err| RequestError::Network(err.to_string()))?;

        let status = response.status();
        debug!(%url, %status, "received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::error_from_response(status, &body));
        }

        Ok(response)
    }

    /// Map a non-success response to the error taxonomy, extracting the
    /// server's `{"error": ...}` message when the body carries one.
    fn error_from_response(status: StatusCode, body: &str) -> RequestError {
        let server_message =
            serde_json::from_str::<ErrorBody>(body).ok().map(|parsed| parsed.error);
        RequestError::from_status(status.as_u16(), server_message)
    }

    /// Decode a success response. 204/205 and empty bodies decode as unit
    /// for callers that discard the payload.
    async fn decode<R: DeserializeOwned>(response: Response) -> Result<R> {
        let status = response.status();

        if status == StatusCode::NO_CONTENT || status == StatusCode::RESET_CONTENT {
            return serde_json::from_value(serde_json::Value::Null).map_err(|_| {
                RequestError::Parse(format!(
                    "no content response ({}) for a body-bearing type",
                    status.as_u16()
                ))
            });
        }

        let bytes =
            response.bytes().await.map_err(|err| RequestError::Network(err.to_string()))?;

        if bytes.is_empty() {
            return serde_json::from_value(serde_json::Value::Null)
                .map_err(|_| RequestError::Parse("empty response body".to_string()));
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| RequestError::Parse(format!("failed to parse response: {}", err)))
    }
}

/// Builder for [`HttpGateway`].
pub struct HttpGatewayBuilder {
    base_url: String,
    user_agent: Option<String>,
    tokens: Option<Arc<dyn TokenStore>>,
}

impl Default for HttpGatewayBuilder {
    fn default() -> Self {
        Self {
            base_url: oneflow_domain::constants::DEFAULT_API_BASE_URL.to_string(),
            user_agent: None,
            tokens: None,
        }
    }
}

impl HttpGatewayBuilder {
    /// Set the API base URL (e.g. `http://localhost:3001/api`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set the token store bearer tokens are read from.
    pub fn token_store(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Build the gateway.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Config` if the base URL is invalid, the token
    /// store is missing, or the underlying client cannot be constructed.
    pub fn build(self) -> Result<HttpGateway> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url)
            .map_err(|err| RequestError::Config(format!("invalid base URL: {}", err)))?;

        let tokens = self
            .tokens
            .ok_or_else(|| RequestError::Config("token store not set".to_string()))?;

        let mut builder = ReqwestClient::builder().no_proxy();
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder
            .build()
            .map_err(|err| RequestError::Config(format!("failed to build client: {}", err)))?;

        Ok(HttpGateway { client, base_url, tokens })
    }
}

#[cfg(test)]
mod tests {
    use oneflow_domain::constants::GENERIC_ERROR_MESSAGE;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::storage::MemoryTokenStore;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestResponse {
        message: String,
    }

    fn gateway(server: &MockServer, tokens: Arc<MemoryTokenStore>) -> HttpGateway {
        HttpGateway::builder()
            .base_url(server.uri())
            .token_store(tokens)
            .build()
            .expect("gateway builds")
    }

    #[tokio::test]
    async fn test_get_attaches_bearer_token_when_present() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "ok".into(),
            }))
            .mount(&server)
            .await;

        let tokens = Arc::new(MemoryTokenStore::with_token("test-token"));
        let result: TestResponse =
            gateway(&server, tokens).get("/projects").await.expect("request succeeds");
        assert_eq!(result.message, "ok");
    }

    #[tokio::test]
    async fn test_no_token_sends_unauthenticated_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(TestResponse {
                message: "ok".into(),
            }))
            .mount(&server)
            .await;

        let tokens = Arc::new(MemoryTokenStore::default());
        let result: Result<TestResponse> = gateway(&server, tokens).get("/projects").await;
        assert!(result.is_ok());

        let requests = server.received_requests().await.unwrap_or_default();
        assert!(requests[0].headers.get("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_server_error_message_is_extracted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"error": "Invalid email or password"})),
            )
            .mount(&server)
            .await;

        let tokens = Arc::new(MemoryTokenStore::default());
        let err = gateway(&server, tokens)
            .post::<_, TestResponse>("/auth/login", &serde_json::json!({}))
            .await
            .expect_err("request fails");

        assert!(matches!(err, RequestError::Auth(_)));
        assert_eq!(err.message(), "Invalid email or password");
    }

    #[tokio::test]
    async fn test_unparseable_error_body_falls_back_to_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let tokens = Arc::new(MemoryTokenStore::default());
        let err = gateway(&server, tokens)
            .get::<TestResponse>("/tasks")
            .await
            .expect_err("request fails");

        assert!(matches!(err, RequestError::Server(_)));
        assert_eq!(err.message(), GENERIC_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_transport_failure_maps_to_network_error() {
        // Bind and drop a listener so the port refuses connections.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let tokens: Arc<MemoryTokenStore> = Arc::new(MemoryTokenStore::default());
        let gateway = HttpGateway::builder()
            .base_url(format!("http://{}", addr))
            .token_store(tokens)
            .build()
            .expect("gateway builds");

        let err = gateway.get::<TestResponse>("/projects").await.expect_err("request fails");
        assert!(matches!(err, RequestError::Network(_)));
    }

    #[tokio::test]
    async fn test_delete_discards_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/projects/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"message": "Project deleted"})),
            )
            .mount(&server)
            .await;

        let tokens = Arc::new(MemoryTokenStore::with_token("t"));
        gateway(&server, tokens).delete("/projects/1").await.expect("delete succeeds");
    }

    #[tokio::test]
    async fn test_put_with_204_decodes_as_unit() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/tasks/9"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let tokens = Arc::new(MemoryTokenStore::with_token("t"));
        let result: Result<()> =
            gateway(&server, tokens).put("/tasks/9", &serde_json::json!({})).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_rejects_invalid_base_url() {
        let tokens: Arc<MemoryTokenStore> = Arc::new(MemoryTokenStore::default());
        let result = HttpGateway::builder()
            .base_url("not a url")
            .token_store(tokens)
            .build();
        assert!(matches!(result, Err(RequestError::Config(_))));
    }

    #[tokio::test]
    async fn test_builder_requires_token_store() {
        let result = HttpGateway::builder().build();
        assert!(matches!(result, Err(RequestError::Config(_))));
    }
}
