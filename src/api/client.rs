//! Dashboard backend HTTP client
//!
//! Single point of outbound HTTP communication with the backend API.
//! All endpoint helpers are thin parameter bindings over [`ApiClient::request`];
//! none retry, none cache, all are fire-once.

use crate::dashboard::TemplateSource;
use crate::error::ApiError;
use crate::models::{Agent, AgentUpdate, Execution, NewAgent, NewUser, Template, User, UserUpdate};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

/// HTTP client for the dashboard backend
///
/// Explicitly constructed and passed to whatever owns the dashboard state,
/// so tests can substitute a mock server by swapping the base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`
    /// (connection pooling across consumers)
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request and decode the JSON response
    ///
    /// Builds the full URL from base + endpoint, merges a default
    /// `Content-Type: application/json` header with caller-supplied headers
    /// (caller headers win on conflict), and sends the request once.
    ///
    /// # Errors
    /// * `ApiError::RequestFailed` for any non-2xx status, regardless of body
    /// * `ApiError::Transport` if the request never completed
    /// * `ApiError::Decode` if the body is not valid JSON for `T`
    ///
    /// An empty response body decodes as JSON `null` (covers 204 acks).
    /// Every failure is logged before being returned.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        headers: HeaderMap,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut merged = HeaderMap::new();
        merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in headers.iter() {
            merged.insert(name.clone(), value.clone());
        }

        let mut builder = self.http.request(method.clone(), &url).headers(merged);
        if let Some(body) = body {
            builder = builder.body(body.to_string());
        }

        tracing::debug!(method = %method, url = %url, "Sending API request");

        let response = builder.send().await.map_err(|e| {
            tracing::error!(method = %method, url = %url, error = %e, "API request failed to complete");
            ApiError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            tracing::error!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                error_body = %error_body,
                "API request returned error status"
            );
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(|e| {
            tracing::error!(method = %method, url = %url, error = %e, "Failed to read API response body");
            ApiError::Transport(e)
        })?;

        // Some endpoints (e.g. DELETE) acknowledge with an empty body
        let raw = if text.trim().is_empty() {
            "null"
        } else {
            text.as_str()
        };
        serde_json::from_str(raw).map_err(|e| {
            tracing::error!(method = %method, url = %url, error = %e, "Failed to decode API response body");
            ApiError::Decode(e)
        })
    }

    /// Encode a request payload as a JSON value
    fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
        serde_json::to_value(body).map_err(|e| {
            tracing::error!(error = %e, "Failed to encode request body");
            ApiError::Decode(e)
        })
    }

    // Template endpoints

    /// Fetch all available agent templates
    pub async fn get_templates(&self) -> Result<Vec<Template>, ApiError> {
        self.request(Method::GET, "/templates", None, HeaderMap::new())
            .await
    }

    /// Ask the backend to seed its initial template set
    pub async fn seed_templates(&self) -> Result<Value, ApiError> {
        self.request(Method::POST, "/seed-templates", None, HeaderMap::new())
            .await
    }

    /// Create an agent from a template, copying its default configuration
    pub async fn create_agent_from_template(
        &self,
        template_id: i64,
        agent: &NewAgent,
    ) -> Result<Agent, ApiError> {
        self.request(
            Method::POST,
            &format!("/templates/{}/create-agent", template_id),
            Some(Self::encode(agent)?),
            HeaderMap::new(),
        )
        .await
    }

    // Agent endpoints

    /// Fetch all agents belonging to the given user
    pub async fn get_agents(&self, user_id: i64) -> Result<Vec<Agent>, ApiError> {
        self.request(
            Method::GET,
            &format!("/agents?user_id={}", user_id),
            None,
            HeaderMap::new(),
        )
        .await
    }

    /// Create a new agent
    pub async fn create_agent(&self, agent: &NewAgent) -> Result<Agent, ApiError> {
        self.request(
            Method::POST,
            "/agents",
            Some(Self::encode(agent)?),
            HeaderMap::new(),
        )
        .await
    }

    /// Fetch a single agent by id
    pub async fn get_agent(&self, agent_id: i64) -> Result<Agent, ApiError> {
        self.request(
            Method::GET,
            &format!("/agents/{}", agent_id),
            None,
            HeaderMap::new(),
        )
        .await
    }

    /// Update an existing agent; only the populated fields are sent
    pub async fn update_agent(
        &self,
        agent_id: i64,
        update: &AgentUpdate,
    ) -> Result<Agent, ApiError> {
        self.request(
            Method::PUT,
            &format!("/agents/{}", agent_id),
            Some(Self::encode(update)?),
            HeaderMap::new(),
        )
        .await
    }

    /// Delete an agent; returns the backend's acknowledgement (often empty)
    pub async fn delete_agent(&self, agent_id: i64) -> Result<Value, ApiError> {
        self.request(
            Method::DELETE,
            &format!("/agents/{}", agent_id),
            None,
            HeaderMap::new(),
        )
        .await
    }

    /// Execute an agent with the given input payload
    pub async fn execute_agent(&self, agent_id: i64, input_data: Value) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            &format!("/agents/{}/execute", agent_id),
            Some(json!({ "input_data": input_data })),
            HeaderMap::new(),
        )
        .await
    }

    /// Fetch the execution history of an agent, newest first
    pub async fn get_agent_executions(&self, agent_id: i64) -> Result<Vec<Execution>, ApiError> {
        self.request(
            Method::GET,
            &format!("/agents/{}/executions", agent_id),
            None,
            HeaderMap::new(),
        )
        .await
    }

    // User endpoints

    /// Fetch all users
    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        self.request(Method::GET, "/users", None, HeaderMap::new())
            .await
    }

    /// Create a new user
    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        self.request(
            Method::POST,
            "/users",
            Some(Self::encode(user)?),
            HeaderMap::new(),
        )
        .await
    }

    /// Fetch a single user by id
    pub async fn get_user(&self, user_id: i64) -> Result<User, ApiError> {
        self.request(
            Method::GET,
            &format!("/users/{}", user_id),
            None,
            HeaderMap::new(),
        )
        .await
    }

    /// Update an existing user; only the populated fields are sent
    pub async fn update_user(&self, user_id: i64, update: &UserUpdate) -> Result<User, ApiError> {
        self.request(
            Method::PUT,
            &format!("/users/{}", user_id),
            Some(Self::encode(update)?),
            HeaderMap::new(),
        )
        .await
    }
}

#[async_trait]
impl TemplateSource for ApiClient {
    async fn fetch_templates(&self) -> Result<Vec<Template>, ApiError> {
        self.get_templates().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serial_test::serial;

    const TEMPLATE_BODY: &str = r#"[{
        "id": 7,
        "name": "Support Bot",
        "agent_type": "customer_support",
        "description": "Handles common inquiries",
        "is_premium": false,
        "default_configuration": {"tone": "formal"}
    }]"#;

    #[tokio::test]
    #[serial]
    async fn test_get_templates_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/templates")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(TEMPLATE_BODY)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let templates = client.get_templates().await.unwrap();

        mock.assert_async().await;
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].id, 7);
        assert_eq!(templates[0].name, "Support Bot");
        assert_eq!(templates[0].agent_type, "customer_support");
    }

    #[tokio::test]
    #[serial]
    async fn test_request_failed_carries_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/templates")
            .with_status(500)
            .with_body(r#"{"error": "boom"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let result = client.get_templates().await;

        mock.assert_async().await;
        match result {
            Err(ApiError::RequestFailed { status }) => assert_eq!(status, 500),
            other => panic!("expected RequestFailed, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_non_json_body_is_decode_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/templates")
            .with_status(200)
            .with_body("This is not JSON")
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let result = client.get_templates().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        // Reserved TLD guarantees DNS resolution fails
        let client = ApiClient::new("http://backend.invalid");
        let result = client.get_templates().await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }

    #[tokio::test]
    #[serial]
    async fn test_caller_headers_win_over_defaults() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/templates")
            .match_header("content-type", "application/vnd.chit+json")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/vnd.chit+json"),
        );

        let client = ApiClient::new(server.url());
        let result: Result<Vec<Template>, ApiError> = client
            .request(Method::GET, "/templates", None, headers)
            .await;

        mock.assert_async().await;
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_agent_accepts_empty_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/agents/3")
            .with_status(204)
            .with_body("")
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let ack = client.delete_agent(3).await.unwrap();

        mock.assert_async().await;
        assert_eq!(ack, Value::Null);
    }

    #[tokio::test]
    #[serial]
    async fn test_execute_agent_wraps_input_data() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/agents/3/execute")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "input_data": { "message": "I want a refund" }
            })))
            .with_status(200)
            .with_body(r#"{"status": "completed"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let result = client
            .execute_agent(3, json!({ "message": "I want a refund" }))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result["status"], "completed");
    }

    #[tokio::test]
    #[serial]
    async fn test_get_agents_binds_user_id_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/agents")
            .match_query(Matcher::UrlEncoded("user_id".into(), "42".into()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = ApiClient::new(server.url());
        let agents = client.get_agents(42).await.unwrap();

        mock.assert_async().await;
        assert!(agents.is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_create_agent_from_template_posts_partial_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/templates/7/create-agent")
            .match_body(Matcher::Json(json!({
                "name": "My Support Bot",
                "agent_type": "customer_support"
            })))
            .with_status(201)
            .with_body(
                r#"{
                    "id": 2,
                    "name": "My Support Bot",
                    "agent_type": "customer_support",
                    "is_active": true,
                    "executions_count": 0,
                    "created_at": "2025-06-19T04:34:54Z"
                }"#,
            )
            .create_async()
            .await;

        let body = NewAgent {
            name: "My Support Bot".to_string(),
            agent_type: "customer_support".to_string(),
            ..Default::default()
        };

        let client = ApiClient::new(server.url());
        let agent = client.create_agent_from_template(7, &body).await.unwrap();

        mock.assert_async().await;
        assert_eq!(agent.id, 2);
        assert_eq!(agent.agent_type, "customer_support");
        assert_eq!(agent.executions_count, 0);
    }
}
