//! REST Client
//!
//! Typed bindings to the backend endpoints. Every call returns an
//! `ApiError` classified by HTTP outcome; the auth forms map those to
//! user-facing messages with `user_message`.

use reqwest::RequestBuilder;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{ForgotRequest, LoginRequest, LoginResponse, NewTodo, RegisterRequest, Todo};

/// Default backend origin. Override via `ApiClient::new`.
pub const DEFAULT_API_BASE: &str = "http://localhost:4000/api";

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Failure classification for backend calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401: credentials rejected.
    #[error("unauthorized")]
    Unauthorized,
    /// 404: endpoint missing, backend misconfigured.
    #[error("endpoint not found")]
    NotFound,
    /// 5xx.
    #[error("server error (status {0})")]
    Server(u16),
    /// Any other non-2xx, with whatever message the body carried.
    #[error("request failed (status {status}): {message}")]
    Status { status: u16, message: String },
    /// No response received at all.
    #[error("network error: {0}")]
    Network(String),
    /// Malformed response or similar local failure.
    #[error("{0}")]
    Other(String),
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            s if s >= 500 => ApiError::Server(s),
            s => ApiError::Status { status: s, message },
        }
    }

    /// Message shown in the auth forms.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Invalid username or password".to_string(),
            ApiError::NotFound => {
                "Endpoint not found. Please check that the backend server is running.".to_string()
            }
            ApiError::Server(_) => "Server error. Please try again later.".to_string(),
            ApiError::Status { message, .. } => format!("Request failed: {message}"),
            ApiError::Network(_) => {
                "Cannot connect to server. Please check that the backend is running.".to_string()
            }
            ApiError::Other(message) => format!("Request failed: {message}"),
        }
    }
}

/// Error bodies come as `{"message": ...}` or `{"error": ...}`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

fn extract_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            return message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("status {status}")
    } else {
        trimmed.to_string()
    }
}

fn build_http() -> reqwest::Client {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default()
    }
    #[cfg(target_arch = "wasm32")]
    {
        // Browser fetch has no builder-level timeout
        reqwest::Client::new()
    }
}

/// Backend client: base URL plus an optional bearer token that is
/// attached to every request once installed.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_token(base_url, None)
    }

    pub fn with_token(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: build_http(),
            base_url: base_url.into(),
            token,
        }
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer header, send, and classify non-2xx outcomes.
    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, extract_message(status, &body)));
        }
        Ok(response)
    }

    // ========================
    // Auth Endpoints
    // ========================

    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .send(
                self.http
                    .post(self.url("/auth/login"))
                    .json(&LoginRequest { username, password }),
            )
            .await?;
        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Other(e.to_string()))?;
        body.token
            .ok_or_else(|| ApiError::Other("no token received from server".to_string()))
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        self.send(
            self.http
                .post(self.url("/auth/register"))
                .json(&RegisterRequest { username, password }),
        )
        .await?;
        Ok(())
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.send(
            self.http
                .post(self.url("/auth/forgot"))
                .json(&ForgotRequest { email }),
        )
        .await?;
        Ok(())
    }

    // ========================
    // Todo Endpoints
    // ========================

    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.send(self.http.get(self.url("/todos"))).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Other(e.to_string()))
    }

    pub async fn create_todo(&self, draft: &NewTodo) -> Result<Todo, ApiError> {
        let response = self
            .send(self.http.post(self.url("/todos")).json(draft))
            .await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Other(e.to_string()))
    }

    /// Partial update carrying only the completion flag.
    pub async fn set_completed(&self, id: u64, completed: bool) -> Result<(), ApiError> {
        self.send(
            self.http
                .patch(self.url(&format!("/todos/{id}")))
                .json(&serde_json::json!({ "completed": completed })),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_todo(&self, id: u64) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(&format!("/todos/{id}"))))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            ApiError::from_status(401, String::new()),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from_status(404, String::new()),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from_status(500, String::new()),
            ApiError::Server(500)
        ));
        assert!(matches!(
            ApiError::from_status(503, String::new()),
            ApiError::Server(503)
        ));
        match ApiError::from_status(422, "bad title".to_string()) {
            ApiError::Status { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "bad title");
            }
            other => panic!("expected Status, got {other:?}"),
        }
    }

    #[test]
    fn test_user_messages_cover_taxonomy() {
        assert_eq!(
            ApiError::Unauthorized.user_message(),
            "Invalid username or password"
        );
        assert!(ApiError::NotFound.user_message().contains("backend server"));
        assert!(ApiError::Server(502).user_message().contains("try again"));
        assert!(ApiError::Network("refused".into())
            .user_message()
            .contains("Cannot connect"));
        assert!(ApiError::Status {
            status: 409,
            message: "username taken".into()
        }
        .user_message()
        .contains("username taken"));
        assert!(ApiError::Other("no token received from server".into())
            .user_message()
            .contains("no token"));
    }

    #[test]
    fn test_extract_message_prefers_message_field() {
        assert_eq!(
            extract_message(400, r#"{"message":"bad request"}"#),
            "bad request"
        );
        assert_eq!(extract_message(400, r#"{"error":"nope"}"#), "nope");
        assert_eq!(extract_message(400, "plain text"), "plain text");
        assert_eq!(extract_message(418, ""), "status 418");
    }

    #[test]
    fn test_url_join() {
        let api = ApiClient::new("http://localhost:4000/api");
        assert_eq!(api.url("/todos"), "http://localhost:4000/api/todos");
        assert_eq!(api.url("/todos/12"), "http://localhost:4000/api/todos/12");
    }
}
