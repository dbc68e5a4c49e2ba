use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use parking_lot::RwLock;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

/// Errors surfaced by the backend client.
///
/// `Unauthorized` is its own variant because a 401 from any endpoint tears
/// down the session, regardless of which call produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized - please log in again")]
    Unauthorized,
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// HTTP client for the Kino backend with bearer-token authentication.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token_store: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.token_store.read().is_some())
            .finish()
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        info!("[Api] Creating client with base URL: {}", base_url);

        Self {
            client,
            base_url,
            token_store: Arc::new(RwLock::new(None)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying HTTP client, reused for CDN image fetches.
    pub fn http(&self) -> Client {
        self.client.clone()
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token_store.write() = token;
    }

    pub fn has_token(&self) -> bool {
        self.token_store.read().is_some()
    }

    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Attach the bearer token, when one is installed.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token_store.read().as_deref() {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::UNAUTHORIZED => {
                // Session is invalid; drop the credential so no further
                // request goes out half-authenticated.
                self.set_token(None);
                Err(ApiError::Unauthorized)
            }
            status => Err(status_error(status, response).await),
        }
    }

    /// Execute a request whose response body is irrelevant (interaction
    /// acks). Any 2xx counts as success.
    async fn execute_ack(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => {
                self.set_token(None);
                Err(ApiError::Unauthorized)
            }
            status => Err(status_error(status, response).await),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.build_url(path);
        debug!("[Api] GET {}", url);
        let request = self.authorize(self.client.get(&url));
        self.execute(request).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(path);
        debug!("[Api] POST {}", url);
        let request = self.authorize(self.client.post(&url).json(body));
        self.execute(request).await
    }

    pub async fn post_ack(&self, path: &str) -> Result<(), ApiError> {
        let url = self.build_url(path);
        debug!("[Api] POST (ack) {}", url);
        let request = self.authorize(self.client.post(&url));
        self.execute_ack(request).await
    }

    /// POST for public endpoints (login, register). No bearer header even
    /// if a stale token is still installed.
    pub async fn post_public<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(path);
        debug!("[Api] POST (public) {}", url);
        self.execute(self.client.post(&url).json(body)).await
    }

    pub async fn post_public_ack<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.build_url(path);
        debug!("[Api] POST (public, ack) {}", url);
        self.execute_ack(self.client.post(&url).json(body)).await
    }
}

async fn status_error(status: StatusCode, response: reqwest::Response) -> ApiError {
    let message = match response.text().await {
        Ok(text) if !text.is_empty() => text,
        _ => "API request failed".to_string(),
    };
    ApiError::Status {
        status: status.as_u16(),
        message,
    }
}
