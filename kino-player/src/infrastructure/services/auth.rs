use serde::{Deserialize, Serialize};

use super::super::api_client::{ApiClient, ApiError};

pub mod routes {
    pub const LOGIN: &str = "/api/auth/login";
    pub const REGISTER: &str = "/api/auth/register";
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    name: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    name: &'a str,
    password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Login and registration against the Kino backend.
#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchange credentials for a session token and install it on the
    /// shared client.
    pub async fn login(&self, name: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self
            .api
            .post_public(routes::LOGIN, &LoginRequest { name, password })
            .await?;
        self.api.set_token(Some(response.token.clone()));
        Ok(response)
    }

    pub async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.api
            .post_public_ack(
                routes::REGISTER,
                &RegisterRequest {
                    email,
                    name,
                    password,
                },
            )
            .await
    }

    /// Drop the installed credential. Local only; the backend keeps no
    /// session state worth revoking.
    pub fn logout(&self) {
        self.api.set_token(None);
    }
}
