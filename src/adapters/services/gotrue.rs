//! Supabase GoTrue auth verification adapter
//!
//! Implements the AuthVerifierPort by asking the auth service who a bearer
//! token belongs to. The service key authenticates this backend; ownership
//! enforcement stays in the store regardless of what the token could see.

use crate::config::AuthServiceConfig;
use crate::domain::models::Identity;
use crate::error::{AppError, Result};
use crate::ports::auth::AuthVerifierPort;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// GoTrue verification service implementation
pub struct GoTrueVerifier {
    client: Client,
    base_url: String,
    service_key: String,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    email: String,
}

impl GoTrueVerifier {
    /// Create a new verifier from explicit configuration
    pub fn new(config: &AuthServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base.clone(),
            service_key: config.service_key.clone(),
        })
    }
}

#[async_trait]
impl AuthVerifierPort for GoTrueVerifier {
    async fn verify(&self, token: &str) -> Result<Identity> {
        let response = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.service_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable {
                status: None,
                body: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            log::warn!("Auth service rejected credential");
            return Err(AppError::InvalidCredential);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Auth service error {}: {}", status, body);
            return Err(AppError::UpstreamUnavailable {
                status: Some(status.as_u16()),
                body,
            });
        }

        let user: UserResponse = response
            .json()
            .await
            .map_err(|_| AppError::MalformedUpstreamEnvelope)?;

        log::info!("Resolved identity for user {}", user.id);
        Ok(Identity {
            id: user.id,
            email: user.email,
        })
    }
}
