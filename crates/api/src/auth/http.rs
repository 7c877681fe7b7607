//! HTTP-backed implementation of [`AuthGateway`].

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::gateway::{AuthGateway, AuthGatewayError, GatewayResponse};

/// Talks to the delegated auth service over HTTP.
///
/// Every operation maps to a fixed path under the service's `/api/auth`
/// prefix. Responses are relayed verbatim (status + JSON body).
pub struct HttpAuthGateway {
    client: Client,
    base_url: String,
}

impl HttpAuthGateway {
    /// Create a gateway for the auth service at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/auth/{path}", self.base_url)
    }

    /// Send a request and convert the reply into a [`GatewayResponse`].
    async fn relay(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<GatewayResponse, AuthGatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| AuthGatewayError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body: Value = response
            .json()
            .await
            .map_err(|e| AuthGatewayError::InvalidBody(e.to_string()))?;

        Ok(GatewayResponse { status, body })
    }

    fn with_bearer(
        request: reqwest::RequestBuilder,
        bearer_token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        match bearer_token {
            Some(token) => request.header("authorization", format!("Bearer {token}")),
            None => request,
        }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn sign_up(&self, body: Value) -> Result<GatewayResponse, AuthGatewayError> {
        self.relay(self.client.post(self.url("sign-up")).json(&body))
            .await
    }

    async fn sign_in(&self, body: Value) -> Result<GatewayResponse, AuthGatewayError> {
        self.relay(self.client.post(self.url("sign-in")).json(&body))
            .await
    }

    async fn sign_out(
        &self,
        bearer_token: Option<&str>,
    ) -> Result<GatewayResponse, AuthGatewayError> {
        let request = Self::with_bearer(self.client.post(self.url("sign-out")), bearer_token);
        self.relay(request).await
    }

    async fn get_session(
        &self,
        bearer_token: Option<&str>,
    ) -> Result<GatewayResponse, AuthGatewayError> {
        let request = Self::with_bearer(self.client.get(self.url("session")), bearer_token);
        self.relay(request).await
    }
}
