//! HTTP client for the redirect service.

use serde_json::json;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{RedirectDraft, RedirectList, RedirectMapping, TokenResponse};

/// Client for every endpoint of the redirect service.
///
/// Authenticated calls take the session token per call and send it as a
/// bearer `Authorization` header; holding tokens is the session context's
/// job, not the client's. Cheap to clone and to construct.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Exchange credentials for an access token. The endpoint takes
    /// form-encoded `username`/`password`; a 2xx answer without a token in
    /// the body is reported as [`ApiError::MissingToken`].
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let response = self
            .http
            .post(self.config.endpoint("/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(ApiError::network)?;
        let response = check_status(response).await?;

        let body: TokenResponse = response.json().await.map_err(ApiError::decode)?;
        body.access_token
            .filter(|token| !token.is_empty())
            .ok_or(ApiError::MissingToken)
    }

    /// Create an account. The response body is ignored; a fresh account
    /// still goes through the login screen.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.config.endpoint("/register"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(ApiError::network)?;
        check_status(response).await?;
        Ok(())
    }

    /// Fetch the signed-in user's mappings, in server order.
    pub async fn list_redirects(&self, token: &str) -> Result<Vec<RedirectMapping>, ApiError> {
        let response = self
            .http
            .get(self.config.endpoint("/redirects/"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(ApiError::network)?;
        let response = check_status(response).await?;

        let body: RedirectList = response.json().await.map_err(ApiError::decode)?;
        Ok(body.redirects)
    }

    /// Create a mapping and return it as stored by the server.
    pub async fn create_redirect(
        &self,
        token: &str,
        draft: &RedirectDraft,
    ) -> Result<RedirectMapping, ApiError> {
        let response = self
            .http
            .post(self.config.endpoint("/redirects/"))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await
            .map_err(ApiError::network)?;
        let response = check_status(response).await?;
        response.json().await.map_err(ApiError::decode)
    }

    /// Replace the fields of the mapping identified by `id`.
    pub async fn update_redirect(
        &self,
        token: &str,
        id: i64,
        draft: &RedirectDraft,
    ) -> Result<RedirectMapping, ApiError> {
        let response = self
            .http
            .put(self.config.endpoint(&format!("/redirects/{id}")))
            .bearer_auth(token)
            .json(draft)
            .send()
            .await
            .map_err(ApiError::network)?;
        let response = check_status(response).await?;
        response.json().await.map_err(ApiError::decode)
    }

    /// Delete the mapping identified by `id`.
    pub async fn delete_redirect(&self, token: &str, id: i64) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.config.endpoint(&format!("/redirects/{id}")))
            .bearer_auth(token)
            .send()
            .await
            .map_err(ApiError::network)?;
        check_status(response).await?;
        Ok(())
    }
}

/// Pass 2xx responses through; turn anything else into [`ApiError::Http`],
/// reading the body for a server-supplied detail message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let code = status.as_u16();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!("request rejected with HTTP {code}");
    Err(ApiError::http(code, &body))
}
