//! Password authentication and session queries against the identity API.

use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use store::UserInfo;

use crate::{PortalClient, Result};

/// Session payload returned by the identity API on sign-up and sign-in.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: AuthUser,
}

/// User object embedded in identity API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

impl AuthUser {
    fn into_info(self) -> UserInfo {
        UserInfo {
            id: self.id,
            email: self.email,
        }
    }
}

impl PortalClient {
    /// Register a new account and start a session for it.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<UserInfo> {
        let url = self.url("auth/v1/signup")?;
        let response = self
            .request(Method::POST, url)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }
        let session: AuthSession = response.json().await?;
        self.set_access_token(Some(session.access_token));
        Ok(session.user.into_info())
    }

    /// Sign in with email and password. Caches the session's access token.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserInfo> {
        let mut url = self.url("auth/v1/token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");
        let response = self
            .request(Method::POST, url)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }
        let session: AuthSession = response.json().await?;
        self.set_access_token(Some(session.access_token));
        Ok(session.user.into_info())
    }

    /// Sign out: drop the cached token, then revoke the session remotely.
    /// The revoke is best-effort; locally the user is signed out either way.
    pub async fn sign_out(&self) {
        let token = self.access_token();
        self.set_access_token(None);
        let Some(token) = token else { return };
        match self.url("auth/v1/logout") {
            Ok(url) => {
                let result = self
                    .request(Method::POST, url)
                    .bearer_auth(token)
                    .send()
                    .await;
                if let Err(err) = result {
                    tracing::warn!("sign-out revoke failed: {err}");
                }
            }
            Err(err) => tracing::warn!("sign-out revoke failed: {err}"),
        }
    }

    /// Query the current session. `Ok(None)` means no user is signed in;
    /// a stale or revoked token is dropped and reported as signed out.
    pub async fn current_user(&self) -> Result<Option<UserInfo>> {
        if self.access_token().is_none() {
            return Ok(None);
        }
        let url = self.url("auth/v1/user")?;
        let response = self.request(Method::GET, url).send().await?;
        match response.status() {
            status if status.is_success() => {
                let user: AuthUser = response.json().await?;
                Ok(Some(user.into_info()))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                self.set_access_token(None);
                Ok(None)
            }
            _ => Err(Self::service_error(response).await),
        }
    }

    /// Ask the identity service to send a password-recovery email.
    pub async fn request_password_reset(&self, email: &str) -> Result<()> {
        let url = self.url("auth/v1/recover")?;
        let response = self
            .request(Method::POST, url)
            .json(&json!({ "email": email }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }
        Ok(())
    }
}

impl store::IdentityBackend for PortalClient {
    async fn current_user(&self) -> Result<Option<UserInfo>, store::BackendError> {
        PortalClient::current_user(self).await.map_err(Into::into)
    }
}
