//! # API crate — client for the hosted identity/data service
//!
//! [`PortalClient`] is the portal's only doorway to the backend-as-a-service
//! that owns authentication and storage. It wraps the service's two HTTP
//! surfaces:
//!
//! - the identity API (`auth/v1/...`): password sign-up, sign-in, sign-out,
//!   recovery, and the per-navigation session query;
//! - the relational REST API (`rest/v1/<table>`): select-all and single-row
//!   insert, the only data operations the portal uses.
//!
//! The client implements the backend traits from the `store` crate
//! ([`store::IdentityBackend`], [`store::DataBackend`]), so the session gate
//! and the resource stores run unchanged against it.
//!
//! Authorization is enforced service-side; the publishable key sent with
//! every request identifies the app, not the user. The access token obtained
//! on sign-in is kept in memory and mirrored into browser local storage
//! (see [`token_cache`]) so it survives a reload, but the session state the
//! gate acts on is always re-queried from the service.

use std::sync::{Arc, Mutex};

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};

mod auth;
mod data;
mod token_cache;

pub use auth::{AuthSession, AuthUser};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Transport-level failure inside reqwest.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Error response decoded from the service.
    #[error("service returned {status}: {message}")]
    Service { status: StatusCode, message: String },
    #[error("invalid service url: {0}")]
    Url(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for store::BackendError {
    fn from(err: Error) -> Self {
        store::BackendError::Service(err.to_string())
    }
}

/// HTTP client for the hosted service. Cheap to clone; clones share the
/// cached access token.
#[derive(Clone, Debug)]
pub struct PortalClient {
    http: Client,
    base_url: Url,
    publishable_key: String,
    access_token: Arc<Mutex<Option<String>>>,
}

impl PortalClient {
    /// Build a client from the portal configuration. On native targets the
    /// `PORTAL_SERVICE_URL` and `PORTAL_PUBLISHABLE_KEY` environment
    /// variables override the configured values.
    pub fn new(config: &store::PortalConfig) -> Result<Self> {
        let mut url = config.service.url.clone();
        let mut key = config.service.publishable_key.clone();

        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(env_url) = std::env::var("PORTAL_SERVICE_URL") {
                url = env_url;
            }
            if let Ok(env_key) = std::env::var("PORTAL_PUBLISHABLE_KEY") {
                key = env_key;
            }
        }

        if !url.ends_with('/') {
            url.push('/');
        }
        let base_url = Url::parse(&url).map_err(|e| Error::Url(e.to_string()))?;

        Ok(Self {
            http: Client::new(),
            base_url,
            publishable_key: key,
            access_token: Arc::new(Mutex::new(token_cache::load())),
        })
    }

    /// The cached access token, if a sign-in succeeded or a previous one
    /// was restored from local storage.
    pub fn access_token(&self) -> Option<String> {
        self.access_token.lock().unwrap().clone()
    }

    pub(crate) fn set_access_token(&self, token: Option<String>) {
        match &token {
            Some(token) => token_cache::store(token),
            None => token_cache::clear(),
        }
        *self.access_token.lock().unwrap() = token;
    }

    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Url(e.to_string()))
    }

    /// Start a request carrying the publishable key and, when present, the
    /// signed-in user's bearer token.
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self
            .http
            .request(method, url)
            .header("apikey", &self.publishable_key);
        match self.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Decode an error response body into [`Error::Service`].
    pub(crate) async fn service_error(response: reqwest::Response) -> Error {
        let status = response.status();
        let message = match response.json::<ServiceMessage>().await {
            Ok(body) => body.message(),
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        Error::Service { status, message }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ServiceMessage {
    message: Option<String>,
    error_description: Option<String>,
}

impl ServiceMessage {
    fn message(self) -> String {
        self.message
            .or(self.error_description)
            .unwrap_or_else(|| "unknown error".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> PortalClient {
        let mut config = store::PortalConfig::default();
        config.service.url = url.to_string();
        config.service.publishable_key = "anon".to_string();
        PortalClient::new(&config).unwrap()
    }

    #[test]
    fn joins_paths_against_base_url_without_trailing_slash() {
        let client = client("https://portal.example.edu");
        let url = client.url("auth/v1/user").unwrap();
        assert_eq!(url.as_str(), "https://portal.example.edu/auth/v1/user");
    }

    #[test]
    fn rejects_unparseable_url() {
        let mut config = store::PortalConfig::default();
        config.service.url = "not a url".to_string();
        assert!(matches!(
            PortalClient::new(&config),
            Err(Error::Url(_))
        ));
    }

    #[test]
    fn token_is_shared_across_clones() {
        let client = client("https://portal.example.edu");
        let clone = client.clone();
        client.set_access_token(Some("tok".to_string()));
        assert_eq!(clone.access_token().as_deref(), Some("tok"));
    }
}
