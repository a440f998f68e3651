//! Main Resonate API client.

use crate::audio::AudioFileClient;
use crate::auth::AuthClient;
use crate::error::{ClientError, Result};
use crate::profiles::ProfileClient;
use crate::publish::ReleasePublisher;
use crate::releases::ReleaseClient;
use crate::session::SessionStore;
use crate::tracks::TrackClient;
use crate::types::ClientConfig;
use reqwest::Client;
use std::time::Duration;

/// Client for the Resonate music-release platform API.
///
/// Wraps one stateless `reqwest::Client` and an explicitly injected
/// [`SessionStore`]; every authenticated request reads the bearer token
/// from the store at call time. There is no process-wide singleton.
///
/// # Example
///
/// ```ignore
/// use resonate_client::{ClientConfig, ResonateClient, SessionStore};
///
/// let session = SessionStore::in_memory();
/// let client = ResonateClient::new(ClientConfig::new("https://api.resonate.example/api"), session)?;
///
/// client.auth().login("artist@example.com", "hunter2").await?;
/// let page = client.releases().list_public(0, 20).await?;
/// println!("{} releases", page.total);
/// ```
pub struct ResonateClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ResonateClient {
    /// Create a new client against the given backend.
    pub fn new(config: ClientConfig, session: SessionStore) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("ResonateClient/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// The normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store backing this client.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The current bearer token, or `AuthRequired` when logged out.
    ///
    /// Read fresh for every request: a logout that races an in-flight
    /// request does not cancel it, but every request issued afterwards
    /// fails here.
    pub(crate) fn require_token(&self) -> Result<String> {
        self.session.token().ok_or(ClientError::AuthRequired)
    }

    /// Authentication operations (login, register, logout).
    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(&self.http, &self.base_url, &self.session)
    }

    /// Release catalog and CRUD operations.
    pub fn releases(&self) -> ReleaseClient<'_> {
        ReleaseClient::new(self)
    }

    /// Track CRUD operations.
    pub fn tracks(&self) -> TrackClient<'_> {
        TrackClient::new(self)
    }

    /// Audio file upload, registration, and streaming operations.
    pub fn audio_files(&self) -> AudioFileClient<'_> {
        AudioFileClient::new(self)
    }

    /// Artist/fan profile operations.
    pub fn profiles(&self) -> ProfileClient<'_> {
        ProfileClient::new(self)
    }

    /// The release publishing pipeline.
    pub fn publisher(&self) -> ReleasePublisher<'_> {
        ReleasePublisher::new(self)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(url: &str) -> Result<ResonateClient> {
        ResonateClient::new(ClientConfig::new(url), SessionStore::in_memory())
    }

    #[test]
    fn test_url_validation() {
        assert!(client("https://api.example.com").is_ok());
        assert!(client("http://localhost:8080/api").is_ok());

        assert!(client("").is_err());
        assert!(client("not-a-url").is_err());
        assert!(client("ftp://example.com").is_err());
    }

    #[test]
    fn test_url_normalization() {
        let client = client("https://api.example.com/api/").expect("valid url");
        assert_eq!(client.base_url(), "https://api.example.com/api");
    }

    #[test]
    fn test_token_required_when_anonymous() {
        let client = client("https://api.example.com").unwrap();
        assert!(matches!(
            client.require_token(),
            Err(ClientError::AuthRequired)
        ));
    }
}
