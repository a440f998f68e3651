//! Error types for the Resonate client.

use thiserror::Error;

/// Errors that can occur when interacting with the Resonate backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Request rejected by backend validation
    #[error("Validation failed ({status}): {message}")]
    Validation { status: u16, message: String },

    /// Authentication required but no session is active
    #[error("Authentication required")]
    AuthRequired,

    /// Login rejected (wrong email or password)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Login rejected because the account's email is not verified yet
    #[error("Email address not verified; check your inbox for the verification link")]
    EmailNotVerified,

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// File not found for upload
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO error (audio file reads, session persistence)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Session persistence failed
    #[error("Session storage error: {0}")]
    SessionStorage(String),

    /// Publishing aborted at a specific track
    #[error("Failed to publish track \"{title}\": {source}")]
    TrackPublish {
        title: String,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    /// Wrap an error as a per-track publish failure.
    pub(crate) fn track_publish(title: impl Into<String>, source: ClientError) -> Self {
        Self::TrackPublish {
            title: title.into(),
            source: Box::new(source),
        }
    }

    /// True for authorization failures (missing/invalid/expired token).
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::AuthRequired | Self::InvalidCredentials | Self::Api { status: 401, .. }
        )
    }

    /// True for transport-level failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_) | Self::ServerUnreachable(_))
    }
}

/// Result type for Resonate client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_publish_error_names_the_track() {
        let inner = ClientError::Api {
            status: 500,
            message: "boom".into(),
        };
        let err = ClientError::track_publish("Opening Theme", inner);
        let msg = err.to_string();
        assert!(msg.contains("Opening Theme"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn classification() {
        assert!(ClientError::AuthRequired.is_authorization());
        assert!(ClientError::ServerUnreachable("down".into()).is_transport());
        assert!(!ClientError::EmailNotVerified.is_authorization());
    }
}
