//! Types for Resonate API requests and responses.

use resonate_core::{Release, UserId, UserType};
use serde::{Deserialize, Serialize};

/// Configuration for connecting to a Resonate backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://api.resonate.example/api")
    pub base_url: String,
}

impl ClientConfig {
    /// Create a new config with just the base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from successful login.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: UserId,
    /// Opaque bearer token
    pub token: String,
    #[serde(default)]
    pub user_type: Option<UserType>,
    /// Absent on backends that predate email verification
    #[serde(default = "default_true")]
    pub email_verified: bool,
}

fn default_true() -> bool {
    true
}

/// Request body for the registration endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Response from registration.
///
/// Registration creates a pending account; any token in the body is
/// ignored until the email is verified out of band.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: UserId,
}

/// Request body for resending the verification email.
#[derive(Debug, Serialize)]
pub struct ResendVerificationRequest {
    pub email: String,
}

// =============================================================================
// Catalog Types
// =============================================================================

/// One page of the public release catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleasePage {
    pub content: Vec<Release>,
    /// Total releases across all pages
    pub total: u64,
}

// =============================================================================
// Profile Types
// =============================================================================

/// Partial update for the current artist's profile.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArtistProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<std::collections::HashMap<String, String>>,
}

/// Partial update for the current fan's profile.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFanProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_active: Option<bool>,
}

// =============================================================================
// Upload Types
// =============================================================================

/// Pre-signed upload target returned by the backend.
///
/// Permits one direct, time-limited write to object storage without
/// routing the bytes through the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTarget {
    pub upload_url: String,
    /// Object key to register once the write completes
    pub file_key: String,
    #[serde(default)]
    pub bucket_name: Option<String>,
}

/// Request body for registering an uploaded object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAudioFileRequest {
    pub file_key: String,
    pub file_size: u64,
    /// SHA-256 of the uploaded bytes, hex-encoded
    pub checksum: String,
}

// =============================================================================
// Streaming Types
// =============================================================================

/// Playable URL for a registered audio file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingUrlResponse {
    pub streaming_url: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Error body the backend returns on rejected requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
}
