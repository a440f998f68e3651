/// ID types for Resonate entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier (opaque string assigned by the backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a new user ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Release identifier (numeric, backend-assigned)
pub type ReleaseId = i64;

/// Track identifier (numeric, backend-assigned)
pub type TrackId = i64;

/// Audio file identifier (numeric, backend-assigned)
pub type AudioFileId = i64;
