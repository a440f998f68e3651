//! Audio file types

use super::AudioFileId;
use serde::{Deserialize, Serialize};

/// A registered, checksummed reference to an uploaded audio object.
///
/// Immutable once registered; referenced by zero or one track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFile {
    pub id: AudioFileId,
    /// Object key within external storage
    pub file_identifier: String,
    pub file_url: String,
    pub file_size: u64,
    /// SHA-256 of the uploaded bytes, hex-encoded
    pub checksum: String,
    #[serde(default)]
    pub created_at: Option<String>,
}
