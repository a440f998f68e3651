//! Release types

use super::{ReleaseId, Track, UserId};
use serde::{Deserialize, Serialize};

/// A publishable collection of tracks owned by one artist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub id: ReleaseId,
    pub artist_id: UserId,
    pub title: String,
    /// Scheduled release date (ISO 8601)
    pub release_date: String,
    /// Universal Product Code, if assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Tracks are included on detail responses, omitted on listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<Track>>,
}

/// Data for creating a new release
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRelease {
    pub artist_id: UserId,
    pub title: String,
    pub release_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
}

impl CreateRelease {
    /// Create a draft with the required fields.
    pub fn new(artist_id: UserId, title: impl Into<String>, release_date: impl Into<String>) -> Self {
        Self {
            artist_id,
            title: title.into(),
            release_date: release_date.into(),
            upc: None,
        }
    }
}

/// Data for updating an existing release (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRelease {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_release_parses_without_tracks() {
        let json = r#"{
            "id": 7,
            "artistId": "artist-1",
            "title": "First Light",
            "releaseDate": "2026-09-01T00:00:00Z",
            "createdAt": "2026-08-01T12:00:00Z"
        }"#;

        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.id, 7);
        assert_eq!(release.title, "First Light");
        assert!(release.tracks.is_none());
        assert!(release.upc.is_none());
    }

    #[test]
    fn create_release_omits_empty_upc() {
        let draft = CreateRelease::new(UserId::new("a1"), "EP", "2026-01-01T00:00:00Z");
        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("upc"));
        assert!(json.contains("\"artistId\":\"a1\""));
    }
}
