//! Track CRUD operations.

use crate::client::ResonateClient;
use crate::error::{ClientError, Result};
use crate::http::{parse_json, response_error, transport_error};
use resonate_core::{AudioFileId, CreateTrack, ReleaseId, Track, TrackId};
use tracing::{debug, info};

/// Track client.
///
/// The release and audio-file associations travel as query parameters,
/// matching the backend's surface.
pub struct TrackClient<'a> {
    client: &'a ResonateClient,
}

impl<'a> TrackClient<'a> {
    pub(crate) fn new(client: &'a ResonateClient) -> Self {
        Self { client }
    }

    /// Create a track under a release, optionally referencing a
    /// registered audio file. Without one, the track is metadata-only.
    pub async fn create(
        &self,
        draft: &CreateTrack,
        release_id: ReleaseId,
        audio_file_id: Option<AudioFileId>,
    ) -> Result<Track> {
        let token = self.client.require_token()?;
        let mut url = format!(
            "{}/tracks?releaseId={}",
            self.client.base_url(),
            release_id
        );
        if let Some(audio_file_id) = audio_file_id {
            url = format!("{url}&audioFileId={audio_file_id}");
        }
        debug!(url = %url, title = %draft.title, "Creating track");

        let response = self
            .client
            .http()
            .post(&url)
            .bearer_auth(token)
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            let track: Track = parse_json(response, "track").await?;
            info!(track_id = track.id, title = %track.title, release_id, "Track created");
            Ok(track)
        } else {
            Err(response_error(response).await)
        }
    }

    /// Update a track, optionally attaching a different audio file.
    pub async fn update(
        &self,
        id: TrackId,
        changes: &CreateTrack,
        audio_file_id: Option<AudioFileId>,
    ) -> Result<Track> {
        let token = self.client.require_token()?;
        let mut url = format!("{}/tracks/{}", self.client.base_url(), id);
        if let Some(audio_file_id) = audio_file_id {
            url = format!("{url}?audioFileId={audio_file_id}");
        }
        debug!(url = %url, track_id = id, "Updating track");

        let response = self
            .client
            .http()
            .put(&url)
            .bearer_auth(token)
            .json(changes)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            parse_json(response, "track").await
        } else {
            Err(response_error(response).await)
        }
    }

    /// Delete a track.
    pub async fn delete(&self, id: TrackId) -> Result<()> {
        let token = self.client.require_token()?;
        let url = format!("{}/tracks/{}", self.client.base_url(), id);
        debug!(url = %url, track_id = id, "Deleting track");

        let response = self
            .client
            .http()
            .delete(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 404 {
            Err(ClientError::Api {
                status: 404,
                message: format!("Track not found: {id}"),
            })
        } else {
            Err(response_error(response).await)
        }
    }
}
