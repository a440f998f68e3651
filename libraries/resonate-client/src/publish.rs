//! Release publishing pipeline.
//!
//! Publishing a release is an ordered sequence of backend calls:
//! create the release, then for each track in list order either create
//! a metadata-only track, or upload-register-create. Each step returns
//! a `Result`; the first failure aborts the remaining tracks while
//! everything already created stays created (there is no compensating
//! rollback, so a failed publish can leave a partially built release).

use crate::audio::{mime_type_for_file, sha256_hex};
use crate::client::ResonateClient;
use crate::error::{ClientError, Result};
use resonate_core::{CreateRelease, CreateTrack, Release, ReleaseId, Track};
use std::path::PathBuf;
use tracing::{info, warn};

/// Audio attached to a track draft.
#[derive(Debug, Clone)]
pub enum AudioSource {
    /// Read from disk at publish time; name and content type derive
    /// from the path.
    File(PathBuf),
    /// Raw bytes with an explicit name and content type.
    Bytes {
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

/// A track to publish, optionally carrying audio.
#[derive(Debug, Clone)]
pub struct TrackDraft {
    pub track: CreateTrack,
    pub audio: Option<AudioSource>,
}

impl TrackDraft {
    /// Metadata-only track.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            track: CreateTrack::new(title),
            audio: None,
        }
    }

    /// Attach an audio file on disk.
    pub fn with_audio_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.audio = Some(AudioSource::File(path.into()));
        self
    }

    /// Attach in-memory audio bytes.
    pub fn with_audio_bytes(
        mut self,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.audio = Some(AudioSource::Bytes {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        });
        self
    }
}

/// Which step of a track's pipeline is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStep {
    /// Track processing started
    Starting,
    /// Bytes written to the pre-signed target
    Uploaded,
    /// Track record created
    Created,
}

/// Progress information during publishing.
#[derive(Debug, Clone)]
pub struct PublishProgress {
    pub track_index: usize,
    pub total_tracks: usize,
    pub title: String,
    pub step: PublishStep,
}

/// Result of a completed publish.
#[derive(Debug)]
pub struct PublishOutcome {
    pub release: Release,
    /// Tracks in the order they were created
    pub tracks: Vec<Track>,
}

/// The publishing pipeline.
pub struct ReleasePublisher<'a> {
    client: &'a ResonateClient,
}

impl<'a> ReleasePublisher<'a> {
    pub(crate) fn new(client: &'a ResonateClient) -> Self {
        Self { client }
    }

    /// Publish a release with its tracks.
    ///
    /// Equivalent to [`publish_with_progress`](Self::publish_with_progress)
    /// without a callback.
    pub async fn publish(
        &self,
        draft: &CreateRelease,
        tracks: Vec<TrackDraft>,
    ) -> Result<PublishOutcome> {
        self.publish_with_progress(draft, tracks, |_| {}).await
    }

    /// Publish a release, reporting per-track progress.
    ///
    /// The release is created first; failure there aborts before any
    /// track is processed. Tracks are then processed strictly in list
    /// order, one full chain at a time. The first per-track failure
    /// aborts the remaining tracks and surfaces as
    /// [`ClientError::TrackPublish`] naming the failing track.
    pub async fn publish_with_progress<F>(
        &self,
        draft: &CreateRelease,
        tracks: Vec<TrackDraft>,
        mut progress: F,
    ) -> Result<PublishOutcome>
    where
        F: FnMut(PublishProgress),
    {
        let release = self.client.releases().create(draft).await?;
        let total_tracks = tracks.len();
        let mut created = Vec::with_capacity(total_tracks);

        for (index, track_draft) in tracks.into_iter().enumerate() {
            let title = track_draft.track.title.clone();

            progress(PublishProgress {
                track_index: index,
                total_tracks,
                title: title.clone(),
                step: PublishStep::Starting,
            });

            let track = match self
                .publish_track(release.id, track_draft, &mut progress, index, total_tracks)
                .await
            {
                Ok(track) => track,
                Err(e) => {
                    warn!(
                        release_id = release.id,
                        track = %title,
                        created = created.len(),
                        "Publish aborted"
                    );
                    return Err(ClientError::track_publish(title, e));
                }
            };

            progress(PublishProgress {
                track_index: index,
                total_tracks,
                title: title.clone(),
                step: PublishStep::Created,
            });

            created.push(track);
        }

        info!(
            release_id = release.id,
            title = %release.title,
            tracks = created.len(),
            "Release published"
        );

        Ok(PublishOutcome {
            release,
            tracks: created,
        })
    }

    /// One track's full chain: resolve audio, upload, register, create.
    async fn publish_track<F>(
        &self,
        release_id: ReleaseId,
        draft: TrackDraft,
        progress: &mut F,
        index: usize,
        total_tracks: usize,
    ) -> Result<Track>
    where
        F: FnMut(PublishProgress),
    {
        let Some(audio) = draft.audio else {
            // Metadata-only: a single request, no upload or registration
            return self.client.tracks().create(&draft.track, release_id, None).await;
        };

        let (file_name, content_type, bytes) = match audio {
            AudioSource::File(path) => {
                let file_name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("track")
                    .to_string();
                let content_type = mime_type_for_file(&path).to_string();
                let bytes = tokio::fs::read(&path).await.map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        ClientError::FileNotFound(path.display().to_string())
                    } else {
                        ClientError::Io(e)
                    }
                })?;
                (file_name, content_type, bytes)
            }
            AudioSource::Bytes {
                file_name,
                content_type,
                bytes,
            } => (file_name, content_type, bytes),
        };

        let file_size = bytes.len() as u64;
        let checksum = sha256_hex(&bytes);

        let audio_files = self.client.audio_files();

        let target = audio_files
            .request_upload_target(&file_name, &content_type)
            .await?;

        audio_files
            .upload_to_target(&target, bytes, &content_type)
            .await?;

        progress(PublishProgress {
            track_index: index,
            total_tracks,
            title: draft.track.title.clone(),
            step: PublishStep::Uploaded,
        });

        let registered = audio_files
            .register(&target.file_key, file_size, &checksum)
            .await?;

        self.client
            .tracks()
            .create(&draft.track, release_id, Some(registered.id))
            .await
    }
}
