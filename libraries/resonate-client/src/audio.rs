//! Audio file upload, registration, and streaming operations.
//!
//! Uploads are direct-to-storage: the backend hands out a pre-signed
//! target, the client PUTs the raw bytes straight to object storage,
//! then registers the resulting object to obtain an immutable
//! `AudioFile` record.

use crate::client::ResonateClient;
use crate::error::{ClientError, Result};
use crate::http::{parse_json, response_error, transport_error};
use crate::types::{RegisterAudioFileRequest, StreamingUrlResponse, UploadTarget};
use resonate_core::{AudioFile, AudioFileId};
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::{debug, info};

/// Audio file client.
pub struct AudioFileClient<'a> {
    client: &'a ResonateClient,
}

impl<'a> AudioFileClient<'a> {
    pub(crate) fn new(client: &'a ResonateClient) -> Self {
        Self { client }
    }

    /// Request a pre-signed upload target sized/typed for a file.
    pub async fn request_upload_target(
        &self,
        file_name: &str,
        content_type: &str,
    ) -> Result<UploadTarget> {
        let token = self.client.require_token()?;
        let url = format!(
            "{}/audio-files/upload?fileName={}&contentType={}",
            self.client.base_url(),
            urlencoding::encode(file_name),
            urlencoding::encode(content_type)
        );
        debug!(url = %url, file = %file_name, "Requesting upload target");

        let response = self
            .client
            .http()
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            parse_json(response, "upload target").await
        } else {
            Err(response_error(response).await)
        }
    }

    /// Write raw bytes directly to a pre-signed upload target.
    ///
    /// The target URL is already signed, so no bearer token is attached.
    pub async fn upload_to_target(
        &self,
        target: &UploadTarget,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        let size = bytes.len();
        debug!(
            url = %target.upload_url,
            key = %target.file_key,
            size,
            "Uploading to pre-signed target"
        );

        let response = self
            .client
            .http()
            .put(&target.upload_url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            debug!(key = %target.file_key, size, "Upload complete");
            Ok(())
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message: format!("Upload failed with status {}", status.as_u16()),
            })
        }
    }

    /// Register an uploaded object, obtaining its `AudioFile` record.
    pub async fn register(
        &self,
        file_key: &str,
        file_size: u64,
        checksum: &str,
    ) -> Result<AudioFile> {
        let token = self.client.require_token()?;
        let url = format!("{}/audio-files/register", self.client.base_url());
        debug!(url = %url, key = %file_key, size = file_size, "Registering audio file");

        let request = RegisterAudioFileRequest {
            file_key: file_key.to_string(),
            file_size,
            checksum: checksum.to_string(),
        };

        let response = self
            .client
            .http()
            .post(&url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            let audio_file: AudioFile = parse_json(response, "audio file").await?;
            info!(
                audio_file_id = audio_file.id,
                key = %audio_file.file_identifier,
                "Audio file registered"
            );
            Ok(audio_file)
        } else {
            Err(response_error(response).await)
        }
    }

    /// Get a time-limited playable URL for a registered audio file.
    pub async fn streaming_url(&self, id: AudioFileId) -> Result<String> {
        let token = self.client.require_token()?;
        let url = format!("{}/audio-files/{}/stream", self.client.base_url(), id);
        debug!(url = %url, audio_file_id = id, "Getting streaming URL");

        let response = self
            .client
            .http()
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            let stream: StreamingUrlResponse = parse_json(response, "streaming URL").await?;
            Ok(stream.streaming_url)
        } else if status.as_u16() == 404 {
            Err(ClientError::Api {
                status: 404,
                message: format!("Audio file not found: {id}"),
            })
        } else {
            Err(response_error(response).await)
        }
    }
}

/// SHA-256 of a byte slice, hex-encoded. Used as the integrity checksum
/// when registering uploads.
pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Get MIME type for an audio file.
pub(crate) fn mime_type_for_file(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("mp3") => "audio/mpeg",
        Some("flac") => "audio/flac",
        Some("ogg") => "audio/ogg",
        Some("opus") => "audio/opus",
        Some("wav") => "audio/wav",
        Some("m4a") | Some("aac") => "audio/mp4",
        _ => "application/octet-stream",
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
