//! Resonate API Client
//!
//! HTTP client library for the Resonate music-release platform: artists
//! upload releases/tracks, fans browse and stream them.
//!
//! # Features
//!
//! - **Session store**: login/register/logout with durable, file-backed
//!   session state
//! - **Catalog**: public release browsing, release/track CRUD
//! - **Publishing**: sequential create-upload-register pipeline with
//!   per-track progress and abort-on-first-failure
//! - **Streaming**: time-limited playable URLs for registered audio
//!
//! # Example
//!
//! ```ignore
//! use resonate_client::{ClientConfig, ResonateClient, SessionStore, TrackDraft};
//! use resonate_core::CreateRelease;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = SessionStore::in_memory();
//!     let client = ResonateClient::new(
//!         ClientConfig::new("https://api.resonate.example/api"),
//!         session,
//!     )?;
//!
//!     client.auth().login("artist@example.com", "hunter2").await?;
//!
//!     let artist = client.session().user_id().expect("logged in");
//!     let draft = CreateRelease::new(artist, "First Light", "2026-09-01T00:00:00Z");
//!     let tracks = vec![
//!         TrackDraft::new("Opening Theme").with_audio_file("opening.flac"),
//!         TrackDraft::new("Interlude"),
//!     ];
//!
//!     let outcome = client.publisher().publish(&draft, tracks).await?;
//!     println!("Published release {} with {} tracks", outcome.release.id, outcome.tracks.len());
//!
//!     Ok(())
//! }
//! ```

mod audio;
mod auth;
mod client;
mod error;
mod http;
mod profiles;
mod publish;
mod releases;
mod session;
mod tracks;
mod types;

// Re-export main types
pub use client::ResonateClient;
pub use error::{ClientError, Result};
pub use publish::{
    AudioSource, PublishOutcome, PublishProgress, PublishStep, ReleasePublisher, TrackDraft,
};
pub use session::{
    AuthState, FileSessionBackend, MemorySessionBackend, PersistedSession, SessionBackend,
    SessionStore,
};
pub use types::{
    ClientConfig, LoginResponse, RegisterResponse, ReleasePage, StreamingUrlResponse,
    UpdateArtistProfile, UpdateFanProfile, UploadTarget,
};

// Re-export sub-clients for direct use if needed
pub use audio::AudioFileClient;
pub use auth::AuthClient;
pub use profiles::ProfileClient;
pub use releases::ReleaseClient;
pub use tracks::TrackClient;
