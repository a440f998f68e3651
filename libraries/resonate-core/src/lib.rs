//! Resonate Core
//!
//! Platform-agnostic domain types for the Resonate music-release platform.
//!
//! This crate defines the entities the client exchanges with the backend:
//! - **Accounts**: `User`, `UserType`, artist/fan profiles
//! - **Catalog**: `Release`, `Track`, `AudioFile`
//! - **Payloads**: `CreateRelease`, `UpdateRelease`, `CreateTrack`
//!
//! All types serialize to the backend's camelCase JSON wire format.
//!
//! # Example
//!
//! ```rust
//! use resonate_core::{CreateRelease, CreateTrack, UserId};
//!
//! let artist = UserId::new("a1b2c3");
//! let release = CreateRelease::new(artist, "First Light", "2026-09-01T00:00:00Z");
//! let track = CreateTrack::new("Opening Theme");
//! assert_eq!(release.title, "First Light");
//! assert!(track.duration.is_none());
//! ```

#![forbid(unsafe_code)]

pub mod types;

// Re-export commonly used types
pub use types::{
    // Accounts
    ArtistProfile, FanProfile, User, UserType,
    // Catalog
    AudioFile, Release, Track,
    // IDs
    AudioFileId, ReleaseId, TrackId, UserId,
    // Payloads
    CreateRelease, CreateTrack, UpdateRelease,
};
