//! Domain types for the Resonate platform.

mod audio_file;
mod ids;
mod profile;
mod release;
mod track;
mod user;

pub use audio_file::AudioFile;
pub use ids::{AudioFileId, ReleaseId, TrackId, UserId};
pub use profile::{ArtistProfile, FanProfile};
pub use release::{CreateRelease, Release, UpdateRelease};
pub use track::{CreateTrack, Track};
pub use user::{User, UserType};
