//! Artist and fan profile operations.

use crate::client::ResonateClient;
use crate::error::Result;
use crate::http::{parse_json, response_error, transport_error};
use crate::types::{UpdateArtistProfile, UpdateFanProfile};
use resonate_core::{ArtistProfile, FanProfile};
use tracing::debug;

/// Profile client. All operations act on the current user's profile.
pub struct ProfileClient<'a> {
    client: &'a ResonateClient,
}

impl<'a> ProfileClient<'a> {
    pub(crate) fn new(client: &'a ResonateClient) -> Self {
        Self { client }
    }

    /// Fetch the current artist's profile.
    pub async fn get_artist_profile(&self) -> Result<ArtistProfile> {
        let token = self.client.require_token()?;
        let url = format!("{}/artist-profiles", self.client.base_url());
        debug!(url = %url, "Fetching artist profile");

        let response = self
            .client
            .http()
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            parse_json(response, "artist profile").await
        } else {
            Err(response_error(response).await)
        }
    }

    /// Update the current artist's profile.
    pub async fn update_artist_profile(
        &self,
        changes: &UpdateArtistProfile,
    ) -> Result<ArtistProfile> {
        let token = self.client.require_token()?;
        let url = format!("{}/artist-profiles", self.client.base_url());
        debug!(url = %url, "Updating artist profile");

        let response = self
            .client
            .http()
            .post(&url)
            .bearer_auth(token)
            .json(changes)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            parse_json(response, "artist profile").await
        } else {
            Err(response_error(response).await)
        }
    }

    /// Fetch the current fan's profile.
    pub async fn get_fan_profile(&self) -> Result<FanProfile> {
        let token = self.client.require_token()?;
        let url = format!("{}/fan-profiles", self.client.base_url());
        debug!(url = %url, "Fetching fan profile");

        let response = self
            .client
            .http()
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            parse_json(response, "fan profile").await
        } else {
            Err(response_error(response).await)
        }
    }

    /// Update the current fan's profile.
    pub async fn update_fan_profile(&self, changes: &UpdateFanProfile) -> Result<FanProfile> {
        let token = self.client.require_token()?;
        let url = format!("{}/fan-profiles", self.client.base_url());
        debug!(url = %url, "Updating fan profile");

        let response = self
            .client
            .http()
            .post(&url)
            .bearer_auth(token)
            .json(changes)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            parse_json(response, "fan profile").await
        } else {
            Err(response_error(response).await)
        }
    }
}
