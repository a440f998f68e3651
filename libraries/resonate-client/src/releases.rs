//! Release catalog and CRUD operations.

use crate::client::ResonateClient;
use crate::error::{ClientError, Result};
use crate::http::{parse_json, response_error, transport_error};
use crate::types::ReleasePage;
use resonate_core::{CreateRelease, Release, ReleaseId, UpdateRelease};
use tracing::{debug, info};

/// Release client: public catalog browsing plus owner CRUD.
///
/// Catalog reads hit the public endpoints and need no session; create,
/// update and delete read the bearer token from the session store at
/// call time.
pub struct ReleaseClient<'a> {
    client: &'a ResonateClient,
}

impl<'a> ReleaseClient<'a> {
    pub(crate) fn new(client: &'a ResonateClient) -> Self {
        Self { client }
    }

    /// Fetch one page of the public release catalog.
    pub async fn list_public(&self, page: u32, size: u32) -> Result<ReleasePage> {
        let url = format!(
            "{}/releases/public?page={}&size={}",
            self.client.base_url(),
            page,
            size
        );
        debug!(url = %url, "Fetching public releases");

        let response = self
            .client
            .http()
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_success() {
            let releases: ReleasePage = parse_json(response, "release page").await?;
            debug!(count = releases.content.len(), total = releases.total, "Fetched releases");
            Ok(releases)
        } else {
            Err(response_error(response).await)
        }
    }

    /// Fetch a single public release with its tracks.
    pub async fn get_public(&self, id: ReleaseId) -> Result<Release> {
        let url = format!("{}/releases/public/{}", self.client.base_url(), id);
        debug!(url = %url, release_id = id, "Fetching release");

        let response = self
            .client
            .http()
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();

        if status.is_success() {
            parse_json(response, "release").await
        } else if status.as_u16() == 404 {
            Err(ClientError::Api {
                status: 404,
                message: format!("Release not found: {id}"),
            })
        } else {
            Err(response_error(response).await)
        }
    }

    /// Create a new release owned by the current artist.
    pub async fn create(&self, draft: &CreateRelease) -> Result<Release> {
        let token = self.client.require_token()?;
        let url = format!("{}/releases", self.client.base_url());
        debug!(url = %url, title = %draft.title, "Creating release");

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
            let release: Release = parse_json(response, "release").await?;
            info!(release_id = release.id, title = %release.title, "Release created");
            Ok(release)
        } else {
            Err(response_error(response).await)
        }
    }

    /// Update an existing release (owning artist only, enforced server-side).
    pub async fn update(&self, id: ReleaseId, changes: &UpdateRelease) -> Result<Release> {
        let token = self.client.require_token()?;
        let url = format!("{}/releases/{}", self.client.base_url(), id);
        debug!(url = %url, release_id = id, "Updating release");

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
            parse_json(response, "release").await
        } else {
            Err(response_error(response).await)
        }
    }

    /// Delete a release.
    pub async fn delete(&self, id: ReleaseId) -> Result<()> {
        let token = self.client.require_token()?;
        let url = format!("{}/releases/{}", self.client.base_url(), id);
        debug!(url = %url, release_id = id, "Deleting release");

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
            info!(release_id = id, "Release deleted");
            Ok(())
        } else if status.as_u16() == 404 {
            Err(ClientError::Api {
                status: 404,
                message: format!("Release not found: {id}"),
            })
        } else {
            Err(response_error(response).await)
        }
    }
}
