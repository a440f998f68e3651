//! Artist and fan profile types

use super::UserId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Public profile for an artist account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfile {
    pub user_id: UserId,
    pub biography: String,
    /// Platform name -> URL
    #[serde(default)]
    pub social_links: HashMap<String, String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Profile for a fan account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FanProfile {
    pub user_id: UserId,
    pub subscription_active: bool,
    #[serde(default)]
    pub subscription_start_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
